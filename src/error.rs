use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("level index {index} out of range (have {count} levels)")]
    IndexOutOfRange { index: usize, count: usize },
    #[error("cannot advance past the final level (index {index})")]
    FinalLevel { index: usize },
}
