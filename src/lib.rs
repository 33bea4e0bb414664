pub mod camera;
pub mod collision;
pub mod config;
pub mod entities;
pub mod error;
pub mod input;
pub mod level;
pub mod physics;
pub mod scoring;
pub mod session;
