mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use side_scroller::input::{HeldKeys, Input};
use side_scroller::session::GameSession;

#[derive(Parser, Debug)]
#[command(name = "side_scroller")]
#[command(about = "Side-scrolling shooter in the terminal")]
struct Args {
    /// Seed for the one-time level generation (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Simulation ticks per second
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Write logs here (filtered by RUST_LOG); the terminal itself is
    /// taken over by the game
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ── Game loop ─────────────────────────────────────────────────────────────────

const LEFT_KEYS: [KeyCode; 3] = [KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')];
const RIGHT_KEYS: [KeyCode; 3] = [KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')];

/// Runs until the player quits.
///
/// Movement and jumping follow the held-key map; shooting and restart act
/// only on a fresh press, so holding a key never auto-fires.
fn game_loop<W: Write>(
    out: &mut W,
    session: &mut GameSession,
    rx: &mpsc::Receiver<Event>,
    frame_time: Duration,
) -> Result<()> {
    let mut held: HeldKeys<KeyCode> = HeldKeys::default();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;
        let mut shoot = false;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
                // resize/focus/mouse: the next render picks up the new size
                continue;
            };
            match kind {
                KeyEventKind::Press => {
                    let fresh = held.press(code, frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            return Ok(());
                        }
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(());
                        }
                        KeyCode::Char('r') | KeyCode::Char('R')
                            if fresh && session.is_game_over() =>
                        {
                            session.restart();
                            held.clear();
                        }
                        KeyCode::Char('z') | KeyCode::Char('Z') if fresh => shoot = true,
                        _ => {}
                    }
                }
                KeyEventKind::Repeat => held.repeat(code, frame),
                // Release: only sent on the keyboard-enhancement path
                KeyEventKind::Release => held.release(code),
            }
        }

        let input = Input {
            left: held.any_held(&LEFT_KEYS, frame),
            right: held.any_held(&RIGHT_KEYS, frame),
            jump: held.is_held(KeyCode::Char(' '), frame),
            shoot,
        };
        session.tick(&input);

        let (width, height) = terminal::size()?;
        display::render(out, session, width, height)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = GameSession::new(&mut rng).context("failed to build the level sequence")?;
    tracing::info!(seed = ?args.seed, fps = args.fps, "session started");

    let frame_time = Duration::from_secs(1) / args.fps.max(1);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = game_loop(&mut out, &mut session, &rx, frame_time);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    tracing::info!(score = session.player().score, "session ended");
    result
}
