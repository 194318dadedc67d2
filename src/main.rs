mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal,
    ExecutableCommand,
};
use log::info;
use rand::thread_rng;

use star_raid::compute;
use star_raid::constants::DEFAULT_TARGET_SCORE;
use star_raid::entities::{GameStatus, Viewport};

const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS

// ── Configuration ─────────────────────────────────────────────────────────────

/// Target score from the first CLI argument; unset or non-numeric falls
/// back to the default of 100.
fn target_score_from_args() -> u32 {
    std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_TARGET_SCORE)
}

/// Fresh play-area bounds.  Queried on every use, never cached, so the
/// simulation follows terminal resizes.
fn viewport_now() -> std::io::Result<Viewport> {
    let (cols, rows) = terminal::size()?;
    Ok(display::viewport_for(cols, rows))
}

// ── Game loop ─────────────────────────────────────────────────────────────────

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let mut session = compute::idle_session(target_score_from_args(), viewport_now()?);
    info!("ready, target score {}", session.target_score);

    let mut last_tick = Instant::now();

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent {
                    code,
                    kind,
                    modifiers,
                    ..
                }) if kind != KeyEventKind::Release => match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        return Ok(());
                    }
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(());
                    }
                    KeyCode::Enter if session.status != GameStatus::Running => {
                        session = compute::start(&session, viewport_now()?);
                        info!("session started, target {}", session.target_score);
                    }
                    KeyCode::Left => session = compute::move_player_left(&session),
                    KeyCode::Right => {
                        session = compute::move_player_right(&session, viewport_now()?);
                    }
                    KeyCode::Up => session = compute::player_shoot(&session),
                    _ => {}
                },
                Event::Resize(cols, rows) => {
                    info!("terminal resized to {}x{}", cols, rows);
                }
                _ => {}
            }
        }

        // ── Advance the simulation by the elapsed wall-clock time ─────────────
        let viewport = viewport_now()?;
        let dt_ms = last_tick.elapsed().as_millis() as u64;
        last_tick = Instant::now();

        let was_running = session.status == GameStatus::Running;
        session = compute::tick(&session, dt_ms, viewport, &mut rng);
        if was_running && session.status.is_terminal() {
            match session.status {
                GameStatus::Won => {
                    info!("session won: score {}, level {}", session.score, session.level);
                }
                GameStatus::Lost(reason) => {
                    info!("session lost ({:?}): score {}", reason, session.score);
                }
                _ => {}
            }
        }

        display::render(out, &session, viewport)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    simple_logging::log_to_file("star_raid.log", log::LevelFilter::Info)?;
    info!("starting star_raid");

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    info!("exiting");
    result
}
