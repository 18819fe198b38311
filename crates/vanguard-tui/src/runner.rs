//! Main TUI runner - entry point and event loop
//!
//! One iteration per frame: drain timer and signal messages, render, count
//! the frame (which applies memory-pressure lag), then wait up to one frame
//! interval for a key.

use vanguard_app::Engine;
use vanguard_core::prelude::*;

use super::{event, render, terminal};

/// Run the shell in the terminal until the user quits
pub async fn run(mut engine: Engine) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = terminal::init()?;

    engine.start();

    // Blocks this thread on terminal polling; timer tasks run on the
    // runtime's worker threads
    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();

    // Restore terminal; a loop error takes precedence
    let restored = terminal::restore();
    result.and(restored)
}

/// Consecutive failed frames tolerated before the loop gives up
const MAX_FRAME_ERRORS: u32 = 3;

/// Main event loop
fn run_loop(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    let mut failed_frames = 0;

    while !engine.should_quit() {
        match run_frame(terminal, engine) {
            Ok(()) => failed_frames = 0,
            Err(e) => {
                failed_frames += 1;
                if !keep_running(&e, failed_frames) {
                    return Err(e);
                }
                warn!("Frame failed ({} in a row): {}", failed_frames, e);
            }
        }
    }

    debug!("Event loop finished");
    Ok(())
}

/// One loop iteration
fn run_frame(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    // Process external messages (timers, signal handler)
    engine.drain_pending_messages();

    // Render
    terminal
        .draw(|frame| render::view(frame, &engine.state))
        .context("Drawing frame")?;
    engine.on_frame(std::time::Instant::now());

    // Handle terminal events
    if let Some(message) = event::poll(engine.settings.ui.frame_interval())? {
        engine.process_message(message);
    }
    Ok(())
}

/// Whether the loop survives an error after `failed_frames` failures in a row
fn keep_running(error: &Error, failed_frames: u32) -> bool {
    if error.is_fatal() {
        return false;
    }
    error.is_recoverable() || failed_frames < MAX_FRAME_ERRORS
}
