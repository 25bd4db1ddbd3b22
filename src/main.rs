//! Star Dodger entry point
//!
//! Sets up logging and the terminal, then runs the frame loop until the
//! player quits.

use std::io::{BufWriter, stdout};
use std::panic;
use std::process::ExitCode;

use star_dodger::platform::{FrameClock, TerminalInput, TerminalSession};
use star_dodger::renderer::TerminalRenderer;
use star_dodger::{FrameOutcome, Game, GameConfig, logging};

fn main() -> ExitCode {
    let config = GameConfig::default();
    if let Err(e) = logging::init(&config.log_path) {
        eprintln!("Failed to set up logging: {:#}", e);
        return ExitCode::FAILURE;
    }
    logging::install_panic_hook();
    match serde_json::to_string(&config) {
        Ok(json) => log::info!("Star Dodger starting with config {}", json),
        Err(e) => log::warn!("Could not serialize config: {}", e),
    }

    // The session guard restores the terminal while unwinding, so report here
    match panic::catch_unwind(|| run(&config)) {
        Ok(Ok(())) => {
            log::info!("Game exited cleanly");
            ExitCode::SUCCESS
        }
        Ok(Err(e)) => {
            log::error!("An error occurred: {:#}", e);
            eprintln!("An error occurred: {:#}", e);
            ExitCode::FAILURE
        }
        Err(_) => {
            eprintln!(
                "The game crashed; details are in {}",
                config.log_path.display()
            );
            ExitCode::FAILURE
        }
    }
}

fn run(config: &GameConfig) -> anyhow::Result<()> {
    let mut game = Game::new(config);

    // Restores the terminal on every exit path, including errors
    let _session = TerminalSession::enter()?;
    let mut renderer = TerminalRenderer::new(BufWriter::new(stdout()));
    renderer.clear()?;
    let mut input = TerminalInput::new();
    let mut clock = FrameClock::new(config.target_fps);

    loop {
        let dt = clock.tick();
        let events = input.poll()?;
        if game.frame(&events, dt, &mut renderer)? == FrameOutcome::Quit {
            break;
        }
    }
    log::info!("Stopped after {} frames", clock.frame_count);
    Ok(())
}
