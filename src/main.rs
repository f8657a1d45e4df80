//! Terminal runner for both games (default binary).
//!
//! Polls crossterm input, maps keys to actions and drives the chosen engine
//! through `apply_action -> advance_if_due -> snapshot` every loop iteration.

use std::env;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use brick_game::core::{Engine, GameConfig, SnakeEngine, TetrisEngine};
use brick_game::input::{should_quit, snake_action, tetris_action};
use brick_game::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use brick_game::types::Action;

/// Upper bound on how long one loop iteration waits for input.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

const LOG_VAR: &str = "BRICK_GAME_LOG";

#[derive(Parser)]
#[command(name = "brick-game")]
#[command(version, about = "Falling-block and snake games for the terminal")]
struct Cli {
    /// Game to play
    #[arg(value_enum, default_value = "tetris")]
    game: Game,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Game {
    /// Falling blocks: clear full rows
    Tetris,
    /// Snake: eat apples and grow
    Snake,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config = GameConfig::from_env();
    info!(game = ?cli.game, seed = config.seed, data_dir = %config.data_dir.display(), "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = match cli.game {
        Game::Tetris => run(
            &mut term,
            &mut TetrisEngine::from_config(&config),
            &GameView::tetris(),
            tetris_action,
        ),
        Game::Snake => run(
            &mut term,
            &mut SnakeEngine::from_config(&config),
            &GameView::snake(),
            snake_action,
        ),
    };

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Stderr logging, only when `BRICK_GAME_LOG` holds a filter directive.
fn init_logging() {
    let Ok(directive) = env::var(LOG_VAR) else {
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_writer(std::io::stderr)
        .init();
}

fn run<E: Engine>(
    term: &mut TerminalRenderer,
    engine: &mut E,
    view: &GameView,
    keymap: fn(KeyEvent) -> Option<Action>,
) -> Result<()> {
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let snap = engine.snapshot();
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        engine.apply_action(Action::Terminate);
                        return Ok(());
                    }
                    // Any key leaves the final screen.
                    if !engine.status().is_playing() {
                        return Ok(());
                    }
                    if let Some(action) = keymap(key) {
                        engine.apply_action(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        engine.advance_if_due();
    }
}
