//! Main interactive UI loop.
//!
//! Builds the initial state, hands the terminal to the loop and restores it
//! afterwards. The screen is redrawn only when the state asks for it.

use super::event_handler::{EventHandler, EventResult};
use super::state_manager::InteractiveState;
use super::terminal_manager::{TerminalConfig, TerminalManager};
use crate::bracket::Bracket;
use crate::error::AppError;
use crate::navigation::Route;
use crate::sequence::session_rng;
use crate::ui::team_generator::TeamGeneratorState;
use std::io::Stdout;

/// Settings for one interactive session
#[derive(Debug, Clone)]
pub struct InteractiveOptions {
    pub route: Route,
    pub number_of_people: i64,
    pub net_count: i64,
    pub bracket: Bracket,
    /// Fixed seed for reproducible shuffles
    pub seed: Option<u64>,
    pub plain_mode: bool,
    pub debug_mode: bool,
}

/// Creates the state the loop starts from: the generator is mounted so the
/// first sequence is on screen right away.
pub fn initial_state(options: InteractiveOptions) -> InteractiveState {
    let mut rng = session_rng(options.seed);
    let generator =
        TeamGeneratorState::mount(options.number_of_people, options.net_count, &mut rng);
    InteractiveState::new(
        options.route,
        generator,
        options.bracket,
        rng,
        options.plain_mode,
    )
}

fn run_event_loop(
    state: &mut InteractiveState,
    handler: &EventHandler,
    stdout: &mut Stdout,
) -> Result<(), AppError> {
    loop {
        if state.needs_render() {
            if let Some(page) = state.current_page() {
                page.render_buffered(stdout)?;
            }
            state.clear_render_flag();
        }

        if handler.process_events(state)? == EventResult::Exit {
            return Ok(());
        }
    }
}

/// Runs the interactive UI until the user quits.
pub fn run_interactive_ui(options: InteractiveOptions) -> Result<(), AppError> {
    tracing::info!(
        "Starting interactive UI on {} with {} people over {} nets",
        options.route,
        options.number_of_people,
        options.net_count
    );

    let terminal = TerminalManager::with_config(TerminalConfig {
        debug_mode: options.debug_mode,
    });
    let mut state = initial_state(options);
    let handler = EventHandler::new();

    let mut stdout = terminal.setup_terminal()?;
    let result = run_event_loop(&mut state, &handler, &mut stdout);
    terminal.cleanup_terminal(stdout)?;

    if let Err(e) = &result {
        tracing::error!("Interactive UI stopped with error: {}", e);
    } else {
        tracing::info!("Interactive UI closed");
    }
    result
}
