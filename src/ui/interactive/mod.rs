//! Interactive UI module
//!
//! This module is organized into focused submodules:
//! - `polling`: Adaptive event polling intervals
//! - `input_handler`: Key mapping and UI actions
//! - `state_manager`: Timers, current page and view state
//! - `event_handler`: Event polling and dispatch
//! - `terminal_manager`: Raw mode and alternate screen handling
//! - `core`: Main interactive UI loop

mod core;
mod event_handler;
mod input_handler;
mod polling;
mod state_manager;
mod terminal_manager;

pub use self::core::*;
pub use event_handler::{EventHandler, EventResult};
pub use input_handler::{UiAction, map_key};
pub use state_manager::InteractiveState;
pub use terminal_manager::{TerminalConfig, TerminalManager};
