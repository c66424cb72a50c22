//! Event handling coordination for interactive UI
//!
//! Polls crossterm for keyboard and resize events with an adaptive interval
//! and forwards them to the input handler and the state manager.

use super::input_handler::{UiAction, apply_action, map_key};
use super::polling::calculate_poll_interval;
use super::state_manager::InteractiveState;
use crate::error::AppError;
use crossterm::event::{self, Event};

/// Result of processing an event
#[derive(Debug, PartialEq)]
pub enum EventResult {
    /// No event arrived within the poll interval
    Continue,
    /// Exit the application
    Exit,
    /// Event was handled, continue processing
    Handled,
}

/// Main event handler for interactive UI
#[derive(Debug, Default)]
pub struct EventHandler;

impl EventHandler {
    pub fn new() -> Self {
        Self
    }

    /// Waits for at most one poll interval and processes the event that
    /// arrived, if any.
    pub fn process_events(&self, state: &mut InteractiveState) -> Result<EventResult, AppError> {
        let poll_interval = calculate_poll_interval(state.timers.time_since_activity());

        if !event::poll(poll_interval)? {
            return Ok(EventResult::Continue);
        }

        state.timers.update_activity();
        match event::read()? {
            Event::Key(key_event) => {
                tracing::debug!(
                    "Key event: {:?}, modifiers: {:?}",
                    key_event.code,
                    key_event.modifiers
                );
                Ok(self.handle_event(state, map_key(&key_event)))
            }
            Event::Resize(width, height) => {
                self.handle_resize_event(state, width, height);
                Ok(EventResult::Handled)
            }
            _ => Ok(EventResult::Continue),
        }
    }

    fn handle_event(
        &self,
        state: &mut InteractiveState,
        action: Option<UiAction>,
    ) -> EventResult {
        match action {
            Some(action) if apply_action(state, action) => EventResult::Exit,
            Some(_) => EventResult::Handled,
            None => EventResult::Continue,
        }
    }

    fn handle_resize_event(&self, state: &mut InteractiveState, width: u16, height: u16) {
        tracing::debug!("Resize event received: {}x{}", width, height);

        if state.timers.try_resize() {
            state.handle_resize();
        } else {
            tracing::debug!("Resize event ignored due to debouncing");
        }
    }
}
