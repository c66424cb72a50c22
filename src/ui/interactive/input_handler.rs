//! Keyboard input handling for the interactive UI.
//!
//! Key events are first mapped to a [`UiAction`] by [`map_key`], which has no
//! side effects, and then applied to the interactive state.

use super::state_manager::InteractiveState;
use crate::navigation::Route;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the UI to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    Quit,
    NextView,
    PreviousView,
    JumpTo(Route),
    Regenerate,
    AdjustPeople(i64),
    AdjustNets(i64),
    NextPage,
    PreviousPage,
}

/// Maps a key event to an action. Releases and unbound keys give `None`.
pub fn map_key(key_event: &KeyEvent) -> Option<UiAction> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL) {
        return match key_event.code {
            KeyCode::Char('c') => Some(UiAction::Quit),
            _ => None,
        };
    }

    match key_event.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(UiAction::Quit),
        KeyCode::Tab | KeyCode::Right => Some(UiAction::NextView),
        KeyCode::BackTab | KeyCode::Left => Some(UiAction::PreviousView),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            Route::from_index(index).map(UiAction::JumpTo)
        }
        KeyCode::Char('g') | KeyCode::Char(' ') | KeyCode::Enter => Some(UiAction::Regenerate),
        KeyCode::Up => Some(UiAction::AdjustPeople(1)),
        KeyCode::Down => Some(UiAction::AdjustPeople(-1)),
        KeyCode::Char('+') => Some(UiAction::AdjustNets(1)),
        KeyCode::Char('-') => Some(UiAction::AdjustNets(-1)),
        KeyCode::PageDown => Some(UiAction::NextPage),
        KeyCode::PageUp => Some(UiAction::PreviousPage),
        _ => None,
    }
}

/// Applies an action to the state. Returns true when the UI should exit.
///
/// Generator actions only apply while the team generator is shown.
pub(super) fn apply_action(state: &mut InteractiveState, action: UiAction) -> bool {
    tracing::debug!("Applying UI action {:?}", action);
    let on_generator = state.current_route() == Route::TeamGenerator;

    match action {
        UiAction::Quit => {
            tracing::info!("Quit requested");
            return true;
        }
        UiAction::NextView => {
            let next = state.current_route().next();
            state.navigate(next);
        }
        UiAction::PreviousView => {
            let previous = state.current_route().previous();
            state.navigate(previous);
        }
        UiAction::JumpTo(route) => {
            state.navigate(route);
        }
        UiAction::Regenerate if on_generator => state.regenerate(),
        UiAction::AdjustPeople(delta) if on_generator => state.adjust_people(delta),
        UiAction::AdjustNets(delta) if on_generator => state.adjust_nets(delta),
        UiAction::Regenerate | UiAction::AdjustPeople(_) | UiAction::AdjustNets(_) => {}
        UiAction::NextPage | UiAction::PreviousPage => {
            if state.timers.try_page_change() {
                let changed = state
                    .current_page_mut()
                    .map(|page| {
                        if action == UiAction::NextPage {
                            page.next_page()
                        } else {
                            page.previous_page()
                        }
                    })
                    .unwrap_or(false);
                if changed {
                    state.request_render();
                }
            }
        }
    }
    false
}
