//! State management for interactive UI
//!
//! Groups the timers, the rendered page and the application state behind the
//! three views. Every change that affects the page content goes through
//! [`InteractiveState::rebuild_page`] so the page is always built from the
//! current state.

use crate::bracket::Bracket;
use crate::constants::polling::{PAGE_CHANGE_DEBOUNCE_MS, RESIZE_DEBOUNCE_MS};
use crate::navigation::{NavigationState, Route};
use crate::teletext_ui::{TeletextPage, TeletextPageConfig};
use crate::ui::team_generator::TeamGeneratorState;
use crate::ui::views::{ViewContext, build_page};
use rand::rngs::SmallRng;
use std::time::{Duration, Instant};

/// Timer state for debouncing and adaptive polling
#[derive(Debug)]
pub struct TimerState {
    pub last_page_change: Instant,
    pub last_resize: Instant,
    pub last_activity: Instant,
}

impl TimerState {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_page_change: now
                .checked_sub(Duration::from_millis(PAGE_CHANGE_DEBOUNCE_MS))
                .unwrap_or(now),
            last_resize: now
                .checked_sub(Duration::from_millis(RESIZE_DEBOUNCE_MS))
                .unwrap_or(now),
            last_activity: now,
        }
    }

    pub fn update_activity(&mut self) {
        self.last_activity = Instant::now();
    }

    pub fn time_since_activity(&self) -> Duration {
        self.last_activity.elapsed()
    }

    /// Returns true and restarts the timer when a page change is allowed.
    pub fn try_page_change(&mut self) -> bool {
        if self.last_page_change.elapsed() >= Duration::from_millis(PAGE_CHANGE_DEBOUNCE_MS) {
            self.last_page_change = Instant::now();
            true
        } else {
            false
        }
    }

    /// Returns true and restarts the timer when a resize should be handled.
    pub fn try_resize(&mut self) -> bool {
        if self.last_resize.elapsed() >= Duration::from_millis(RESIZE_DEBOUNCE_MS) {
            self.last_resize = Instant::now();
            true
        } else {
            false
        }
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

/// UI rendering state
#[derive(Debug, Default)]
pub struct UIState {
    pub needs_render: bool,
    pub current_page: Option<TeletextPage>,
    pub plain_mode: bool,
}

/// Everything the interactive loop works on
pub struct InteractiveState {
    pub timers: TimerState,
    pub ui: UIState,
    pub navigation: NavigationState,
    pub generator: TeamGeneratorState,
    pub bracket: Bracket,
    rng: SmallRng,
}

impl InteractiveState {
    pub fn new(
        route: Route,
        generator: TeamGeneratorState,
        bracket: Bracket,
        rng: SmallRng,
        plain_mode: bool,
    ) -> Self {
        let mut state = Self {
            timers: TimerState::new(),
            ui: UIState {
                plain_mode,
                ..UIState::default()
            },
            navigation: NavigationState::new(route),
            generator,
            bracket,
            rng,
        };
        state.rebuild_page();
        state
    }

    pub fn current_route(&self) -> Route {
        self.navigation.current()
    }

    pub fn request_render(&mut self) {
        self.ui.needs_render = true;
    }

    pub fn clear_render_flag(&mut self) {
        self.ui.needs_render = false;
    }

    pub fn needs_render(&self) -> bool {
        self.ui.needs_render
    }

    pub fn current_page(&self) -> Option<&TeletextPage> {
        self.ui.current_page.as_ref()
    }

    pub fn current_page_mut(&mut self) -> Option<&mut TeletextPage> {
        self.ui.current_page.as_mut()
    }

    /// Builds the page for the current route from the current state.
    ///
    /// The page index is kept when the route did not change, clamped to the
    /// pages the new content needs.
    pub fn rebuild_page(&mut self) {
        let route = self.navigation.current();
        let previous_page = self
            .ui
            .current_page
            .as_ref()
            .filter(|page| page.active_route() == Some(route))
            .map(TeletextPage::current_page);

        let context = ViewContext {
            generator: &self.generator,
            bracket: &self.bracket,
        };
        let config = TeletextPageConfig::for_route(route).plain(self.ui.plain_mode);
        let mut page = build_page(route, &context, config);
        if let Some(index) = previous_page {
            page.set_current_page(index);
        }

        self.ui.current_page = Some(page);
        self.request_render();
    }

    /// Switches view. Returns whether the route changed.
    pub fn navigate(&mut self, route: Route) -> bool {
        if self.navigation.navigate(route) {
            self.rebuild_page();
            true
        } else {
            false
        }
    }

    /// Regenerates the team sequence. A failure is kept in the generator
    /// state and shown on the page.
    pub fn regenerate(&mut self) {
        let _ = self.generator.regenerate_with(&mut self.rng);
        if self.current_route() == Route::TeamGenerator {
            self.rebuild_page();
        }
    }

    pub fn adjust_people(&mut self, delta: i64) {
        self.generator.adjust_people(delta);
        if self.current_route() == Route::TeamGenerator {
            self.rebuild_page();
        }
    }

    pub fn adjust_nets(&mut self, delta: i64) {
        self.generator.adjust_nets(delta);
        if self.current_route() == Route::TeamGenerator {
            self.rebuild_page();
        }
    }

    /// Applies a new terminal size to the current page.
    pub fn handle_resize(&mut self) {
        if let Ok((width, height)) = crossterm::terminal::size()
            && let Some(page) = self.current_page_mut()
        {
            tracing::debug!("Applying terminal size {}x{}", width, height);
            page.set_screen_size(width, height);
        }
        self.request_render();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn state(route: Route) -> InteractiveState {
        let mut rng = SmallRng::seed_from_u64(17);
        let generator = TeamGeneratorState::mount(13, 2, &mut rng);
        InteractiveState::new(route, generator, Bracket::sample(), rng, true)
    }

    #[test]
    fn test_timer_state_allows_first_page_change() {
        let mut timers = TimerState::new();
        assert!(timers.try_page_change());
        assert!(!timers.try_page_change());
        assert!(timers.try_resize());
        assert!(!timers.try_resize());
    }

    #[test]
    fn test_new_state_builds_initial_page() {
        let state = state(Route::TournamentGenerator);
        assert!(state.needs_render());
        let page = state.current_page().unwrap();
        assert_eq!(page.active_route(), Some(Route::TournamentGenerator));
    }

    #[test]
    fn test_navigate_rebuilds_page() {
        let mut state = state(Route::TeamGenerator);
        state.clear_render_flag();
        assert!(state.navigate(Route::Misc));
        assert!(state.needs_render());
        assert_eq!(state.current_page().unwrap().active_route(), Some(Route::Misc));

        state.clear_render_flag();
        assert!(!state.navigate(Route::Misc));
        assert!(!state.needs_render());
    }

    #[test]
    fn test_regenerate_keeps_inputs() {
        let mut state = state(Route::TeamGenerator);
        state.adjust_people(1);
        assert_eq!(state.generator.sequence().len(), 13);
        state.regenerate();
        assert_eq!(state.generator.sequence().len(), 14);
        assert_eq!(state.generator.players_per_net(), vec![7, 7]);
    }

    #[test]
    fn test_invalid_nets_shows_error_on_page() {
        let mut state = state(Route::TeamGenerator);
        let before = state.generator.sequence().to_vec();
        state.adjust_nets(-2);
        state.regenerate();
        assert_eq!(state.generator.sequence(), before.as_slice());
        assert!(state.current_page().unwrap().has_error_messages());
    }
}
