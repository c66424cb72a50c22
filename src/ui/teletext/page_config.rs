//! Teletext page configuration

use crate::navigation::Route;

/// Configuration for creating a TeletextPage.
/// Provides a more ergonomic API for functions with many parameters.
#[derive(Debug, Clone)]
pub struct TeletextPageConfig {
    pub page_number: u16,
    pub title: String,
    pub subheader: String,
    /// Route highlighted in the navigation bar. No bar is drawn when `None`.
    pub active_route: Option<Route>,
    pub show_footer: bool,
    pub ignore_height_limit: bool,
    /// Render without ANSI colors
    pub plain_mode: bool,
}

impl TeletextPageConfig {
    pub fn new(page_number: u16, title: String, subheader: String) -> Self {
        Self {
            page_number,
            title,
            subheader,
            active_route: None,
            show_footer: true,
            ignore_height_limit: false,
            plain_mode: false,
        }
    }

    /// Configuration for the page of a navigation route
    pub fn for_route(route: Route) -> Self {
        let mut config = Self::new(
            route.page_number(),
            "LENTOPALLO".to_string(),
            route.label().to_uppercase(),
        );
        config.active_route = Some(route);
        config
    }

    /// Settings for a single non-interactive render: no footer and no
    /// height limit.
    pub fn once(mut self) -> Self {
        self.show_footer = false;
        self.ignore_height_limit = true;
        self
    }

    pub fn plain(mut self, plain_mode: bool) -> Self {
        self.plain_mode = plain_mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_route_uses_route_page_and_label() {
        let config = TeletextPageConfig::for_route(Route::TournamentGenerator);
        assert_eq!(config.page_number, 202);
        assert_eq!(config.subheader, "TOURNAMENT GENERATOR");
        assert_eq!(config.active_route, Some(Route::TournamentGenerator));
        assert!(config.show_footer);
    }

    #[test]
    fn test_once_disables_footer_and_height_limit() {
        let config = TeletextPageConfig::for_route(Route::Misc).once().plain(true);
        assert!(!config.show_footer);
        assert!(config.ignore_height_limit);
        assert!(config.plain_mode);
    }
}
