//! Route table for the views reachable from the navigation bar.
//!
//! A route is identified by a short key (`team-generator`,
//! `tournament-generator`, `misc`). Keys may be given with a leading `#`
//! like a URL fragment. Unknown keys fall back to the team generator.

use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    TeamGenerator,
    TournamentGenerator,
    Misc,
}

impl Route {
    /// All routes in navigation bar order
    pub const ALL: [Route; 3] = [Route::TeamGenerator, Route::TournamentGenerator, Route::Misc];

    /// Resolves a route key, with or without a leading `#`.
    ///
    /// # Example
    /// ```
    /// use volleyball_matcher::navigation::Route;
    ///
    /// assert_eq!(Route::from_hash("#misc"), Route::Misc);
    /// assert_eq!(Route::from_hash("tournament-generator"), Route::TournamentGenerator);
    /// assert_eq!(Route::from_hash("#nowhere"), Route::TeamGenerator);
    /// ```
    pub fn from_hash(hash: &str) -> Self {
        let key = hash.trim().trim_start_matches('#');
        Self::ALL
            .into_iter()
            .find(|route| route.key() == key)
            .unwrap_or_default()
    }

    pub fn key(self) -> &'static str {
        match self {
            Route::TeamGenerator => "team-generator",
            Route::TournamentGenerator => "tournament-generator",
            Route::Misc => "misc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::TeamGenerator => "Team Generator",
            Route::TournamentGenerator => "Tournament Generator",
            Route::Misc => "Misc",
        }
    }

    /// Teletext page number shown in the header for this view
    pub fn page_number(self) -> u16 {
        match self {
            Route::TeamGenerator => 201,
            Route::TournamentGenerator => 202,
            Route::Misc => 203,
        }
    }

    /// Position of the route in the navigation bar
    pub fn index(self) -> usize {
        match self {
            Route::TeamGenerator => 0,
            Route::TournamentGenerator => 1,
            Route::Misc => 2,
        }
    }

    /// Route at a navigation bar position, if any
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next route in bar order, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous route in bar order, wrapping around
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Currently selected view, owned by the presentation layer.
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    current: Route,
}

impl NavigationState {
    pub fn new(initial: Route) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    /// Switches to `route`. Returns true when the view actually changed.
    pub fn navigate(&mut self, route: Route) -> bool {
        if self.current == route {
            return false;
        }
        debug!("Navigating from {} to {}", self.current, route);
        self.current = route;
        true
    }

    /// Resolves a hash key and navigates to it.
    pub fn navigate_to_hash(&mut self, hash: &str) -> bool {
        self.navigate(Route::from_hash(hash))
    }
}
