//! Application-wide constants and configuration values
//!
//! This module centralizes all magic numbers and configuration constants
//! to improve maintainability and make the codebase more configurable.

/// Number of people shown in the generator when nothing else is configured
pub const DEFAULT_NUMBER_OF_PEOPLE: i64 = 13;

/// Number of nets shown in the generator when nothing else is configured
pub const DEFAULT_NET_COUNT: i64 = 2;

/// Name used for the config directory and the default log file
pub const APP_DIR_NAME: &str = "volleyball_matcher";

/// Default log file name inside the log directory
pub const LOG_FILE_NAME: &str = "volleyball_matcher.log";

/// Terminal title set in every mode
pub const TERMINAL_TITLE: &str = "VOLLEYBALL MATCHER";

/// Limits for values that can be entered through the UI and config
pub mod limits {
    /// Largest number of people accepted from config or key presses
    pub const MAX_PEOPLE: i64 = 999;

    /// Largest number of nets accepted from config or key presses
    pub const MAX_NETS: i64 = 99;
}

/// UI polling intervals in milliseconds
pub mod polling {
    /// Polling interval for active use (< 5 seconds idle)
    pub const ACTIVE_MS: u64 = 50;

    /// Polling interval for semi-active use (5-30 seconds idle)
    pub const SEMI_ACTIVE_MS: u64 = 200;

    /// Polling interval for idle use (> 30 seconds idle)
    pub const IDLE_MS: u64 = 500;

    /// Threshold for considering user as idle (seconds)
    pub const IDLE_THRESHOLD_SECONDS: u64 = 30;

    /// Threshold for considering user as semi-active (seconds)
    pub const SEMI_ACTIVE_THRESHOLD_SECONDS: u64 = 5;

    /// Minimum time between two page changes (milliseconds)
    pub const PAGE_CHANGE_DEBOUNCE_MS: u64 = 200;

    /// Minimum time between two handled resize events (milliseconds)
    pub const RESIZE_DEBOUNCE_MS: u64 = 500;
}

/// UI layout constants
pub mod ui {
    /// Content margin from terminal border
    pub const CONTENT_MARGIN: usize = 2;

    /// Width of the title block in the header line
    pub const TITLE_WIDTH: usize = 20;

    /// Width used when rendering without a terminal (once mode, tests)
    pub const DEFAULT_WIDTH: u16 = 80;

    /// Height used when the terminal size cannot be read
    pub const DEFAULT_HEIGHT: u16 = 24;

    /// Lines reserved for header, navigation bar and footer
    pub const RESERVED_LINES: u16 = 6;

    /// Width of a team name column in bracket rows
    pub const TEAM_NAME_WIDTH: usize = 20;
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable overriding the default number of people
    pub const PEOPLE: &str = "VOLLEYBALL_PEOPLE";

    /// Environment variable overriding the default net count
    pub const NETS: &str = "VOLLEYBALL_NETS";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "VOLLEYBALL_LOG_FILE";

    /// Environment variable for bracket file override
    pub const BRACKET_FILE: &str = "VOLLEYBALL_BRACKET_FILE";
}
