use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines if the application should run in non-interactive mode
/// Non-interactive mode is used when any of these conditions are met:
/// - --once flag is set (render once and exit)
/// - config operations are requested
/// - --version flag is set
pub fn is_noninteractive_mode(args: &Args) -> bool {
    args.once || is_config_update(args) || args.list_config || args.version
}

/// True when any of the flags that change the stored config is present
pub fn is_config_update(args: &Args) -> bool {
    args.set_people.is_some()
        || args.set_nets.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.new_bracket_file.is_some()
        || args.clear_bracket_file
}

/// Volleyball Matcher
///
/// A teletext-style organizer for volleyball sessions. Shuffles players
/// onto nets and shows the tournament bracket.
///
/// In interactive mode (default):
/// - Use Tab or ←/→ to switch between views, or 1-3 to jump to one
/// - Press 'g', Enter or Space to generate a new team sequence
/// - Use ↑/↓ to change the number of people and +/- to change the net count
/// - Use PgUp/PgDn to page through long views
/// - Press 'q' to quit
#[derive(Parser, Debug, Default)]
#[command(author, about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(styles = get_styles())]
pub struct Args {
    /// Number of people to split across the nets.
    /// Defaults to the configured value (13 unless changed).
    #[arg(short = 'n', long = "people", allow_negative_numbers = true)]
    pub people: Option<i64>,

    /// Number of nets in use. Defaults to the configured value (2 unless changed).
    #[arg(short = 't', long = "nets", allow_negative_numbers = true)]
    pub nets: Option<i64>,

    /// View to open: team-generator, tournament-generator or misc.
    /// A leading '#' is accepted and unknown names open the team generator.
    #[arg(long = "view", value_name = "ROUTE", help_heading = "Display Options")]
    pub view: Option<String>,

    /// Render the view once and exit. The output stays visible in terminal history.
    #[arg(short, long)]
    pub once: bool,

    /// With --once, print the generated sequence as JSON instead of the page
    #[arg(long = "json", help_heading = "Display Options")]
    pub json: bool,

    /// Seed for the shuffle. The same seed gives the same sequences.
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Render without colors
    #[arg(long = "plain", short = 'p', help_heading = "Display Options")]
    pub plain: bool,

    /// Store the default number of people in config
    #[arg(long = "set-people", help_heading = "Configuration", allow_negative_numbers = true)]
    pub set_people: Option<i64>,

    /// Store the default number of nets in config
    #[arg(long = "set-nets", help_heading = "Configuration", allow_negative_numbers = true)]
    pub set_nets: Option<i64>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// Store the path of a TOML bracket file shown in the tournament view
    #[arg(long = "set-bracket-file", help_heading = "Configuration")]
    pub new_bracket_file: Option<String>,

    /// Clear the bracket file from config. The built-in bracket is shown instead.
    #[arg(long = "clear-bracket-file", help_heading = "Configuration")]
    pub clear_bracket_file: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Show version information
    #[arg(short = 'V', long = "version", help_heading = "Info")]
    pub version: bool,

    /// Enable debug mode which doesn't switch to the alternate screen.
    /// In --once mode, logs are also written to the terminal.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
