pub mod interactive;
pub mod team_generator;
pub mod teletext;
pub mod views;

pub use interactive::{InteractiveOptions, run_interactive_ui};
pub use team_generator::TeamGeneratorState;
pub use views::{ViewContext, build_page};
