//! Volleyball Matcher Library
//!
//! This library provides a random team sequence generator and a static
//! tournament bracket viewer, displayed in a teletext-style format.
//!
//! # Examples
//!
//! ```rust
//! use volleyball_matcher::ui::{TeamGeneratorState, ViewContext, build_page};
//! use volleyball_matcher::teletext_ui::TeletextPageConfig;
//! use volleyball_matcher::{AppError, Bracket, Route};
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//!
//! fn main() -> Result<(), AppError> {
//!     // Shuffle 13 people onto 2 nets
//!     let mut rng = SmallRng::seed_from_u64(2024);
//!     let generator = TeamGeneratorState::mount(13, 2, &mut rng);
//!     assert_eq!(generator.players_per_net(), vec![7, 6]);
//!
//!     // Create the teletext page for the team generator view
//!     let bracket = Bracket::sample();
//!     let context = ViewContext { generator: &generator, bracket: &bracket };
//!     let page = build_page(
//!         Route::TeamGenerator,
//!         &context,
//!         TeletextPageConfig::for_route(Route::TeamGenerator).once().plain(true),
//!     );
//!
//!     // Render the page to stdout
//!     let mut stdout = std::io::stdout();
//!     page.render_buffered(&mut stdout)?;
//!
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod bracket;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod navigation;
pub mod sequence;
pub mod teletext_ui;
pub mod ui;
pub mod version;

// Re-export commonly used types for convenience
pub use bracket::Bracket;
pub use config::Config;
pub use error::AppError;
pub use navigation::Route;
pub use sequence::generate_sequence;
pub use teletext_ui::TeletextPage;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
