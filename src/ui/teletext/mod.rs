pub mod colors;
pub mod page_config;

pub use page_config::TeletextPageConfig;
