// src/teletext_ui/mod.rs - Modular teletext UI system

pub mod core;
pub mod footer;
pub mod pagination;
pub mod rendering;
pub mod utils;

pub use self::core::*;

pub use utils::get_ansi_code;
