//! Footer rendering for teletext UI
//!
//! The footer lists the control keys that apply to the current view.

use crate::navigation::Route;
use crate::teletext_ui::utils::{RESET, bg, fg};
use crate::ui::teletext::colors::*;

/// Control key help for the given view.
pub fn footer_controls(route: Option<Route>, total_pages: usize) -> String {
    let mut controls = String::from("q=Quit");
    if route.is_some() {
        controls.push_str(" ←→=View");
    }
    if route == Some(Route::TeamGenerator) {
        controls.push_str(" g=Generate ↑↓=People +/-=Nets");
    }
    if total_pages > 1 {
        controls.push_str(" PgUp/PgDn=Pages");
    }
    controls
}

/// Builds the footer line, positioned at `footer_y` (0-based) when
/// `positioned` is set.
pub fn render_footer(
    buffer: &mut String,
    footer_y: usize,
    width: usize,
    controls: &str,
    plain_mode: bool,
    positioned: bool,
) {
    if positioned {
        // Convert 0-based footer_y to 1-based for ANSI cursor positioning
        buffer.push_str(&format!("\x1b[{};1H", footer_y + 1));
    }

    let footer_width = width.saturating_sub(6);
    if plain_mode {
        buffer.push_str(&format!("   {controls:^footer_width$}   "));
    } else {
        buffer.push_str(&format!(
            "{}{}   {}{:^footer_width$}{}   {RESET}",
            bg(header_bg(), 21),
            fg(header_fg(), 21),
            fg(text_fg(), 231),
            controls,
            fg(header_fg(), 21),
        ));
    }
}

/// Calculates the footer position based on settings and screen size
///
/// # Returns
/// * `usize` - The y-coordinate of the footer
pub fn calculate_footer_position(
    ignore_height_limit: bool,
    current_line: usize,
    screen_height: u16,
) -> usize {
    if ignore_height_limit {
        // In non-interactive mode, position footer after content
        current_line + 1
    } else {
        // In interactive mode, position footer at bottom of screen
        screen_height.saturating_sub(1) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_footer_position_interactive() {
        let position = calculate_footer_position(false, 10, 24);

        // In interactive mode, footer should be at bottom of screen
        assert_eq!(position, 23);
    }

    #[test]
    fn test_calculate_footer_position_non_interactive() {
        let position = calculate_footer_position(true, 10, 24);

        // In non-interactive mode, footer should be below content
        assert_eq!(position, 11);
    }

    #[test]
    fn test_footer_controls_depend_on_view() {
        let team = footer_controls(Some(Route::TeamGenerator), 1);
        assert!(team.contains("g=Generate"));
        assert!(!team.contains("PgUp"));

        let bracket = footer_controls(Some(Route::TournamentGenerator), 2);
        assert!(!bracket.contains("g=Generate"));
        assert!(bracket.contains("PgUp/PgDn=Pages"));

        assert_eq!(footer_controls(None, 1), "q=Quit");
    }

    #[test]
    fn test_plain_footer_has_no_escapes() {
        let mut buffer = String::new();
        render_footer(&mut buffer, 23, 40, "q=Quit", true, false);
        assert!(!buffer.contains('\x1b'));
        assert!(buffer.contains("q=Quit"));
        assert_eq!(buffer.chars().count(), 40);
    }
}
