use crate::navigation::Route;
use crossterm::style::Color;

// Constants for teletext appearance
pub fn header_bg() -> Color {
    Color::AnsiValue(21)
} // Bright blue
pub fn header_fg() -> Color {
    Color::AnsiValue(21)
} // Bright blue
pub fn subheader_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn text_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn heading_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow
pub fn label_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan
pub fn winner_score_bg() -> Color {
    Color::AnsiValue(34)
} // Green
pub fn loser_fg() -> Color {
    Color::AnsiValue(245)
} // Grey
pub fn connector_fg() -> Color {
    Color::AnsiValue(244)
} // Dim grey
pub fn error_fg() -> Color {
    Color::AnsiValue(196)
} // Bright red
pub fn title_bg() -> Color {
    Color::AnsiValue(46)
} // Bright green

/// Background of the active navigation tab
pub fn route_bg(route: Route) -> Color {
    match route {
        Route::TeamGenerator => Color::AnsiValue(21),       // Blue
        Route::TournamentGenerator => Color::AnsiValue(34), // Green
        Route::Misc => Color::AnsiValue(93),                // Purple
    }
}

/// Token background for a net label. Cycles through the teletext palette.
pub fn net_bg(net: usize) -> Color {
    const PALETTE: [u8; 6] = [21, 196, 34, 201, 51, 226];
    Color::AnsiValue(PALETTE[net.saturating_sub(1) % PALETTE.len()])
}

/// Token foreground that stays readable on [`net_bg`]
pub fn net_fg(net: usize) -> Color {
    match net.saturating_sub(1) % 6 {
        4 | 5 => Color::AnsiValue(16), // Black on cyan and yellow
        _ => Color::AnsiValue(231),
    }
}
