use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::stdout;

pub const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");

/// Lines shown in the version box, the first one being the title.
pub fn version_status_lines() -> Vec<(String, Option<Color>)> {
    vec![
        ("Volleyball Matcher".to_string(), None),
        (String::new(), None),
        (
            format!("Version: {CURRENT_VERSION}"),
            Some(Color::AnsiValue(231)), // Teletext white
        ),
        (
            format!("Package: {CRATE_NAME}"),
            Some(Color::AnsiValue(51)), // Teletext cyan
        ),
    ]
}

/// Formats a box around `lines` that is as wide as the longest line.
/// Returns plain text; colors are applied by [`print_version_status_box`].
pub fn format_status_box(lines: &[(String, Option<Color>)]) -> Vec<String> {
    let max_content_width = lines
        .iter()
        .map(|(l, _)| l.chars().count())
        .max()
        .unwrap_or(0);
    let box_width = max_content_width + 4; // 2 for borders, 2 for padding

    let mut output = vec![format!("╔{:═<width$}╗", "", width = box_width - 2)];
    for (i, (line, _)) in lines.iter().enumerate() {
        output.push(format!("║ {line:<max_content_width$} ║"));
        if i == 0 && lines.len() > 2 {
            output.push(format!("╠{:═<width$}╣", "", width = box_width - 2));
        }
    }
    output.push(format!("╚{:═<width$}╝", "", width = box_width - 2));
    output
}

/// Helper to print a dynamic-width version status box with optional color highlights
pub fn print_version_status_box(lines: Vec<(String, Option<Color>)>) {
    let boxed = format_status_box(&lines);
    let mut colors = vec![None];
    for (i, (_, color)) in lines.iter().enumerate() {
        colors.push(*color);
        if i == 0 && lines.len() > 2 {
            colors.push(None);
        }
    }
    colors.push(None);

    for (text, color) in boxed.iter().zip(colors) {
        execute!(
            stdout(),
            SetForegroundColor(color.unwrap_or(Color::AnsiValue(231))),
            Print(format!("{text}\n"))
        )
        .ok();
    }
    execute!(stdout(), ResetColor).ok();
}

pub fn print_logo() {
    execute!(
        stdout(),
        SetForegroundColor(Color::AnsiValue(226)), // Teletext yellow
        Print(format!(
            "\n{}",
            r#"
█░█ █▀█ █░░ █░░ █▀▀ █▄█ █▄▄ ▄▀█ █░░ █░░
▀▄▀ █▄█ █▄▄ █▄▄ ██▄ ░█░ █▄█ █▀█ █▄▄ █▄▄
█▀▄▀█ ▄▀█ ▀█▀ █▀▀ █░█ █▀▀ █▀█
█░▀░█ █▀█ ░█░ █▄▄ █▀█ ██▄ █▀▄
"#
        )),
        ResetColor
    )
    .ok();
}
