// src/teletext_ui/rendering.rs - Turns page rows into terminal lines

use super::core::{TeletextPage, TeletextRow};
use super::footer::{calculate_footer_position, footer_controls, render_footer};
use super::pagination::{token_cell_width, tokens_per_line};
use super::utils::{RESET, bg, fg, fit_to_width, wrap_text};
use crate::bracket::Team;
use crate::constants::ui::{CONTENT_MARGIN, TEAM_NAME_WIDTH, TITLE_WIDTH};
use crate::navigation::Route;
use crate::ui::teletext::colors::*;

impl TeletextPage {
    fn paint(&self, escape: String, text: &str) -> String {
        if self.plain_mode {
            text.to_string()
        } else {
            format!("{escape}{text}{RESET}")
        }
    }

    fn header_lines(&self) -> Vec<String> {
        let width = self.screen_width as usize;
        let header_width = width.saturating_sub(TITLE_WIDTH);
        let header_text = match &self.header_date {
            Some(date) => format!("MATCHER {} {}", self.page_number, date),
            None => format!("MATCHER {}", self.page_number),
        };

        let total_pages = self.total_pages();
        let page_info = if total_pages > 1 && !self.ignore_height_limit {
            format!("{}/{}", self.current_page + 1, total_pages)
        } else {
            String::new()
        };

        let (title_line, subheader_line) = if self.plain_mode {
            (
                format!("{:<TITLE_WIDTH$}{:>header_width$}", self.title, header_text),
                format!("{:<TITLE_WIDTH$}{:>header_width$}", self.subheader, page_info),
            )
        } else {
            (
                format!(
                    "{}{}{:<TITLE_WIDTH$}{}{}{:>header_width$}{RESET}",
                    bg(title_bg(), 46),
                    fg(header_fg(), 21),
                    self.title,
                    bg(header_bg(), 21),
                    fg(text_fg(), 231),
                    header_text,
                ),
                format!(
                    "{}{:<TITLE_WIDTH$}{:>header_width$}{RESET}",
                    fg(subheader_fg(), 46),
                    self.subheader,
                    page_info,
                ),
            )
        };

        let mut lines = vec![title_line, subheader_line];
        if let Some(active) = self.active_route {
            lines.push(self.navigation_bar(active));
        }
        lines.push(String::new());
        lines
    }

    /// One tab per route, the active one highlighted.
    fn navigation_bar(&self, active: Route) -> String {
        let margin = " ".repeat(CONTENT_MARGIN);
        let tabs: Vec<String> = Route::ALL
            .iter()
            .map(|&route| {
                let label = format!("{} {}", route.index() + 1, route.label());
                if self.plain_mode {
                    if route == active {
                        format!("[{label}]")
                    } else {
                        format!(" {label} ")
                    }
                } else if route == active {
                    format!(
                        "{}{} {label} {RESET}",
                        bg(route_bg(route), 21),
                        fg(text_fg(), 231)
                    )
                } else {
                    format!("{} {label} {RESET}", fg(label_fg(), 51))
                }
            })
            .collect();
        format!("{margin}{}", tabs.join(" "))
    }

    fn team_line(&self, team: &Team, is_winner: bool) -> String {
        let name = fit_to_width(&team.name, TEAM_NAME_WIDTH);
        let score = team.score.map(|s| format!("{s:>3}"));

        if self.plain_mode {
            let marker = if is_winner { '>' } else { ' ' };
            return match score {
                Some(score) => format!("{marker} {name} {score}"),
                None => format!("{marker} {}", name.trim_end()),
            };
        }

        if is_winner {
            let score = score
                .map(|s| format!(" {}{}{s}", bg(winner_score_bg(), 34), fg(text_fg(), 231)))
                .unwrap_or_default();
            format!("  \x1b[1m{}{name}{score}{RESET}", fg(text_fg(), 231))
        } else {
            let score = score.map(|s| format!(" {s}")).unwrap_or_default();
            format!("  {}{name}{score}{RESET}", fg(loser_fg(), 245))
        }
    }

    fn sequence_lines(&self, sequence: &[usize]) -> Vec<String> {
        if sequence.is_empty() {
            return vec![String::new()];
        }
        let digits = token_cell_width(sequence) - 2;
        let per_line = tokens_per_line(sequence, self.content_width());
        sequence
            .chunks(per_line)
            .map(|chunk| {
                chunk
                    .iter()
                    .map(|&net| {
                        if self.plain_mode {
                            format!("[{net:>digits$}]")
                        } else {
                            format!(
                                "{}{} {net:>digits$} {RESET}",
                                bg(net_bg(net), 21),
                                fg(net_fg(net), 231)
                            )
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }

    /// Lines for one content row, without the left margin.
    pub(super) fn render_row(&self, row: &TeletextRow) -> Vec<String> {
        let width = self.content_width();
        match row {
            TeletextRow::Heading(text) => vec![self.paint(fg(heading_fg(), 226), text)],
            TeletextRow::Text(text) => wrap_text(text, width)
                .iter()
                .map(|line| self.paint(fg(text_fg(), 231), line))
                .collect(),
            TeletextRow::Blank => vec![String::new()],
            TeletextRow::Field { label, value } => vec![format!(
                "{} {}",
                self.paint(fg(label_fg(), 51), &format!("{label}:")),
                self.paint(fg(text_fg(), 231), value)
            )],
            TeletextRow::SequenceTokens(sequence) => self.sequence_lines(sequence),
            TeletextRow::MatchResult { teams, winner } => {
                let mut lines: Vec<String> = teams
                    .iter()
                    .enumerate()
                    .map(|(index, team)| self.team_line(team, *winner == Some(index)))
                    .collect();
                lines.push(String::new());
                lines
            }
            TeletextRow::Connector(text) => vec![self.paint(fg(connector_fg(), 244), text)],
            TeletextRow::ErrorMessage(text) => wrap_text(text, width)
                .iter()
                .map(|line| self.paint(fg(error_fg(), 196), line))
                .collect(),
        }
    }

    fn content_lines(&self) -> Vec<String> {
        let margin = " ".repeat(CONTENT_MARGIN);
        self.get_page_content()
            .iter()
            .flat_map(|row| self.render_row(row))
            .map(|line| {
                if line.is_empty() {
                    line
                } else {
                    format!("{margin}{line}")
                }
            })
            .collect()
    }

    /// Header, navigation bar and current page content, plus the footer when
    /// it is enabled.
    pub(super) fn render_lines(&self) -> Vec<String> {
        let mut lines = self.header_lines();
        lines.extend(self.content_lines());
        if self.show_footer {
            let mut footer = String::new();
            render_footer(
                &mut footer,
                0,
                self.screen_width as usize,
                &footer_controls(self.active_route, self.total_pages()),
                self.plain_mode,
                false,
            );
            lines.push(String::new());
            lines.push(footer);
        }
        lines
    }

    /// Full screen contents. Interactive pages are drawn with absolute
    /// cursor positions and the footer pinned to the bottom line.
    pub(super) fn render_screen_buffer(&self) -> String {
        if self.ignore_height_limit {
            return self.render_to_string();
        }

        let width = self.screen_width as usize;
        let mut buffer = String::with_capacity(width * self.screen_height as usize * 2);
        buffer.push_str("\x1b[H"); // Move to home position
        buffer.push_str("\x1b[0J"); // Clear from cursor down

        let mut current_line = 0usize;
        for line in self.header_lines().into_iter().chain(self.content_lines()) {
            current_line += 1;
            buffer.push_str(&format!("\x1b[{current_line};1H{line}"));
        }

        if self.show_footer {
            let footer_y = calculate_footer_position(
                self.ignore_height_limit,
                current_line,
                self.screen_height,
            );
            render_footer(
                &mut buffer,
                footer_y,
                width,
                &footer_controls(self.active_route, self.total_pages()),
                self.plain_mode,
                true,
            );
        }
        buffer
    }
}
