// src/teletext_ui/core.rs - Teletext page model

use crate::bracket::Team;
use crate::constants::ui::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::AppError;
use crate::navigation::Route;

pub use crate::ui::teletext::page_config::TeletextPageConfig;

#[derive(Debug)]
pub struct TeletextPage {
    pub(super) page_number: u16,
    pub(super) title: String,
    pub(super) subheader: String,
    pub(super) active_route: Option<Route>,
    pub(super) content_rows: Vec<TeletextRow>,
    pub(super) current_page: usize,
    pub(super) screen_width: u16,
    pub(super) screen_height: u16,
    pub(super) show_footer: bool,
    pub(super) ignore_height_limit: bool,
    pub(super) plain_mode: bool,
    pub(super) header_date: Option<String>, // Shown in the header, dd.mm.yyyy
}

#[derive(Debug, Clone, PartialEq)]
pub enum TeletextRow {
    Heading(String),
    Text(String),
    Blank,
    /// Label and value on one line, e.g. "Number of People: 13"
    Field { label: String, value: String },
    /// Net labels drawn as tokens, wrapped to the page width
    SequenceTokens(Vec<usize>),
    /// One bracket match, teams listed in seed order
    MatchResult {
        teams: Vec<Team>,
        winner: Option<usize>,
    },
    /// Connector joining matches into the next round
    Connector(String),
    ErrorMessage(String),
}

impl TeletextPage {
    /// Creates a new TeletextPage instance with the specified parameters.
    ///
    /// # Example
    /// ```
    /// use volleyball_matcher::teletext_ui::TeletextPage;
    ///
    /// let mut page = TeletextPage::new(201, "LENTOPALLO".to_string(), "TEAMS".to_string(), false, true, true);
    /// page.add_sequence(vec![1, 2, 1]);
    /// assert!(page.render_to_string().contains("[1] [2] [1]"));
    /// ```
    pub fn new(
        page_number: u16,
        title: String,
        subheader: String,
        show_footer: bool,
        ignore_height_limit: bool,
        plain_mode: bool,
    ) -> Self {
        // Get terminal size, fallback to reasonable default if can't get size
        let (screen_width, screen_height) = if ignore_height_limit {
            (DEFAULT_WIDTH, DEFAULT_HEIGHT)
        } else {
            crossterm::terminal::size().unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT))
        };

        TeletextPage {
            page_number,
            title,
            subheader,
            active_route: None,
            content_rows: Vec::new(),
            current_page: 0,
            screen_width,
            screen_height,
            show_footer,
            ignore_height_limit,
            plain_mode,
            header_date: None,
        }
    }

    /// Creates a new TeletextPage from a configuration struct.
    pub fn from_config(config: TeletextPageConfig) -> Self {
        let mut page = Self::new(
            config.page_number,
            config.title,
            config.subheader,
            config.show_footer,
            config.ignore_height_limit,
            config.plain_mode,
        );
        page.active_route = config.active_route;
        page
    }

    pub fn add_heading(&mut self, text: &str) {
        self.content_rows.push(TeletextRow::Heading(text.to_string()));
    }

    pub fn add_text(&mut self, text: &str) {
        self.content_rows.push(TeletextRow::Text(text.to_string()));
    }

    pub fn add_blank(&mut self) {
        self.content_rows.push(TeletextRow::Blank);
    }

    pub fn add_field(&mut self, label: &str, value: impl ToString) {
        self.content_rows.push(TeletextRow::Field {
            label: label.to_string(),
            value: value.to_string(),
        });
    }

    pub fn add_sequence(&mut self, sequence: Vec<usize>) {
        self.content_rows.push(TeletextRow::SequenceTokens(sequence));
    }

    pub fn add_match(&mut self, teams: Vec<Team>, winner: Option<usize>) {
        self.content_rows
            .push(TeletextRow::MatchResult { teams, winner });
    }

    pub fn add_connector(&mut self, text: &str) {
        self.content_rows
            .push(TeletextRow::Connector(text.to_string()));
    }

    pub fn add_error_message(&mut self, message: &str) {
        self.content_rows
            .push(TeletextRow::ErrorMessage(message.to_string()));
    }

    pub fn has_error_messages(&self) -> bool {
        self.content_rows
            .iter()
            .any(|row| matches!(row, TeletextRow::ErrorMessage(_)))
    }

    pub fn rows(&self) -> &[TeletextRow] {
        &self.content_rows
    }

    pub fn active_route(&self) -> Option<Route> {
        self.active_route
    }

    /// Sets the date shown on the right side of the header.
    pub fn set_header_date(&mut self, date: chrono::NaiveDate) {
        self.header_date = Some(date.format("%d.%m.%Y").to_string());
    }

    /// Updates the cached terminal size after a resize.
    pub fn set_screen_size(&mut self, width: u16, height: u16) {
        if self.ignore_height_limit {
            return;
        }
        self.screen_width = width;
        self.screen_height = height;
        self.current_page = self.current_page.min(self.total_pages().saturating_sub(1));
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Moves to the next page. Returns false when already on the last page.
    pub fn next_page(&mut self) -> bool {
        if self.current_page + 1 < self.total_pages() {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Moves to the previous page. Returns false when already on the first page.
    pub fn previous_page(&mut self) -> bool {
        if self.current_page > 0 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Restores a page index, clamped to the available pages.
    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = page.min(self.total_pages().saturating_sub(1));
    }

    /// Renders the page as plain lines joined with newlines, the way it is
    /// printed in once mode.
    pub fn render_to_string(&self) -> String {
        self.render_lines().join("\n")
    }

    /// Builds the whole screen into one buffer and writes it in one go.
    pub fn render_buffered(&self, out: &mut impl std::io::Write) -> Result<(), AppError> {
        let buffer = self.render_screen_buffer();
        out.write_all(buffer.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
