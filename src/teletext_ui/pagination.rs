// src/teletext_ui/pagination.rs - Height based pagination

use super::core::{TeletextPage, TeletextRow};
use super::utils::wrap_text;
use crate::constants::ui::{CONTENT_MARGIN, RESERVED_LINES};
use std::ops::Range;

/// Width of one sequence token cell, brackets or padding included.
pub(super) fn token_cell_width(sequence: &[usize]) -> usize {
    let digits = sequence
        .iter()
        .max()
        .map(|max| max.to_string().len())
        .unwrap_or(1);
    digits + 2
}

/// How many tokens fit on one line of `content_width` characters.
pub(super) fn tokens_per_line(sequence: &[usize], content_width: usize) -> usize {
    let cell = token_cell_width(sequence) + 1; // One space between tokens
    ((content_width + 1) / cell).max(1)
}

impl TeletextPage {
    /// Width available for content between the margins.
    pub(super) fn content_width(&self) -> usize {
        (self.screen_width as usize)
            .saturating_sub(CONTENT_MARGIN * 2)
            .max(10)
    }

    /// Calculates the height requirement for a single row.
    ///
    /// # Returns
    /// * `u16` - Height in terminal lines required for this row
    pub(super) fn calculate_row_height(&self, row: &TeletextRow) -> u16 {
        let width = self.content_width();
        let lines = match row {
            TeletextRow::Heading(_)
            | TeletextRow::Blank
            | TeletextRow::Field { .. }
            | TeletextRow::Connector(_) => 1,
            TeletextRow::Text(text) | TeletextRow::ErrorMessage(text) => {
                wrap_text(text, width).len()
            }
            TeletextRow::SequenceTokens(sequence) => sequence
                .len()
                .div_ceil(tokens_per_line(sequence, width))
                .max(1),
            TeletextRow::MatchResult { teams, .. } => teams.len() + 1, // Teams + spacer
        };
        lines as u16
    }

    /// Splits content rows into pages that fit the screen.
    ///
    /// # Notes
    /// - When ignore_height_limit is true, returns all content in a single page
    /// - Reserves lines for header, navigation bar and footer
    /// - A row taller than the screen gets a page of its own
    pub(super) fn page_ranges(&self) -> Vec<Range<usize>> {
        if self.ignore_height_limit || self.content_rows.is_empty() {
            return vec![0..self.content_rows.len()];
        }

        let available_height = self.screen_height.saturating_sub(RESERVED_LINES).max(1);
        let mut ranges = Vec::new();
        let mut start = 0;
        let mut current_height = 0u16;

        for (index, row) in self.content_rows.iter().enumerate() {
            let height = self.calculate_row_height(row);
            if current_height + height > available_height && index > start {
                ranges.push(start..index);
                start = index;
                current_height = 0;
            }
            current_height += height;
        }
        ranges.push(start..self.content_rows.len());
        ranges
    }

    pub fn total_pages(&self) -> usize {
        self.page_ranges().len()
    }

    /// Rows shown on the current page.
    pub(super) fn get_page_content(&self) -> &[TeletextRow] {
        let ranges = self.page_ranges();
        let range = ranges
            .get(self.current_page)
            .cloned()
            .unwrap_or(0..self.content_rows.len());
        &self.content_rows[range]
    }
}
