//! Page builders for the three routes.
//!
//! Each builder fills a [`TeletextPage`] with rows; rendering and pagination
//! are left to the page itself so interactive and once mode share the same
//! content.

use crate::bracket::{Bracket, ConnectorGroup, Round};
use crate::navigation::Route;
use crate::teletext_ui::{TeletextPage, TeletextPageConfig};
use crate::ui::team_generator::TeamGeneratorState;
use chrono::Local;

pub const LANDING_TEXT: &str = "Where we get tinder'd into volleyball matches and more";
pub const TEAM_GENERATOR_HEADING: &str = "Random Team Generator";
pub const SEQUENCE_HEADING: &str = "Team Sequences:";
pub const TOURNAMENT_TEXT: &str =
    "Here you can manage and create your tournament brackets and schedules.";
pub const BRACKET_UNAVAILABLE: &str = "Bracket not available";
pub const MISC_TEXT: &str = "Any other tools or utilities can go here.";

/// Everything a view needs to draw itself.
pub struct ViewContext<'a> {
    pub generator: &'a TeamGeneratorState,
    pub bracket: &'a Bracket,
}

/// Builds the page for `route` with the header date set to today.
pub fn build_page(route: Route, context: &ViewContext<'_>, config: TeletextPageConfig) -> TeletextPage {
    let mut page = TeletextPage::from_config(config);
    page.set_header_date(Local::now().date_naive());
    page.add_text(LANDING_TEXT);
    page.add_blank();

    match route {
        Route::TeamGenerator => add_team_generator(&mut page, context.generator),
        Route::TournamentGenerator => add_tournament(&mut page, context.bracket),
        Route::Misc => page.add_text(MISC_TEXT),
    }
    page
}

fn add_team_generator(page: &mut TeletextPage, state: &TeamGeneratorState) {
    page.add_heading(TEAM_GENERATOR_HEADING);
    page.add_field("Number of People", state.number_of_people());
    page.add_field("Net Count", state.net_count());

    let per_net = state.players_per_net();
    if !per_net.is_empty() {
        let summary = per_net
            .iter()
            .enumerate()
            .map(|(index, count)| format!("Net {}: {}", index + 1, count))
            .collect::<Vec<_>>()
            .join("  ");
        page.add_field("Players per Net", summary);
    }

    if let Some(error) = state.last_error() {
        page.add_blank();
        page.add_error_message(error);
    }

    page.add_blank();
    page.add_heading(SEQUENCE_HEADING);
    if !state.sequence().is_empty() {
        page.add_sequence(state.sequence().to_vec());
    }
}

fn add_tournament(page: &mut TeletextPage, bracket: &Bracket) {
    page.add_text(TOURNAMENT_TEXT);
    page.add_blank();

    if bracket.is_empty() {
        page.add_text(BRACKET_UNAVAILABLE);
        return;
    }

    let connectors = bracket.connectors();
    for (index, round) in bracket.rounds.iter().enumerate() {
        page.add_heading(&round.title);
        for seed in &round.seeds {
            page.add_match(seed.teams.clone(), seed.winner_index());
        }
        if let Some(group) = connectors.iter().find(|group| group.round_index == index) {
            for line in connector_lines(round, group) {
                page.add_connector(&line);
            }
            page.add_blank();
        }
    }

    if let Some(champion) = bracket.champion() {
        page.add_blank();
        page.add_field("Champion", &champion.name);
    }
}

/// One line per connector: both matches of a pair joined into the next
/// round, or a single arm for the trailing match of an odd round.
pub fn connector_lines(round: &Round, group: &ConnectorGroup) -> Vec<String> {
    let label = |seed_index: usize| {
        round
            .seeds
            .get(seed_index)
            .map(|seed| format!("#{}", seed.id))
            .unwrap_or_else(|| "?".to_string())
    };

    group
        .pairs
        .iter()
        .map(|&(upper, lower)| match lower {
            Some(lower) => format!("╰─ {} ─┬─ {} ─╯", label(upper), label(lower)),
            None => format!("╰─ {} ─╯", label(upper)),
        })
        .collect()
}
