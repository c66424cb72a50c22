use crate::bracket::Bracket;
use crate::cli::Args;
use crate::config::Config;
use crate::constants::TERMINAL_TITLE;
use crate::constants::limits::{MAX_NETS, MAX_PEOPLE};
use crate::error::AppError;
use crate::navigation::Route;
use crate::sequence::{generate_sequence_with, session_rng};
use crate::teletext_ui::TeletextPageConfig;
use crate::ui::{TeamGeneratorState, ViewContext, build_page};
use crate::version;
use crossterm::{execute, terminal::SetTitle};
use serde::Serialize;
use std::io::{Write, stdout};
use std::path::Path;

/// Generated sequence as printed by `--once --json`
#[derive(Debug, Serialize)]
pub struct SequenceOutput {
    pub number_of_people: i64,
    pub net_count: i64,
    pub sequence: Vec<usize>,
}

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.json && !args.once {
        return Err(AppError::config_error(
            "--json can only be used together with --once",
        ));
    }
    if args.json && selected_route(args) != Route::TeamGenerator {
        return Err(AppError::config_error(
            "--json is only available for the team-generator view",
        ));
    }
    Ok(())
}

/// Route selected with `--view`, the team generator when none is given.
pub fn selected_route(args: &Args) -> Route {
    args.view
        .as_deref()
        .map(Route::from_hash)
        .unwrap_or_default()
}

/// Generator inputs: command line values win over the config defaults.
///
/// Values above `MAX_PEOPLE` / `MAX_NETS` are rejected here. Zero or
/// negative values pass through so the view can report them.
pub fn generator_inputs(args: &Args, config: &Config) -> Result<(i64, i64), AppError> {
    let number_of_people = args.people.unwrap_or(config.default_people);
    let net_count = args.nets.unwrap_or(config.default_nets);

    if number_of_people > MAX_PEOPLE {
        return Err(AppError::invalid_configuration(
            number_of_people,
            net_count,
            format!("number of people cannot exceed {MAX_PEOPLE}"),
        ));
    }
    if net_count > MAX_NETS {
        return Err(AppError::invalid_configuration(
            number_of_people,
            net_count,
            format!("net count cannot exceed {MAX_NETS}"),
        ));
    }

    Ok((number_of_people, net_count))
}

/// Handles the --version command.
///
/// Displays the logo and version information. Never touches the network.
pub fn handle_version_command() -> Result<(), AppError> {
    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;

    version::print_logo();
    println!();
    version::print_version_status_box(version::version_status_lines());

    Ok(())
}

/// Handles the --list-config command.
///
/// Displays current configuration settings with logo.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;

    version::print_logo();
    Config::display().await?;

    Ok(())
}

/// Applies the config update flags to `config`. Returns the messages to
/// show for cleared settings.
pub fn apply_config_updates(config: &mut Config, args: &Args) -> Vec<&'static str> {
    let mut messages = Vec::new();

    if let Some(people) = args.set_people {
        config.default_people = people;
    }
    if let Some(nets) = args.set_nets {
        config.default_nets = nets;
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        messages.push("Custom log file path cleared. Using default location.");
    }

    if let Some(new_bracket_file) = &args.new_bracket_file {
        config.bracket_file = Some(new_bracket_file.clone());
    } else if args.clear_bracket_file {
        config.bracket_file = None;
        messages.push("Bracket file cleared. Using the built-in bracket.");
    }

    messages
}

/// Handles configuration update commands (--set-people, --set-nets,
/// --set-log-file, --clear-log-file, --set-bracket-file, --clear-bracket-file).
///
/// Starts from the stored file without environment overrides so they are
/// not persisted. The updated config is validated before it is written.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    let mut config = if Path::new(&config_path).exists() {
        Config::load_from_path(&config_path).await.unwrap_or_else(|e| {
            tracing::warn!("Could not read config, starting from defaults: {}", e);
            Config::default()
        })
    } else {
        Config::default()
    };

    for message in apply_config_updates(&mut config, args) {
        println!("{message}");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Writes the once mode output for the selected view to `out`.
///
/// With `--json` the sequence is printed as JSON and invalid inputs are an
/// error. Otherwise the page is rendered and an invalid configuration is
/// shown on the page, the same way the interactive view shows it.
pub fn write_once_output(
    args: &Args,
    config: &Config,
    bracket: &Bracket,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let (number_of_people, net_count) = generator_inputs(args, config)?;
    let mut rng = session_rng(args.seed);

    if args.json {
        let sequence = generate_sequence_with(number_of_people, net_count, &mut rng)?;
        let output = SequenceOutput {
            number_of_people,
            net_count,
            sequence,
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        return Ok(());
    }

    let route = selected_route(args);
    let generator = TeamGeneratorState::mount(number_of_people, net_count, &mut rng);
    let context = ViewContext {
        generator: &generator,
        bracket,
    };
    let page = build_page(
        route,
        &context,
        TeletextPageConfig::for_route(route).once().plain(args.plain),
    );
    writeln!(out, "{}", page.render_to_string())?;
    Ok(())
}

/// Handles the --once command (quick view mode).
///
/// Renders the selected view once and exits.
pub async fn handle_once_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let bracket = if selected_route(args) == Route::TournamentGenerator {
        Bracket::load_or_sample(config.bracket_file.as_deref()).await
    } else {
        Bracket::default()
    };

    let mut out = stdout();
    if !args.json {
        execute!(out, SetTitle(TERMINAL_TITLE))?;
    }
    write_once_output(args, config, &bracket, &mut out)
}
