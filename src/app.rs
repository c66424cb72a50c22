use crate::bracket::Bracket;
use crate::cli::Args;
use crate::commands::{generator_inputs, selected_route};
use crate::config::Config;
use crate::error::AppError;
use crate::ui::{self, InteractiveOptions};

/// Run the interactive application flow.
///
/// - Loads the bracket shown in the tournament view
/// - Runs the interactive UI, which owns terminal setup and cleanup
pub async fn run_interactive(args: &Args, config: &Config) -> Result<(), AppError> {
    let (number_of_people, net_count) = generator_inputs(args, config)?;
    let bracket = Bracket::load_or_sample(config.bracket_file.as_deref()).await;

    ui::run_interactive_ui(InteractiveOptions {
        route: selected_route(args),
        number_of_people,
        net_count,
        bracket,
        seed: args.seed,
        plain_mode: args.plain,
        debug_mode: args.debug,
    })
}
