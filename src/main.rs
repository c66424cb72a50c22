// src/main.rs
use clap::Parser;
use volleyball_matcher::cli::{Args, is_config_update};
use volleyball_matcher::config::Config;
use volleyball_matcher::error::AppError;
use volleyball_matcher::{app, commands, logging};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Validate argument combinations
    commands::validate_args(&args)?;

    // The guard flushes the log file when dropped at the end of main
    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    // Handle version flag first
    if args.version {
        return commands::handle_version_command();
    }

    // Handle configuration operations
    if args.list_config {
        return commands::handle_list_config_command().await;
    }

    if is_config_update(&args) {
        return commands::handle_config_update_command(&args).await;
    }

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;

    if args.once {
        commands::handle_once_command(&args, &config).await
    } else {
        app::run_interactive(&args, &config).await
    }
}
