pub mod api;
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod models;

use api::client::LightClient;
use cli::output::print_error;
use config::{OutputMode, RuntimeConfig};
use error::AppError;
use models::LightsCommand;

pub async fn run(cli_args: cli::Cli) -> i32 {
    match execute(cli_args).await {
        Ok(()) => 0,
        Err(err) => {
            print_error(&err);
            1
        }
    }
}

async fn execute(cli_args: cli::Cli) -> Result<(), AppError> {
    let url = cli_args.url.ok_or(AppError::MissingUrl)?;
    let config = RuntimeConfig {
        output_mode: OutputMode::from_flag(&cli_args.format),
        verbose: cli_args.verbose,
    };
    let client = LightClient::new(&url)?;

    dispatch(cli_args.command.unwrap_or(cli::Commands::Info), &client, &config).await
}

async fn dispatch(
    command: cli::Commands,
    client: &LightClient,
    config: &RuntimeConfig,
) -> Result<(), AppError> {
    match command {
        cli::Commands::Info => cli::info::handle(client, config).await,
        cli::Commands::Status => cli::light::handle_status(client, config).await,
        cli::Commands::On => cli::light::handle_set(client, LightsCommand::on(), config).await,
        cli::Commands::Off => cli::light::handle_set(client, LightsCommand::off(), config).await,
        cli::Commands::Brightness { level } => {
            cli::light::handle_set(client, LightsCommand::brightness(level)?, config).await
        }
        cli::Commands::Temperature { kelvin } => {
            cli::light::handle_set(client, LightsCommand::temperature(kelvin)?, config).await
        }
    }
}
