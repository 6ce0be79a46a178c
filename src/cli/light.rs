use crate::api::client::LightClient;
use crate::cli::output::print_light_status;
use crate::config::RuntimeConfig;
use crate::error::AppError;
use crate::models::LightsCommand;

pub async fn handle_status(client: &LightClient, config: &RuntimeConfig) -> Result<(), AppError> {
    let status = client.light_status().await?;
    print_light_status(&status, config.output_mode)
}

/// Apply a mutation and, in verbose mode, print the state the light reports
/// back in its response.
pub async fn handle_set(
    client: &LightClient,
    command: LightsCommand,
    config: &RuntimeConfig,
) -> Result<(), AppError> {
    let status = client.apply(&command).await?;
    if config.verbose {
        print_light_status(&status, config.output_mode)?;
    }
    Ok(())
}
