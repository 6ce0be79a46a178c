use crate::api::client::LightClient;
use crate::cli::output::print_accessory_info;
use crate::config::RuntimeConfig;
use crate::error::AppError;

pub async fn handle(client: &LightClient, config: &RuntimeConfig) -> Result<(), AppError> {
    let info = client.accessory_info().await?;
    print_accessory_info(&info, config.output_mode)
}
