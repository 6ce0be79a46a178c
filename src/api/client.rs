use serde_json::Value;

use crate::error::AppError;
use crate::models::{AccessoryInfo, LightStatus, LightsCommand};

const PATH_ACCESSORY_INFO: &str = "/elgato/accessory-info";
const PATH_LIGHTS: &str = "/elgato/lights";

/// Client for one light's local HTTP API.
pub struct LightClient {
    client: reqwest::Client,
    base_url: String,
}

impl LightClient {
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(5))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch device identity. The response is bound strictly; an
    /// incompatible payload is an error.
    pub async fn accessory_info(&self) -> Result<AccessoryInfo, AppError> {
        let body = self.get(PATH_ACCESSORY_INFO).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch the current state of the first light.
    pub async fn light_status(&self) -> Result<LightStatus, AppError> {
        let body = self.get(PATH_LIGHTS).await?;
        Ok(parse_lights_body(&body))
    }

    /// Send a mutation and return the state the light reports back.
    pub async fn apply(&self, command: &LightsCommand) -> Result<LightStatus, AppError> {
        let response = self
            .client
            .put(format!("{}{}", self.base_url, PATH_LIGHTS))
            .json(command)
            .send()
            .await?;
        let body = self.read_body(response).await?;
        Ok(parse_lights_body(&body))
    }

    async fn get(&self, path: &str) -> Result<String, AppError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        self.read_body(response).await
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<String, AppError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(AppError::Api {
                message: format!("{status}: {body}"),
            });
        }
        Ok(body)
    }
}

/// Lights responses are read leniently: path extraction over a `Value`,
/// unparseable bodies included, so fields degrade to zero-values.
fn parse_lights_body(body: &str) -> LightStatus {
    let value: Value = serde_json::from_str(body).unwrap_or_default();
    LightStatus::from_lights_response(&value)
}
