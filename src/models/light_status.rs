use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::color;

/// State of the first light in a `/elgato/lights` response, with the color
/// temperature already converted from device units to Kelvin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightStatus {
    #[serde(rename = "state")]
    pub on: bool,
    pub brightness: u8,
    pub temperature: u16,
}

impl LightStatus {
    /// Extracts `lights[0]` by path lookup rather than schema binding, so
    /// extra fields are ignored and absent fields read as zero-values.
    pub fn from_lights_response(response: &Value) -> Self {
        let light = &response["lights"][0];
        Self {
            on: light.get("on").map(as_truthy).unwrap_or(false),
            brightness: light
                .get("brightness")
                .and_then(Value::as_u64)
                .and_then(|v| u8::try_from(v).ok())
                .unwrap_or(0),
            temperature: light
                .get("temperature")
                .and_then(Value::as_u64)
                .and_then(|v| u16::try_from(v).ok())
                .map(color::device_value_to_kelvin)
                .unwrap_or(0),
        }
    }
}

/// The firmware reports `on` as 0/1 but the field is documented as a
/// boolean; accept both.
fn as_truthy(value: &Value) -> bool {
    value
        .as_bool()
        .or_else(|| value.as_u64().map(|v| v != 0))
        .unwrap_or(false)
}
