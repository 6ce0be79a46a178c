use serde::Serialize;

use crate::color;
use crate::error::AppError;

/// Mutation body for `PUT /elgato/lights`. The firmware addresses exactly
/// one light per request, with only the changed field present.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LightsCommand {
    number_of_lights: u8,
    lights: [LightPatch; 1],
}

#[derive(Debug, Clone, Default, Serialize)]
struct LightPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    on: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    brightness: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<u16>,
}

impl LightsCommand {
    pub fn on() -> Self {
        Self::with_patch(LightPatch {
            on: Some(1),
            ..LightPatch::default()
        })
    }

    pub fn off() -> Self {
        Self::with_patch(LightPatch {
            on: Some(0),
            ..LightPatch::default()
        })
    }

    /// Brightness in percent; values above 100 are rejected before any
    /// request is made.
    pub fn brightness(level: u8) -> Result<Self, AppError> {
        if level > 100 {
            return Err(AppError::InvalidInput(
                "Brightness value out of range (valid values: 0-100)".into(),
            ));
        }
        Ok(Self::with_patch(LightPatch {
            brightness: Some(level),
            ..LightPatch::default()
        }))
    }

    /// Color temperature in Kelvin, converted to the device's native unit.
    pub fn temperature(kelvin: u16) -> Result<Self, AppError> {
        if !(color::MIN_KELVIN..=color::MAX_KELVIN).contains(&kelvin) {
            return Err(AppError::InvalidInput(
                "Color temperature out of range (valid values: 2900-7000)".into(),
            ));
        }
        Ok(Self::with_patch(LightPatch {
            temperature: Some(color::kelvin_to_device_value(kelvin)),
            ..LightPatch::default()
        }))
    }

    fn with_patch(patch: LightPatch) -> Self {
        Self {
            number_of_lights: 1,
            lights: [patch],
        }
    }
}
