use serde::{Deserialize, Serialize};

/// Device identity as reported by `GET /elgato/accessory-info`.
///
/// Deserialized strictly: a response missing any of these fields is an
/// error, not a partial result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessoryInfo {
    pub product_name: String,
    pub hardware_board_type: i32,
    pub hardware_revision: i32,
    pub mac_address: String,
    pub firmware_build_number: i32,
    pub firmware_version: String,
    pub serial_number: String,
    pub display_name: String,
    pub features: Vec<String>,
    #[serde(rename = "wifi-info")]
    pub wifi_info: AccessoryWifiInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessoryWifiInfo {
    pub ssid: String,
    #[serde(rename = "frequencyMHz")]
    pub frequency_mhz: i32,
    pub rssi: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "productName": "Elgato Key Light Air",
        "hardwareBoardType": 200,
        "hardwareRevision": 1,
        "macAddress": "3C:6A:9D:12:34:56",
        "firmwareBuildNumber": 218,
        "firmwareVersion": "1.0.3",
        "serialNumber": "CW16K1A01234",
        "displayName": "Desk Left",
        "features": ["lights"],
        "wifi-info": {
            "ssid": "Studio",
            "frequencyMHz": 2400,
            "rssi": -52
        }
    }"#;

    #[test]
    fn deserializes_every_field() {
        let info: AccessoryInfo = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(info.product_name, "Elgato Key Light Air");
        assert_eq!(info.hardware_board_type, 200);
        assert_eq!(info.hardware_revision, 1);
        assert_eq!(info.mac_address, "3C:6A:9D:12:34:56");
        assert_eq!(info.firmware_build_number, 218);
        assert_eq!(info.firmware_version, "1.0.3");
        assert_eq!(info.serial_number, "CW16K1A01234");
        assert_eq!(info.display_name, "Desk Left");
        assert_eq!(info.features, vec!["lights"]);
        assert_eq!(info.wifi_info.ssid, "Studio");
        assert_eq!(info.wifi_info.frequency_mhz, 2400);
        assert_eq!(info.wifi_info.rssi, -52);
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let info: AccessoryInfo = serde_json::from_str(SAMPLE).unwrap();
        let json = serde_json::to_string(&info).unwrap();
        assert!(json.contains(r#""productName":"Elgato Key Light Air""#));
        assert!(json.contains(r#""wifi-info":{"ssid":"Studio""#));
        let back: AccessoryInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, info);
    }

    #[test]
    fn missing_field_is_an_error() {
        assert!(serde_json::from_str::<AccessoryInfo>(r#"{"productName":"x"}"#).is_err());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(serde_json::from_str::<AccessoryInfo>("not json").is_err());
    }
}
