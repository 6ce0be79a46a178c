use serde::Serialize;

use crate::config::OutputMode;
use crate::error::AppError;
use crate::models::{AccessoryInfo, LightStatus};

// Label column widths match the widest label in each block.
const STATUS_LABEL_WIDTH: usize = 17;
const INFO_LABEL_WIDTH: usize = 21;

pub fn print_light_status(status: &LightStatus, mode: OutputMode) -> Result<(), AppError> {
    match mode {
        OutputMode::Json => print_json(status),
        OutputMode::Text => {
            print!("{}", render_light_status_text(status));
            Ok(())
        }
    }
}

pub fn print_accessory_info(info: &AccessoryInfo, mode: OutputMode) -> Result<(), AppError> {
    match mode {
        OutputMode::Json => print_json(info),
        OutputMode::Text => {
            print!("{}", render_accessory_info_text(info));
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

pub fn print_error(err: &AppError) {
    eprintln!("{err}");
}

fn render_light_status_text(status: &LightStatus) -> String {
    let mut out = String::new();
    let state = if status.on { "on" } else { "off" };
    push_line(&mut out, STATUS_LABEL_WIDTH, "State", state);
    push_line(&mut out, STATUS_LABEL_WIDTH, "Brightness", &format!("{} %", status.brightness));
    push_line(
        &mut out,
        STATUS_LABEL_WIDTH,
        "Color Temperature",
        &format!("{} K", status.temperature),
    );
    out
}

fn render_accessory_info_text(info: &AccessoryInfo) -> String {
    let mut out = String::new();
    let w = INFO_LABEL_WIDTH;
    push_line(&mut out, w, "Product Name", &info.product_name);
    push_line(&mut out, w, "Hardware Board Type", &info.hardware_board_type.to_string());
    push_line(&mut out, w, "Hardware Revision", &info.hardware_revision.to_string());
    push_line(&mut out, w, "MAC Address", &info.mac_address);
    push_line(&mut out, w, "Firmware Build Number", &info.firmware_build_number.to_string());
    push_line(&mut out, w, "Firmware Version", &info.firmware_version);
    push_line(&mut out, w, "Serial Number", &info.serial_number);
    push_line(&mut out, w, "Display Name", &info.display_name);
    push_line(&mut out, w, "Features", &info.features.join(", "));
    push_line(&mut out, w, "Wifi SSID", &info.wifi_info.ssid);
    push_line(&mut out, w, "Wifi Frequency MHz", &info.wifi_info.frequency_mhz.to_string());
    push_line(&mut out, w, "Wifi RSSI", &info.wifi_info.rssi.to_string());
    out
}

fn push_line(out: &mut String, width: usize, label: &str, value: &str) {
    out.push_str(&format!("{label:<width$} : {value}\n"));
}
