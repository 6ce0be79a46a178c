pub mod accessory_info;
pub mod command;
pub mod light_status;

pub use accessory_info::{AccessoryInfo, AccessoryWifiInfo};
pub use command::LightsCommand;
pub use light_status::LightStatus;
