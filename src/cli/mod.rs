pub mod info;
pub mod light;
pub mod output;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "elc", version, about = "Control Elgato key lights over the local HTTP API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Light base URL, e.g. http://keylight.local:9123 or http://10.0.0.10:9123
    #[arg(short, long, env = "ELGATO_LIGHT_URL", global = true)]
    pub url: Option<String>,

    /// Show the resulting light status after a command
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (default) or json
    #[arg(short, long, default_value = "text", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show accessory information (default)
    Info,

    /// Show current light status
    #[command(alias = "s")]
    Status,

    /// Turn the light on
    #[command(alias = "1")]
    On,

    /// Turn the light off
    #[command(alias = "0")]
    Off,

    /// Set brightness
    #[command(alias = "b")]
    Brightness {
        /// Brightness in percent (0-100)
        level: u8,
    },

    /// Set color temperature
    #[command(alias = "t")]
    Temperature {
        /// Color temperature in Kelvin (2900-7000)
        kelvin: u16,
    },
}
