#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
}

impl OutputMode {
    /// Anything other than "json" falls back to text, matching the
    /// device CLI's historical handling of the format flag.
    pub fn from_flag(flag: &str) -> Self {
        if flag == "json" {
            OutputMode::Json
        } else {
            OutputMode::Text
        }
    }
}

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub output_mode: OutputMode,
    pub verbose: bool,
}
