#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Light URL not specified (option --url or environment variable ELGATO_LIGHT_URL)")]
    MissingUrl,

    #[error("{0}")]
    InvalidInput(String),

    #[error("Unexpected response from light: {message}")]
    Api { message: String },

    #[error("Error connecting to light: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
