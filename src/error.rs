use thiserror::Error;

#[derive(Error, Debug)]
pub enum CivicError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Issue not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Server returned {status}: {message}")]
    Server { status: u16, message: String },

    #[error("No admin token configured. Set CIVIC_EYE_TOKEN or the api.token config key.")]
    MissingToken,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Not configured. Run 'civic-eye init' first.")]
    NotConfigured,

    #[error("Already configured at {0}")]
    AlreadyConfigured(String),
}

pub type Result<T> = std::result::Result<T, CivicError>;
