use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodegradeError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("not a regular file: {0}")]
    NotAFile(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("could not read prompt template {path}: {reason}")]
    PromptRead { path: String, reason: String },

    #[error("missing API key: set the {0} environment variable")]
    MissingApiKey(&'static str),

    #[error("review API request failed (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("unexpected review API response: {0}")]
    ApiResponse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CodegradeError>;
