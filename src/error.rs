#[derive(Debug, thiserror::Error)]
pub enum SearchConsoleError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("JWT signing error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// Credential source missing or unreadable. The message is surfaced verbatim.
    #[error("{0}")]
    Config(String),

    #[error("Token exchange failed: {0}")]
    Auth(String),

    #[error("Search Console API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Rejected caller input. The message names the valid set.
    #[error("{0}")]
    InvalidArgument(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// The tool server's stdio transport failed.
    #[error("Transport error: {0}")]
    Transport(String),
}

impl SearchConsoleError {
    /// Flatten the error into the text a tool caller sees.
    ///
    /// Validation failures read as plain messages; everything else is
    /// prefixed with `Error: `.
    pub fn to_tool_text(&self) -> String {
        match self {
            SearchConsoleError::InvalidArgument(msg) => msg.clone(),
            other => format!("Error: {}", other),
        }
    }
}

pub type Result<T> = std::result::Result<T, SearchConsoleError>;
