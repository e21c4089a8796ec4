/// Panel-level errors
#[derive(thiserror::Error, Debug)]
pub enum PanelError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Recommendations endpoint returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Failed to decode recommendations response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("No dataset id in location path: {0}")]
    InvalidLocation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Render error: {0}")]
    Render(#[from] std::io::Error),
}

pub type PanelResult<T> = Result<T, PanelError>;
