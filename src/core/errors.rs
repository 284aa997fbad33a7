use thiserror::Error;

#[derive(Debug, Error)]
pub enum RagError {
    #[error("fetch failed for {url}: {message}")]
    Fetch { url: String, message: String },
    #[error("unexpected status {status} for {url}")]
    HttpStatus { url: String, status: u16 },
    #[error("no readable text in {0}")]
    EmptyPage(String),
    #[error("invalid config: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl RagError {
    pub fn fetch<E: std::fmt::Display>(url: &str, err: E) -> Self {
        RagError::Fetch {
            url: url.to_string(),
            message: err.to_string(),
        }
    }

    pub fn config<E: std::fmt::Display>(err: E) -> Self {
        RagError::Config(err.to_string())
    }

    /// The URL a per-page failure refers to, if any.
    pub fn url(&self) -> Option<&str> {
        match self {
            RagError::Fetch { url, .. } | RagError::HttpStatus { url, .. } => Some(url),
            RagError::EmptyPage(url) => Some(url),
            RagError::Config(_) | RagError::Io(_) => None,
        }
    }
}
