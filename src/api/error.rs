use reqwest::StatusCode;

/// Shown when an error renders to an empty string.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Failed to fetch transactions: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to fetch transactions (HTTP {0})")]
    HttpStatus(StatusCode),

    #[error("Malformed transaction response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    HttpStatus,
    Parse,
    Other,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network => write!(f, "network"),
            Self::HttpStatus => write!(f, "http-status"),
            Self::Parse => write!(f, "parse"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network(_) => ErrorKind::Network,
            Self::HttpStatus(_) => ErrorKind::HttpStatus,
            Self::Parse(_) => ErrorKind::Parse,
            Self::Other(_) => ErrorKind::Other,
        }
    }

    /// Message for the error slot above the table, never empty.
    pub fn display_message(&self) -> String {
        let msg = self.to_string();
        if msg.trim().is_empty() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            msg
        }
    }
}
