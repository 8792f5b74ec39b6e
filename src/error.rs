use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordcodecError {
    /// A token had no entry in the codebook (or its inverse).
    #[error("missing token: {0:?}")]
    MissingToken(String),

    /// Malformed or unreadable codebook data.
    #[error("codebook error: {0}")]
    Codebook(#[from] serde_json::Error),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
