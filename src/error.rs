//! Error types for the pydiolib library.

use thiserror::Error;

/// Main error type for pydiolib operations.
///
/// Failures fall into two classes: transport errors, where the HTTP call
/// could not be completed at all, and protocol errors, where the server
/// answered but with an error status or a body that does not parse as
/// expected. [`PydioError::is_transport`] and [`PydioError::is_protocol`]
/// classify a value accordingly.
#[derive(Error, Debug)]
pub enum PydioError {
    /// The HTTP request could not be completed.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with an error status. Carries the response body.
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    /// A listing response was not valid XML.
    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// The token-exchange response was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The target of an update does not exist.
    #[error("file not found: {0}")]
    NotFound(String),

    /// A caller-supplied stream could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PydioError {
    /// True when the call never reached a server answer.
    pub fn is_transport(&self) -> bool {
        matches!(self, PydioError::Transport(_) | PydioError::Io(_))
    }

    /// True when the server answered, but not with what we needed.
    pub fn is_protocol(&self) -> bool {
        !self.is_transport()
    }
}

/// Result type alias for pydiolib operations.
pub type Result<T> = std::result::Result<T, PydioError>;
