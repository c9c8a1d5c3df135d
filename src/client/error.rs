use thiserror::Error;

pub const CONNECT_ERROR_TEXT: &str = "Error: Could not connect to chatbot.";
pub const REPLY_ERROR_TEXT: &str = "Error: Could not get response from chatbot.";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Response body is not JSON: {0}")]
    Parse(String),

    #[error("Reply is missing a response field")]
    EmptyReply,

    #[error("Failed to decode reply: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ClientError {
    /// The fixed text rendered into the chat pane for this failure.
    /// The service contract collapses all failures into two user-visible
    /// messages; the full error goes to the diagnostic log instead.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyReply | Self::Decode(_) => REPLY_ERROR_TEXT,
            Self::Connection(_) | Self::Parse(_) | Self::Configuration(_) => CONNECT_ERROR_TEXT,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
