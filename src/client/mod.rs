pub mod error;
pub mod mock;
pub mod types;

pub use error::{CONNECT_ERROR_TEXT, ClientError, REPLY_ERROR_TEXT, Result};
pub use mock::MockChatService;
pub use types::{CarDetails, ChatReply, ChatRequest};

use async_trait::async_trait;

/// Transport seam for the chat service. The TUI talks to this trait so it
/// can run against `MockChatService` in tests without a live endpoint.
#[async_trait]
pub trait ChatService: Send + Sync {
    async fn send(&self, message: &str) -> Result<ChatReply>;

    fn endpoint(&self) -> &str;
}

#[derive(Clone)]
pub struct HttpChatService {
    client: reqwest::Client,
    endpoint: String,
    chat_url: String,
}

impl HttpChatService {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        if endpoint.is_empty() {
            return Err(ClientError::Configuration(
                "Chat endpoint must not be empty".to_string(),
            ));
        }

        // One attempt per send, no timeout: the contract has no retry or
        // cancellation mechanism for in-flight requests.
        let client = reqwest::Client::builder().build().map_err(|e| {
            ClientError::Configuration(format!("Failed to build HTTP client: {e}"))
        })?;

        let chat_url = format!("{endpoint}/chat");

        Ok(Self {
            client,
            endpoint,
            chat_url,
        })
    }

    #[must_use]
    pub fn chat_url(&self) -> &str {
        &self.chat_url
    }
}

#[async_trait]
impl ChatService for HttpChatService {
    async fn send(&self, message: &str) -> Result<ChatReply> {
        let request = ChatRequest {
            message: message.to_string(),
        };

        tracing::debug!(url = %self.chat_url, "sending chat message");

        let response = self
            .client
            .post(&self.chat_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ClientError::Connection(e.to_string()))?;

        // Status is deliberately not consulted: the service reports errors
        // as JSON bodies without a `response` field.
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Connection(e.to_string()))?;

        types::decode_reply(&body)
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl std::fmt::Debug for HttpChatService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpChatService")
            .field("chat_url", &self.chat_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_slash_from_endpoint() {
        let service = HttpChatService::new("http://127.0.0.1:5000/").expect("service");
        assert_eq!(service.endpoint(), "http://127.0.0.1:5000");
        assert_eq!(service.chat_url(), "http://127.0.0.1:5000/chat");
    }

    #[test]
    fn rejects_empty_endpoint() {
        let err = HttpChatService::new("").unwrap_err();
        assert!(matches!(err, ClientError::Configuration(_)));
    }

    #[test]
    fn debug_does_not_require_client_internals() {
        let service = HttpChatService::new("http://localhost:5000").expect("service");
        let debug = format!("{service:?}");
        assert!(debug.contains("HttpChatService"));
        assert!(debug.contains("/chat"));
    }
}
