#![allow(clippy::expect_used)]

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::error::{ClientError, Result};
use super::types::{CarDetails, ChatReply};
use super::ChatService;

#[derive(Clone)]
pub struct MockChatService {
    replies: Arc<Mutex<Vec<Result<ChatReply>>>>,
    request_history: Arc<Mutex<Vec<String>>>,
}

impl MockChatService {
    #[must_use]
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(Vec::new())),
            request_history: Arc::new(Mutex::new(Vec::new())),
        }
    }

    #[must_use]
    pub fn with_reply(self, reply: ChatReply) -> Self {
        self.replies
            .lock()
            .expect("MockChatService mutex poisoned")
            .push(Ok(reply));
        self
    }

    #[must_use]
    pub fn with_plain_reply(self, text: impl Into<String>) -> Self {
        self.with_reply(ChatReply::Plain(text.into()))
    }

    #[must_use]
    pub fn with_card_reply(self, text: impl Into<String>, details: CarDetails) -> Self {
        self.with_reply(ChatReply::Structured {
            message: text.into(),
            car_details: Some(details),
        })
    }

    #[must_use]
    pub fn with_failure(self, error: ClientError) -> Self {
        self.replies
            .lock()
            .expect("MockChatService mutex poisoned")
            .push(Err(error));
        self
    }

    #[must_use]
    pub fn request_history(&self) -> Vec<String> {
        self.request_history
            .lock()
            .expect("MockChatService mutex poisoned")
            .clone()
    }

    #[must_use]
    pub fn request_count(&self) -> usize {
        self.request_history
            .lock()
            .expect("MockChatService mutex poisoned")
            .len()
    }

    fn next_reply(&self) -> Result<ChatReply> {
        let mut replies = self.replies.lock().expect("MockChatService mutex poisoned");
        if replies.is_empty() {
            Err(ClientError::Configuration(
                "MockChatService: no replies queued".to_string(),
            ))
        } else {
            replies.remove(0)
        }
    }
}

impl Default for MockChatService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatService for MockChatService {
    async fn send(&self, message: &str) -> Result<ChatReply> {
        self.request_history
            .lock()
            .expect("MockChatService mutex poisoned")
            .push(message.to_string());

        self.next_reply()
    }

    fn endpoint(&self) -> &str {
        "mock://chatbot"
    }
}
