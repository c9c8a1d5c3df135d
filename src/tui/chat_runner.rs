use std::sync::Arc;

use crate::client::ChatService;
use crate::tui::events::AppEvent;
use tokio::sync::mpsc;

#[derive(Debug)]
pub enum ChatCommand {
    Send { message: String },
    Shutdown,
}

/// Owns the chat service on a background task so the UI loop never blocks
/// on the network. One command in, one event out; the app's single-slot
/// guard ensures at most one `Send` is in flight.
pub struct ChatRunner {
    service: Arc<dyn ChatService>,
    cmd_rx: mpsc::UnboundedReceiver<ChatCommand>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl ChatRunner {
    #[must_use]
    pub fn new(
        service: Arc<dyn ChatService>,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> (Self, mpsc::UnboundedSender<ChatCommand>) {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let runner = Self {
            service,
            cmd_rx,
            event_tx,
        };
        (runner, cmd_tx)
    }

    pub async fn run(mut self) {
        while let Some(cmd) = self.cmd_rx.recv().await {
            match cmd {
                ChatCommand::Send { message } => {
                    self.send_with_events(&message).await;
                }
                ChatCommand::Shutdown => {
                    tracing::info!("Chat runner shutting down");
                    break;
                }
            }
        }
    }

    async fn send_with_events(&self, message: &str) {
        match self.service.send(message).await {
            Ok(reply) => {
                let _ = self.event_tx.send(AppEvent::ReplyReceived(reply));
            }
            Err(e) => {
                tracing::error!(error = %e, "chat request failed");
                let _ = self.event_tx.send(AppEvent::ReplyFailed(e));
            }
        }
    }
}
