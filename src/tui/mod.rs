pub mod app;
pub mod chat_runner;
pub mod events;
pub mod layout;
pub mod state;
pub mod widgets;

pub use app::TuiApp;

use crate::client::ChatService;
use crate::error::Result;
use std::sync::Arc;
use tokio::sync::mpsc;

pub async fn run_tui(service: Arc<dyn ChatService>) -> Result<()> {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    let mut app = TuiApp::with_event_channels(service, event_tx, event_rx)?;
    app.run().await
}
