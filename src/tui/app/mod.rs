mod commands;
mod render;
mod terminal;

pub use commands::SLASH_COMMANDS;

use crate::client::ChatService;
use crate::error::Result;
use crate::tui::chat_runner::{ChatCommand, ChatRunner};
use crate::tui::events::{AppEvent, terminal_event_loop, tick_loop};
use crate::tui::layout::calculate_layout;
use crate::tui::state::AppState;
use crate::tui::widgets::{BookingPanel, ChatWidget, InputAction, InputWidget};
use crossterm::ExecutableCommand;
use crossterm::event::{KeyCode, KeyModifiers};
use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;

use commands::{HELP_TEXT, SlashCommand};
use render::{render_header, render_status};
use terminal::{restore_terminal, setup_terminal};

pub struct TuiApp {
    chat_cmd_tx: mpsc::UnboundedSender<ChatCommand>,
    endpoint: String,
    state: AppState,
    input_widget: InputWidget<'static>,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TuiApp {
    pub(crate) fn with_event_channels(
        service: Arc<dyn ChatService>,
        event_tx: mpsc::UnboundedSender<AppEvent>,
        event_rx: mpsc::UnboundedReceiver<AppEvent>,
    ) -> Result<Self> {
        let terminal = setup_terminal()?;

        let endpoint = service.endpoint().to_string();

        let (runner, chat_cmd_tx) = ChatRunner::new(service, event_tx.clone());
        tokio::spawn(async move {
            runner.run().await;
        });

        Ok(Self {
            chat_cmd_tx,
            endpoint,
            state: AppState::new(),
            input_widget: InputWidget::new(),
            event_rx,
            event_tx,
            terminal,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let tx1 = self.event_tx.clone();
        let tx2 = self.event_tx.clone();

        tokio::spawn(async move {
            let _ = terminal_event_loop(tx1).await;
        });

        tokio::spawn(async move {
            tick_loop(tx2).await;
        });

        while !self.state.should_quit {
            let is_processing = self.state.is_processing;
            let elapsed = self.state.elapsed();
            let spinner_frame = self.state.spinner_frame;
            let booking_count = self.state.bookings.len();

            self.terminal.draw(|f| {
                let layout = calculate_layout(f.area());

                render_header(f, layout.header, &self.endpoint);

                let chat_widget =
                    ChatWidget::new(&self.state.messages, &mut self.state.scroll);
                chat_widget.render(layout.chat, f.buffer_mut());

                let booking_panel = BookingPanel::new(&self.state.bookings);
                booking_panel.render(layout.booking, f.buffer_mut());

                self.input_widget.render(layout.input, f);

                render_status(
                    f,
                    layout.status,
                    is_processing,
                    elapsed,
                    spinner_frame,
                    booking_count,
                );
            })?;

            if let Some(event) = self.event_rx.recv().await {
                self.handle_event(event);
            }
        }

        let _ = self.chat_cmd_tx.send(ChatCommand::Shutdown);

        restore_terminal(&mut self.terminal)?;

        Ok(())
    }

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(key) => {
                self.handle_key_input(key);
            }
            AppEvent::Paste(text) => {
                let action = self.input_widget.handle_paste(&text);
                self.handle_input_action(action);
            }
            AppEvent::Resize(_w, _h) => {}
            AppEvent::MouseScroll(delta) => {
                if delta < 0 {
                    self.state.scroll_up((-delta) as usize);
                } else {
                    self.state.scroll_down(delta as usize);
                }
            }
            AppEvent::Tick => {
                self.state.tick();
            }
            AppEvent::ReplyReceived(reply) => {
                self.state.apply_reply(reply);
            }
            AppEvent::ReplyFailed(error) => {
                self.state.apply_failure(&error);
            }
        }
    }

    fn handle_key_input(&mut self, key: crossterm::event::KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if !self.input_widget.is_empty() {
                self.input_widget.clear();
                return;
            }
            self.state.quit();
            return;
        }

        if key.code == KeyCode::Char('d') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if self.input_widget.is_empty() {
                self.state.quit();
            }
            return;
        }

        if key.code == KeyCode::Char('l') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.state.clear_messages();
            return;
        }

        match key.code {
            KeyCode::PageUp => {
                self.state.scroll_up(10);
                return;
            }
            KeyCode::PageDown => {
                self.state.scroll_down(10);
                return;
            }
            KeyCode::Home if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.scroll_to_top();
                return;
            }
            KeyCode::End if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.scroll_to_bottom();
                return;
            }
            _ => {}
        }

        let action = self.input_widget.handle_key(key);
        self.handle_input_action(action);
    }

    fn handle_input_action(&mut self, action: InputAction) {
        match action {
            InputAction::Continue | InputAction::Clear => {}

            InputAction::Submit(text) => {
                if text.starts_with('/') {
                    self.handle_slash_command(&text);
                } else if self.state.is_processing {
                    // Single-slot guard: the prior request has not settled
                    // yet, so hand the line back instead of dropping it.
                    self.input_widget.set_text(&text);
                } else if let Some(message) = self.state.begin_send(&text) {
                    self.state.add_to_history(message.clone());

                    let _ = self.chat_cmd_tx.send(ChatCommand::Send { message });
                }
            }

            InputAction::HistoryPrev => {
                if let Some(text) = self.state.history_prev() {
                    self.input_widget.set_text(&text);
                }
            }

            InputAction::HistoryNext => {
                if let Some(text) = self.state.history_next() {
                    self.input_widget.set_text(&text);
                } else {
                    self.input_widget.clear();
                }
            }
        }
    }

    fn handle_slash_command(&mut self, command: &str) {
        match SlashCommand::parse(command) {
            SlashCommand::Help => {
                self.state.push_system_message(HELP_TEXT.to_string());
            }
            SlashCommand::Exit => {
                self.state.quit();
            }
            SlashCommand::Clear => {
                self.state.clear_messages();
                self.state
                    .push_system_message("Chat history cleared.".to_string());
            }
            SlashCommand::Unknown(cmd) => {
                self.state.push_system_message(format!(
                    "Unknown command: {cmd}. Type /help for available commands."
                ));
            }
        }
    }
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        use crossterm::event::DisableBracketedPaste;
        let _ = self.terminal.backend_mut().execute(DisableBracketedPaste);
        let _ = disable_raw_mode();
        let _ = self.terminal.backend_mut().execute(LeaveAlternateScreen);
    }
}
