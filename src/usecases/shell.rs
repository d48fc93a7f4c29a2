use anyhow::Result;

use crate::domain::{events::AppEvent, shell_state::ShellState};

use super::{
    chat_widget,
    connection::ConnectionManager,
    contracts::{ChatTransport, ShellOrchestrator},
};

/// Owns the shell state and the chat connection; every event is handled to
/// completion before the next one is read.
pub struct DefaultShellOrchestrator<T>
where
    T: ChatTransport,
{
    state: ShellState,
    connection: ConnectionManager<T>,
}

impl<T> DefaultShellOrchestrator<T>
where
    T: ChatTransport,
{
    pub fn new(state: ShellState, transport: T) -> Self {
        Self {
            state,
            connection: ConnectionManager::new(transport),
        }
    }

    fn pump_connection(&mut self) {
        let Self { state, connection } = self;

        match state.widget_mut() {
            Some(widget) => {
                connection.dispatch_pending(|message| {
                    chat_widget::on_inbound_message(widget, message.into_text())
                });
            }
            None => {
                let ignored = connection.dispatch_pending(|_| {});
                if ignored > 0 {
                    tracing::debug!(ignored, "chat widget is inert; inbound messages ignored");
                }
            }
        }

        state.set_connection_state(connection.state());
    }
}

impl<T> ShellOrchestrator for DefaultShellOrchestrator<T>
where
    T: ChatTransport,
{
    fn state(&self) -> &ShellState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ShellState {
        &mut self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        self.pump_connection();

        match event {
            AppEvent::Tick => {}
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::InputKey(key) => {
                if let Some(widget) = self.state.widget_mut() {
                    chat_widget::handle_key(widget, &key, &mut self.connection);
                }
            }
            AppEvent::Paste(text) => {
                if let Some(widget) = self.state.widget_mut() {
                    chat_widget::handle_paste(widget, &text);
                }
            }
        }

        Ok(())
    }
}
