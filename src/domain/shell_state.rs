use super::{connection_state::ConnectionState, widget_state::WidgetState};

#[derive(Debug, Clone)]
pub struct ShellState {
    running: bool,
    connection_state: ConnectionState,
    endpoint: String,
    widget: Option<WidgetState>,
}

impl ShellState {
    /// A `None` widget means the host lacked an element and nothing was wired.
    pub fn new(endpoint: impl Into<String>, widget: Option<WidgetState>) -> Self {
        Self {
            running: true,
            connection_state: ConnectionState::Connecting,
            endpoint: endpoint.into(),
            widget,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.connection_state
    }

    pub fn set_connection_state(&mut self, state: ConnectionState) {
        self.connection_state = state;
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn widget(&self) -> Option<&WidgetState> {
        self.widget.as_ref()
    }

    pub fn widget_mut(&mut self) -> Option<&mut WidgetState> {
        self.widget.as_mut()
    }
}
