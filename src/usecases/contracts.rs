use anyhow::Result;
use thiserror::Error;

use crate::domain::{
    connection_state::ConnectionState,
    elements::{ElementKind, SurfaceHandle},
    events::{AppEvent, KeyInput},
    shell_state::ShellState,
};

pub trait AppEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>>;
}

pub trait ShellOrchestrator {
    fn state(&self) -> &ShellState;
    fn state_mut(&mut self) -> &mut ShellState;
    fn handle_event(&mut self, event: AppEvent) -> Result<()>;
}

/// What the transport reports back to the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    StateChanged(ConnectionState),
    Frame(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("transport worker is no longer running")]
    WorkerGone,
}

/// A duplex text-frame channel. Events are polled, never pushed, so every
/// consumer callback runs on the caller's thread.
pub trait ChatTransport {
    fn send_frame(&mut self, frame: String) -> Result<(), TransportError>;
    fn try_next_event(&mut self) -> Option<TransportEvent>;
}

/// Looks up the elements the chat widget attaches to.
pub trait HostPage {
    fn surface(&self, kind: ElementKind) -> Option<SurfaceHandle>;
    fn control(&self, kind: ElementKind) -> Option<KeyInput>;
}
