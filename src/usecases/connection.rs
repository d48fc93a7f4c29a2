//! Connection manager for the chat channel.
//!
//! Owns the single transport instance, mirrors its lifecycle state and
//! translates between chat messages and wire envelopes.

use thiserror::Error;

use crate::domain::{
    connection_state::ConnectionState, envelope::WireEnvelope, message::ChatMessage,
};

use super::contracts::{ChatTransport, TransportError, TransportEvent};

const CHAT_CONNECTION_STATE_CHANGED: &str = "CHAT_CONNECTION_STATE_CHANGED";
const CHAT_FRAME_DISCARDED: &str = "CHAT_FRAME_DISCARDED";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    /// The channel is not open; the message was dropped.
    #[error("chat channel is not open")]
    NotOpen,
    /// The channel was open but the frame could not be handed to the transport.
    #[error("chat transport rejected the frame: {0}")]
    Transport(#[from] TransportError),
    /// The message could not be encoded into a frame; nothing was written.
    #[error("failed to encode chat frame: {0}")]
    Encode(String),
}

/// Anything that accepts outbound chat text.
pub trait MessageChannel {
    fn send(&mut self, message: String) -> Result<(), SendError>;
}

pub struct ConnectionManager<T: ChatTransport> {
    transport: T,
    state: ConnectionState,
}

impl<T: ChatTransport> ConnectionManager<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            state: ConnectionState::Connecting,
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    #[cfg(test)]
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Drains everything the transport queued since the last call.
    ///
    /// Lifecycle changes update [`ConnectionManager::state`]; each well-formed
    /// frame is handed to `on_message` as a bot message, in arrival order.
    /// Malformed frames are logged and dropped. Returns the number of
    /// messages delivered.
    pub fn dispatch_pending(&mut self, mut on_message: impl FnMut(ChatMessage)) -> usize {
        let mut delivered = 0;

        while let Some(event) = self.transport.try_next_event() {
            match event {
                TransportEvent::StateChanged(state) => self.apply_state(state),
                TransportEvent::Frame(frame) => match WireEnvelope::from_frame(&frame) {
                    Ok(envelope) => {
                        on_message(ChatMessage::bot(envelope.message));
                        delivered += 1;
                    }
                    Err(error) => {
                        tracing::warn!(
                            code = CHAT_FRAME_DISCARDED,
                            error = %error,
                            frame_len = frame.len(),
                            "discarded malformed inbound chat frame"
                        );
                    }
                },
            }
        }

        delivered
    }

    fn apply_state(&mut self, state: ConnectionState) {
        if self.state == state {
            return;
        }

        tracing::info!(
            code = CHAT_CONNECTION_STATE_CHANGED,
            from = self.state.as_label(),
            to = state.as_label(),
            "chat connection state changed"
        );
        self.state = state;
    }
}

impl<T: ChatTransport> MessageChannel for ConnectionManager<T> {
    fn send(&mut self, message: String) -> Result<(), SendError> {
        if !self.state.is_open() {
            return Err(SendError::NotOpen);
        }

        let frame = WireEnvelope::new(message)
            .to_frame()
            .map_err(|error| SendError::Encode(error.to_string()))?;
        self.transport.send_frame(frame)?;
        Ok(())
    }
}
