//! Transport layer: the WebSocket channel to the chat endpoint.

pub mod endpoint;
pub mod websocket;

pub use endpoint::{ChatEndpoint, EndpointError};
pub use websocket::WebSocketTransport;

/// Returns the transport module name for smoke checks.
pub fn module_name() -> &'static str {
    "transport"
}
