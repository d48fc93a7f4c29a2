//! Domain layer: core entities and business rules.

pub mod chat_log;
pub mod connection_state;
pub mod elements;
pub mod envelope;
pub mod events;
pub mod input_buffer;
pub mod message;
pub mod modal;
pub mod shell_state;
pub mod widget_state;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
