//! Use case layer: application workflows and orchestration.

pub mod bootstrap;
pub mod chat_widget;
pub mod connection;
pub mod context;
pub mod contracts;
pub mod shell;

/// Returns the usecases module name for smoke checks.
pub fn module_name() -> &'static str {
    "usecases"
}
