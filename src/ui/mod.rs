//! UI layer: the terminal host page, input events and rendering.

mod event_source;
mod host_page;
mod message_input;
mod message_rendering;
pub mod shell;
mod styles;
pub mod terminal;
mod view;

pub(crate) use event_source::CrosstermEventSource;
pub(crate) use host_page::TerminalPage;

/// Returns the UI module name for smoke checks.
pub fn module_name() -> &'static str {
    "ui"
}
