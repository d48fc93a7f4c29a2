//! The terminal as the chat widget's host page.

use crate::{
    domain::{
        elements::{ElementKind, SurfaceHandle},
        events::KeyInput,
    },
    infra::config::WidgetConfig,
    usecases::contracts::HostPage,
};

/// Smallest terminal that can lay out the modal, log and input.
pub const MIN_WIDTH: u16 = 30;
pub const MIN_HEIGHT: u16 = 12;

/// Surfaces exist when the terminal is large enough at startup; controls
/// exist when their configured key binding parses.
#[derive(Debug, Clone)]
pub struct TerminalPage {
    fits_modal: bool,
    toggle: Option<KeyInput>,
    close: Option<KeyInput>,
    send: Option<KeyInput>,
}

impl TerminalPage {
    pub fn new((width, height): (u16, u16), widget: &WidgetConfig) -> Self {
        Self {
            fits_modal: width >= MIN_WIDTH && height >= MIN_HEIGHT,
            toggle: KeyInput::parse_binding(&widget.toggle_key),
            close: KeyInput::parse_binding(&widget.close_key),
            send: KeyInput::parse_binding(&widget.send_key),
        }
    }
}

impl HostPage for TerminalPage {
    fn surface(&self, kind: ElementKind) -> Option<SurfaceHandle> {
        let is_surface = matches!(
            kind,
            ElementKind::Modal | ElementKind::Input | ElementKind::MessageLog
        );
        (is_surface && self.fits_modal).then_some(SurfaceHandle { kind })
    }

    fn control(&self, kind: ElementKind) -> Option<KeyInput> {
        match kind {
            ElementKind::ToggleControl => self.toggle.clone(),
            ElementKind::CloseControl => self.close.clone(),
            ElementKind::SendControl => self.send.clone(),
            _ => None,
        }
    }
}
