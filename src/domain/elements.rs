use thiserror::Error;

use super::events::KeyInput;

/// The visual elements the chat widget needs from its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Modal,
    Input,
    MessageLog,
    ToggleControl,
    CloseControl,
    SendControl,
}

impl ElementKind {
    #[cfg(test)]
    pub const ALL: [ElementKind; 6] = [
        ElementKind::Modal,
        ElementKind::Input,
        ElementKind::MessageLog,
        ElementKind::ToggleControl,
        ElementKind::CloseControl,
        ElementKind::SendControl,
    ];

    pub fn as_label(self) -> &'static str {
        match self {
            Self::Modal => "modal",
            Self::Input => "input",
            Self::MessageLog => "message_log",
            Self::ToggleControl => "toggle_control",
            Self::CloseControl => "close_control",
            Self::SendControl => "send_control",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("required chat element `{}` is missing", .0.as_label())]
pub struct MissingElement(pub ElementKind);

/// Handle to a screen region supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceHandle {
    pub kind: ElementKind,
}

/// All six elements, resolved from the host before anything is wired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatElements {
    pub modal: SurfaceHandle,
    pub input: SurfaceHandle,
    pub message_log: SurfaceHandle,
    pub toggle: KeyInput,
    pub close: KeyInput,
    pub send: KeyInput,
}

impl ChatElements {
    pub fn surface_kinds(&self) -> [ElementKind; 3] {
        [self.modal.kind, self.input.kind, self.message_log.kind]
    }
}
