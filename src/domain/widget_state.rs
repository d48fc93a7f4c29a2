//! State owned by a mounted chat widget.

use serde::{Deserialize, Serialize};

use super::{
    chat_log::ChatLog, elements::ChatElements, input_buffer::InputBuffer, modal::ModalVisibility,
};

/// How entries are told apart by origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderStyle {
    /// Entries carry a semantic origin tag resolved through the theme.
    #[default]
    ClassTag,
    /// Entries carry their own colors and alignment.
    InlineStyle,
}

#[derive(Debug, Clone)]
pub struct WidgetState {
    elements: ChatElements,
    visibility: ModalVisibility,
    input: InputBuffer,
    log: ChatLog,
    render_style: RenderStyle,
}

impl WidgetState {
    pub fn new(elements: ChatElements, render_style: RenderStyle) -> Self {
        Self {
            elements,
            visibility: ModalVisibility::Hidden,
            input: InputBuffer::default(),
            log: ChatLog::default(),
            render_style,
        }
    }

    pub fn elements(&self) -> &ChatElements {
        &self.elements
    }

    pub fn visibility(&self) -> ModalVisibility {
        self.visibility
    }

    pub fn visibility_mut(&mut self) -> &mut ModalVisibility {
        &mut self.visibility
    }

    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputBuffer {
        &mut self.input
    }

    pub fn log(&self) -> &ChatLog {
        &self.log
    }

    pub fn log_mut(&mut self) -> &mut ChatLog {
        &mut self.log
    }

    pub fn render_style(&self) -> RenderStyle {
        self.render_style
    }
}
