/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    User,
    Bot,
}

impl Origin {
    /// Returns the semantic tag used by class-tag rendering.
    pub fn class_tag(self) -> &'static str {
        match self {
            Origin::User => "user",
            Origin::Bot => "bot",
        }
    }

    /// Returns the label shown in front of the first line of an entry.
    pub fn display_label(self) -> &'static str {
        match self {
            Origin::User => "You",
            Origin::Bot => "Bot",
        }
    }
}

/// A single chat message. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    sender: Origin,
    text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Origin::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Origin::Bot,
            text: text.into(),
        }
    }

    pub fn sender(&self) -> Origin {
        self.sender
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}
