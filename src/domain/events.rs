#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Tick,
    QuitRequested,
    InputKey(KeyInput),
    Paste(String),
}

/// A normalized key press. Named keys use lowercase names such as `enter`,
/// `esc`, `backspace`, `pageup` or `f2`; printable keys use the character.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>, ctrl: bool) -> Self {
        Self {
            key: key.into(),
            ctrl,
        }
    }

    /// Parses a binding such as `ctrl+t`, `esc` or `f2`.
    /// Returns `None` for an empty or unparseable binding.
    pub fn parse_binding(binding: &str) -> Option<Self> {
        let binding = binding.trim().to_lowercase();
        if binding.is_empty() {
            return None;
        }

        let (ctrl, key) = match binding.split_once('+') {
            Some((modifier, key)) if modifier == "ctrl" => (true, key),
            Some(_) => return None,
            None => (false, binding.as_str()),
        };

        if key.is_empty() || key.contains('+') {
            return None;
        }

        Some(Self::new(key, ctrl))
    }

    pub fn as_char(&self) -> Option<char> {
        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if !self.ctrl => Some(ch),
            _ => None,
        }
    }
}

impl std::fmt::Display for KeyInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.ctrl {
            write!(f, "ctrl+{}", self.key)
        } else {
            f.write_str(&self.key)
        }
    }
}
