/// Visibility of the chat modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalVisibility {
    #[default]
    Hidden,
    Shown,
}

impl ModalVisibility {
    pub fn is_shown(self) -> bool {
        self == Self::Shown
    }

    pub fn toggle(&mut self) {
        *self = match self {
            Self::Hidden => Self::Shown,
            Self::Shown => Self::Hidden,
        };
    }

    pub fn close(&mut self) {
        *self = Self::Hidden;
    }
}
