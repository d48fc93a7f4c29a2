//! Style definitions for the UI components.

use ratatui::style::{Color, Modifier, Style};

use crate::domain::{connection_state::ConnectionState, message::Origin};

// =============================================================================
// Page styles
// =============================================================================

/// Style for the hint text shown on the empty page.
pub fn page_hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Style for the floating chat toggle button.
pub fn toggle_button_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Style for the status bar background text.
pub fn status_bar_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Color of the connection state label in the status bar.
pub fn connection_state_style(state: ConnectionState) -> Style {
    let color = match state {
        ConnectionState::Connecting => Color::Yellow,
        ConnectionState::Open => Color::Green,
        ConnectionState::Closed => Color::DarkGray,
        ConnectionState::Errored => Color::Red,
    };
    Style::default().fg(color)
}

// =============================================================================
// Modal styles
// =============================================================================

pub fn modal_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Style for key hints such as the close control in the title bar.
pub fn key_hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

// =============================================================================
// Message log styles
// =============================================================================

/// Theme lookup for class-tag rendering.
pub fn message_class_style(tag: &str) -> Style {
    match tag {
        "user" => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        "bot" => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        _ => Style::default().fg(Color::White),
    }
}

/// Inline bubble colors for inline-style rendering.
pub fn message_inline_style(origin: Origin) -> Style {
    match origin {
        Origin::User => Style::default().fg(Color::White).bg(Color::Blue),
        Origin::Bot => Style::default().fg(Color::Black).bg(Color::Gray),
    }
}

pub fn message_time_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn message_text_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn empty_log_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

// =============================================================================
// Input styles
// =============================================================================

pub fn input_prompt_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn input_text_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn input_placeholder_style() -> Style {
    Style::default().fg(Color::DarkGray)
}
