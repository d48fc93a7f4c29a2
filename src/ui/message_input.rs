//! Chat input field rendering.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::input_buffer::InputBuffer;

use super::styles;

const PLACEHOLDER_TEXT: &str = "Type a message...";

const PROMPT_SYMBOL: &str = "> ";

/// Renders the input field and places the terminal cursor in it.
pub fn render_message_input(frame: &mut Frame<'_>, area: Rect, input: &InputBuffer) {
    let text_width = (area.width as usize)
        .saturating_sub(2)
        .saturating_sub(PROMPT_SYMBOL.width());

    let (line, cursor_offset) = build_input_line(input, text_width);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles::modal_border_style()),
    );
    frame.render_widget(paragraph, area);

    let cursor_x = area
        .x
        .saturating_add(1)
        .saturating_add(PROMPT_SYMBOL.width() as u16)
        .saturating_add(cursor_offset.min(u16::MAX as usize) as u16);
    let cursor_y = area.y.saturating_add(1);
    frame.set_cursor_position((cursor_x, cursor_y));
}

/// Builds the visible input line and the cursor column relative to the text
/// start. When the text before the cursor is wider than the field, the line is
/// scrolled so the cursor stays visible.
fn build_input_line(input: &InputBuffer, text_width: usize) -> (Line<'static>, usize) {
    let prompt = Span::styled(PROMPT_SYMBOL.to_owned(), styles::input_prompt_style());

    if input.is_empty() {
        let placeholder = Span::styled(
            PLACEHOLDER_TEXT.to_owned(),
            styles::input_placeholder_style(),
        );
        return (Line::from(vec![prompt, placeholder]), 0);
    }

    let before_cursor = input.text_before_cursor();
    let mut skipped_bytes = 0;
    let mut cursor_offset = before_cursor.width();
    if text_width > 0 {
        for ch in before_cursor.chars() {
            if cursor_offset < text_width {
                break;
            }
            skipped_bytes += ch.len_utf8();
            cursor_offset -= ch.width().unwrap_or(0);
        }
    }

    let visible = input.text()[skipped_bytes..].to_owned();
    (
        Line::from(vec![
            prompt,
            Span::styled(visible, styles::input_text_style()),
        ]),
        cursor_offset,
    )
}
