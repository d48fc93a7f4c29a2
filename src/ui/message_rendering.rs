//! Message log rendering logic.
//!
//! Turns log entries into pre-wrapped lines so the view knows exactly how many
//! rows the log occupies. Two strategies distinguish origins:
//! - class tag: time column plus an origin label resolved through the theme
//! - inline style: colored bubbles, user entries right-aligned

use chrono::{DateTime, Local};
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::{chat_log::LogEntry, message::Origin, widget_state::RenderStyle};

use super::styles;

/// Width of the "HH:MM " time column.
const TIME_COLUMN_WIDTH: usize = 6;

pub fn build_log_lines(
    entries: &[LogEntry],
    width: usize,
    render_style: RenderStyle,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }

        match render_style {
            RenderStyle::ClassTag => push_class_tag_entry(&mut lines, entry, width),
            RenderStyle::InlineStyle => push_inline_entry(&mut lines, entry, width),
        }
    }

    lines
}

fn push_class_tag_entry(lines: &mut Vec<Line<'static>>, entry: &LogEntry, width: usize) {
    let origin = entry.message.sender();
    let label = format!("{}: ", origin.display_label());
    let indent = TIME_COLUMN_WIDTH + label.width();
    let rows = wrap_text(entry.message.text(), width.saturating_sub(indent));

    for (row_index, row) in rows.into_iter().enumerate() {
        let mut spans = if row_index == 0 {
            vec![
                Span::styled(
                    format!("{:<width$}", format_time(&entry.at), width = TIME_COLUMN_WIDTH),
                    styles::message_time_style(),
                ),
                Span::styled(label.clone(), styles::message_class_style(origin.class_tag())),
            ]
        } else {
            vec![Span::raw(" ".repeat(indent))]
        };
        spans.push(Span::styled(row, styles::message_text_style()));
        lines.push(Line::from(spans));
    }
}

fn push_inline_entry(lines: &mut Vec<Line<'static>>, entry: &LogEntry, width: usize) {
    let origin = entry.message.sender();
    let alignment = match origin {
        Origin::User => Alignment::Right,
        Origin::Bot => Alignment::Left,
    };
    let bubble_width = (width * 3 / 4).max(3);
    let style = styles::message_inline_style(origin);

    for row in wrap_text(entry.message.text(), bubble_width - 2) {
        lines.push(Line::from(Span::styled(format!(" {row} "), style)).alignment(alignment));
    }
    lines.push(
        Line::from(Span::styled(
            format_time(&entry.at),
            styles::message_time_style(),
        ))
        .alignment(alignment),
    );
}

/// Greedy word wrap by display width. Words wider than `width` are split;
/// explicit line breaks are kept. Always yields at least one row.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for paragraph in text.split('\n') {
        let mut row = String::new();
        let mut row_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let gap = usize::from(!row.is_empty());

            if row_width + gap + word_width <= width {
                if gap == 1 {
                    row.push(' ');
                }
                row.push_str(word);
                row_width += gap + word_width;
                continue;
            }

            if !row.is_empty() {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }

            if word_width <= width {
                row.push_str(word);
                row_width = word_width;
                continue;
            }

            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if row_width + ch_width > width && !row.is_empty() {
                    rows.push(std::mem::take(&mut row));
                    row_width = 0;
                }
                row.push(ch);
                row_width += ch_width;
            }
        }

        rows.push(row);
    }

    rows
}

fn format_time(at: &DateTime<Local>) -> String {
    at.format("%H:%M").to_string()
}
