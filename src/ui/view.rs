use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::domain::{shell_state::ShellState, widget_state::WidgetState};

use super::message_input::render_message_input;
use super::message_rendering::build_log_lines;
use super::styles;

const MODAL_WIDTH_PERCENT: u16 = 70;
const MODAL_HEIGHT_PERCENT: u16 = 80;

/// Input field height: 1 border + 1 text + 1 border.
const INPUT_HEIGHT: u16 = 3;

pub fn render(frame: &mut Frame<'_>, state: &mut ShellState) {
    let [page_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .areas(frame.area());

    render_page(frame, page_area, state.widget());
    frame.render_widget(Paragraph::new(status_line(state)), status_area);

    if let Some(widget) = state.widget_mut() {
        if widget.visibility().is_shown() {
            render_modal(frame, page_area, widget);
        }
    }
}

fn render_page(frame: &mut Frame<'_>, area: Rect, widget: Option<&WidgetState>) {
    if area.height == 0 {
        return;
    }

    let hint = match widget {
        Some(widget) => format!("Press {} to open the chat", widget.elements().toggle),
        None => "Chat is unavailable on this terminal".to_owned(),
    };
    let hint_area = Rect {
        y: area.y + area.height / 2,
        height: 1,
        ..area
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hint, styles::page_hint_style())).alignment(Alignment::Center),
        hint_area,
    );

    let Some(widget) = widget else {
        return;
    };

    let label = format!(" Chat [{}] ", widget.elements().toggle);
    let width = (label.chars().count() as u16).min(area.width);
    let button_area = Rect {
        x: area.x + area.width - width,
        y: area.y + area.height - 1,
        width,
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(Span::styled(label, styles::toggle_button_style())),
        button_area,
    );
}

fn render_modal(frame: &mut Frame<'_>, page_area: Rect, widget: &mut WidgetState) {
    let area = centered_rect(page_area, MODAL_WIDTH_PERCENT, MODAL_HEIGHT_PERCENT);
    frame.render_widget(Clear, area);

    let close_hint = format!(" {} close ", widget.elements().close);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::modal_border_style())
        .title(Span::styled(
            format!(" Chat ({}) ", widget.log().len()),
            styles::modal_title_style(),
        ))
        .title_top(Line::from(Span::styled(close_hint, styles::key_hint_style())).right_aligned());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [log_area, input_area, hint_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(1),
        ])
        .areas(inner);

    render_log(frame, log_area, widget);
    render_message_input(frame, input_area, widget.input());

    let mut hint = format!("enter/{} send", widget.elements().send);
    if !widget.log().is_at_bottom() {
        hint.push_str("  pgdn newer");
    } else {
        hint.push_str("  pgup older");
    }
    frame.render_widget(
        Paragraph::new(Span::styled(hint, styles::key_hint_style())),
        hint_area,
    );
}

fn render_log(frame: &mut Frame<'_>, area: Rect, widget: &mut WidgetState) {
    if widget.log().is_empty() {
        widget.log_mut().measure(0, area.height as usize);
        frame.render_widget(
            Paragraph::new(Span::styled("No messages yet", styles::empty_log_style())),
            area,
        );
        return;
    }

    let lines = build_log_lines(
        widget.log().entries(),
        area.width as usize,
        widget.render_style(),
    );

    let log = widget.log_mut();
    log.measure(lines.len(), area.height as usize);
    let scroll_top = log.scroll_top().min(u16::MAX as usize) as u16;

    frame.render_widget(Paragraph::new(lines).scroll((scroll_top, 0)), area);
}

fn status_line(state: &ShellState) -> Line<'static> {
    let connection = state.connection_state();
    let mut spans = vec![
        Span::styled(format!(" {} ", state.endpoint()), styles::status_bar_style()),
        Span::styled(
            connection.as_label().to_owned(),
            styles::connection_state_style(connection),
        ),
    ];

    if state.widget().is_none() {
        spans.push(Span::styled(
            " | chat unavailable".to_owned(),
            styles::status_bar_style(),
        ));
    }
    spans.push(Span::styled(
        " | ctrl+c quit".to_owned(),
        styles::key_hint_style(),
    ));

    Line::from(spans)
}

fn centered_rect(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let width = (area.width as u32 * width_percent as u32 / 100) as u16;
    let height = (area.height as u32 * height_percent as u32 / 100) as u16;

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
