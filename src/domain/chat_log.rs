//! The message log shown in the chat modal.

use chrono::{DateTime, Local};

use super::message::ChatMessage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub message: ChatMessage,
    pub at: DateTime<Local>,
}

/// Append-only message log with a scroll position measured in rendered rows.
///
/// The view reports how many rows the entries occupy and how many fit in the
/// viewport via [`ChatLog::measure`]. The scroll position is kept as a distance
/// from the bottom so that every append pins the newest entry into view.
#[derive(Debug, Clone, Default)]
pub struct ChatLog {
    entries: Vec<LogEntry>,
    rows_from_bottom: usize,
    content_rows: usize,
    viewport_rows: usize,
}

impl ChatLog {
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn append(&mut self, message: ChatMessage) {
        self.entries.push(LogEntry {
            message,
            at: Local::now(),
        });
        self.scroll_to_bottom();
    }

    pub fn measure(&mut self, content_rows: usize, viewport_rows: usize) {
        self.content_rows = content_rows;
        self.viewport_rows = viewport_rows;
        self.rows_from_bottom = self.rows_from_bottom.min(self.max_scroll_top());
    }

    pub fn max_scroll_top(&self) -> usize {
        self.content_rows.saturating_sub(self.viewport_rows)
    }

    /// First visible row of the rendered log.
    pub fn scroll_top(&self) -> usize {
        self.max_scroll_top().saturating_sub(self.rows_from_bottom)
    }

    pub fn is_at_bottom(&self) -> bool {
        self.scroll_top() == self.max_scroll_top()
    }

    pub fn scroll_to_bottom(&mut self) {
        self.rows_from_bottom = 0;
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.rows_from_bottom = self
            .rows_from_bottom
            .saturating_add(rows)
            .min(self.max_scroll_top());
    }

    pub fn scroll_down(&mut self, rows: usize) {
        self.rows_from_bottom = self.rows_from_bottom.saturating_sub(rows);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::message::Origin;

    #[test]
    fn append_keeps_arrival_order() {
        let mut log = ChatLog::default();
        log.append(ChatMessage::user("first"));
        log.append(ChatMessage::bot("second"));

        let texts: Vec<_> = log.entries().iter().map(|e| e.message.text()).collect();
        assert_eq!(texts, vec!["first", "second"]);
        assert_eq!(log.entries()[1].message.sender(), Origin::Bot);
    }

    #[test]
    fn scroll_top_is_maximum_after_measure() {
        let mut log = ChatLog::default();
        log.measure(20, 5);

        assert_eq!(log.max_scroll_top(), 15);
        assert_eq!(log.scroll_top(), 15);
    }

    #[test]
    fn scroll_up_is_clamped_to_first_row() {
        let mut log = ChatLog::default();
        log.measure(20, 5);

        log.scroll_up(4);
        assert_eq!(log.scroll_top(), 11);

        log.scroll_up(100);
        assert_eq!(log.scroll_top(), 0);

        log.scroll_down(3);
        assert_eq!(log.scroll_top(), 3);
    }

    #[test]
    fn append_pins_scroll_back_to_bottom() {
        let mut log = ChatLog::default();
        log.measure(20, 5);
        log.scroll_up(10);
        assert!(!log.is_at_bottom());

        log.append(ChatMessage::bot("new"));

        assert!(log.is_at_bottom());
        assert_eq!(log.scroll_top(), log.max_scroll_top());
    }

    #[test]
    fn short_content_never_scrolls() {
        let mut log = ChatLog::default();
        log.measure(3, 10);
        log.scroll_up(2);

        assert_eq!(log.max_scroll_top(), 0);
        assert_eq!(log.scroll_top(), 0);
    }
}
