//! Chat widget behavior: modal visibility, input capture and the message log.

use crate::domain::{
    elements::{ChatElements, ElementKind, MissingElement},
    events::KeyInput,
    message::ChatMessage,
    widget_state::{RenderStyle, WidgetState},
};

use super::{
    connection::{MessageChannel, SendError},
    contracts::HostPage,
};

const CHAT_SEND_DROPPED: &str = "CHAT_SEND_DROPPED";

/// Rows moved by a single PageUp/PageDown press.
const PAGE_SCROLL_ROWS: usize = 5;

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The trimmed input was empty; nothing happened.
    Empty,
    /// The message was appended and handed to the channel.
    Sent,
    /// The message was appended but the channel refused it.
    Dropped(SendError),
}

/// Resolves all elements from the host and builds the widget state.
///
/// Fails on the first missing element; in that case the caller must not wire
/// anything at all.
pub fn mount(
    page: &dyn HostPage,
    render_style: RenderStyle,
) -> Result<WidgetState, MissingElement> {
    let elements = resolve_elements(page)?;
    Ok(WidgetState::new(elements, render_style))
}

fn resolve_elements(page: &dyn HostPage) -> Result<ChatElements, MissingElement> {
    let surface = |kind: ElementKind| page.surface(kind).ok_or(MissingElement(kind));
    let control = |kind: ElementKind| page.control(kind).ok_or(MissingElement(kind));

    Ok(ChatElements {
        modal: surface(ElementKind::Modal)?,
        input: surface(ElementKind::Input)?,
        message_log: surface(ElementKind::MessageLog)?,
        toggle: control(ElementKind::ToggleControl)?,
        close: control(ElementKind::CloseControl)?,
        send: control(ElementKind::SendControl)?,
    })
}

pub fn toggle_modal(state: &mut WidgetState) {
    state.visibility_mut().toggle();
}

pub fn close_modal(state: &mut WidgetState) {
    state.visibility_mut().close();
}

/// Appends the trimmed input as a user message, sends it and clears the input.
///
/// The append and the clear happen whether or not the channel accepts the
/// message.
pub fn submit_input(
    state: &mut WidgetState,
    channel: &mut dyn MessageChannel,
) -> SubmitOutcome {
    let text = state.input().trimmed().to_owned();
    if text.is_empty() {
        return SubmitOutcome::Empty;
    }

    state.log_mut().append(ChatMessage::user(text.clone()));
    let outcome = match channel.send(text) {
        Ok(()) => SubmitOutcome::Sent,
        Err(error) => {
            tracing::warn!(
                code = CHAT_SEND_DROPPED,
                error = %error,
                "outbound chat message dropped"
            );
            SubmitOutcome::Dropped(error)
        }
    };
    state.input_mut().clear();

    outcome
}

pub fn on_inbound_message(state: &mut WidgetState, text: String) {
    state.log_mut().append(ChatMessage::bot(text));
}

/// Routes a key press to the widget. Returns true when the key was consumed.
///
/// While the modal is shown, printable keys always go to the input, even when
/// a control is bound to the same key.
pub fn handle_key(
    state: &mut WidgetState,
    key: &KeyInput,
    channel: &mut dyn MessageChannel,
) -> bool {
    let shown = state.visibility().is_shown();
    let typed = if shown { key.as_char() } else { None };

    if typed.is_none() && *key == state.elements().toggle {
        toggle_modal(state);
        return true;
    }

    // Input and close control are only reachable while the modal is shown.
    if !shown {
        return false;
    }

    if let Some(ch) = typed {
        state.input_mut().insert(ch);
        return true;
    }

    if *key == state.elements().close {
        close_modal(state);
        return true;
    }

    let is_enter = !key.ctrl && key.key == "enter";
    if is_enter || *key == state.elements().send {
        submit_input(state, channel);
        return true;
    }

    if key.ctrl {
        return false;
    }

    match key.key.as_str() {
        "backspace" => state.input_mut().backspace(),
        "delete" => state.input_mut().delete(),
        "left" => state.input_mut().move_left(),
        "right" => state.input_mut().move_right(),
        "home" => state.input_mut().move_home(),
        "end" => state.input_mut().move_end(),
        "pageup" => state.log_mut().scroll_up(PAGE_SCROLL_ROWS),
        "pagedown" => state.log_mut().scroll_down(PAGE_SCROLL_ROWS),
        _ => return false,
    }

    true
}

/// Inserts pasted text into the input while the modal is shown.
pub fn handle_paste(state: &mut WidgetState, text: &str) -> bool {
    if !state.visibility().is_shown() {
        return false;
    }
    state.input_mut().insert_str(text);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{message::Origin, modal::ModalVisibility},
        test_support::{FakeHostPage, RecordingChannel},
    };

    fn mounted() -> WidgetState {
        mount(&FakeHostPage::complete(), RenderStyle::ClassTag).expect("all elements present")
    }

    fn shown() -> WidgetState {
        let mut state = mounted();
        toggle_modal(&mut state);
        state
    }

    fn type_text(state: &mut WidgetState, text: &str) {
        state.input_mut().insert_str(text);
    }

    fn key(binding: &str) -> KeyInput {
        KeyInput::parse_binding(binding).expect("valid binding")
    }

    #[test]
    fn mount_starts_hidden_with_empty_log() {
        let state = mounted();

        assert_eq!(state.visibility(), ModalVisibility::Hidden);
        assert!(state.log().is_empty());
        assert!(state.input().is_empty());
    }

    #[test]
    fn mount_fails_for_each_missing_element() {
        for kind in ElementKind::ALL {
            let result = mount(&FakeHostPage::without(kind), RenderStyle::ClassTag);

            assert_eq!(result.err(), Some(MissingElement(kind)), "for {kind:?}");
        }
    }

    #[test]
    fn whitespace_only_input_is_ignored() {
        let mut state = shown();
        let mut channel = RecordingChannel::open();
        type_text(&mut state, "  ");

        let outcome = submit_input(&mut state, &mut channel);

        assert_eq!(outcome, SubmitOutcome::Empty);
        assert!(state.log().is_empty());
        assert!(channel.attempts.is_empty());
    }

    #[test]
    fn submit_appends_sends_and_clears_when_open() {
        let mut state = shown();
        let mut channel = RecordingChannel::open();
        type_text(&mut state, "hi");

        let outcome = submit_input(&mut state, &mut channel);

        assert_eq!(outcome, SubmitOutcome::Sent);
        assert_eq!(state.log().len(), 1);
        assert_eq!(state.log().entries()[0].message, ChatMessage::user("hi"));
        assert_eq!(channel.delivered, vec!["hi".to_owned()]);
        assert!(state.input().is_empty());
    }

    #[test]
    fn submit_still_appends_and_clears_when_channel_not_open() {
        let mut state = shown();
        let mut channel = RecordingChannel::closed();
        type_text(&mut state, "hi");

        let outcome = submit_input(&mut state, &mut channel);

        assert_eq!(outcome, SubmitOutcome::Dropped(SendError::NotOpen));
        assert_eq!(state.log().entries()[0].message.sender(), Origin::User);
        assert!(channel.delivered.is_empty());
        assert!(state.input().is_empty());
    }

    #[test]
    fn submit_sends_trimmed_text() {
        let mut state = shown();
        let mut channel = RecordingChannel::open();
        type_text(&mut state, "  hello there \t");

        submit_input(&mut state, &mut channel);

        assert_eq!(channel.delivered, vec!["hello there".to_owned()]);
        assert_eq!(state.log().entries()[0].message.text(), "hello there");
    }

    #[test]
    fn toggle_twice_returns_to_hidden() {
        let mut state = mounted();

        toggle_modal(&mut state);
        assert_eq!(state.visibility(), ModalVisibility::Shown);
        toggle_modal(&mut state);
        assert_eq!(state.visibility(), ModalVisibility::Hidden);
    }

    #[test]
    fn close_hides_from_any_state() {
        let mut state = shown();
        close_modal(&mut state);
        assert_eq!(state.visibility(), ModalVisibility::Hidden);

        close_modal(&mut state);
        assert_eq!(state.visibility(), ModalVisibility::Hidden);
    }

    #[test]
    fn inbound_message_appends_bot_entry_and_pins_scroll() {
        let mut state = shown();
        state.log_mut().measure(30, 10);
        state.log_mut().scroll_up(7);

        on_inbound_message(&mut state, "hello".to_owned());

        assert_eq!(state.log().len(), 1);
        assert_eq!(state.log().entries()[0].message, ChatMessage::bot("hello"));
        assert_eq!(state.log().scroll_top(), state.log().max_scroll_top());
    }

    #[test]
    fn enter_and_send_control_share_submit_path() {
        let mut state = shown();
        let mut channel = RecordingChannel::open();

        type_text(&mut state, "one");
        assert!(handle_key(&mut state, &key("enter"), &mut channel));
        type_text(&mut state, "two");
        assert!(handle_key(&mut state, &key(FakeHostPage::SEND), &mut channel));
        type_text(&mut state, "   ");
        assert!(handle_key(&mut state, &key(FakeHostPage::SEND), &mut channel));

        assert_eq!(channel.delivered, vec!["one".to_owned(), "two".to_owned()]);
        assert_eq!(state.log().len(), 2);
    }

    #[test]
    fn keys_are_ignored_while_hidden_except_toggle() {
        let mut state = mounted();
        let mut channel = RecordingChannel::open();

        assert!(!handle_key(&mut state, &key("a"), &mut channel));
        assert!(!handle_key(&mut state, &key("enter"), &mut channel));
        assert!(!handle_key(&mut state, &key(FakeHostPage::CLOSE), &mut channel));
        assert!(state.input().is_empty());

        assert!(handle_key(&mut state, &key(FakeHostPage::TOGGLE), &mut channel));
        assert_eq!(state.visibility(), ModalVisibility::Shown);
    }

    #[test]
    fn typing_edits_input_while_shown() {
        let mut state = shown();
        let mut channel = RecordingChannel::open();

        for ch in ["h", "i", "x"] {
            handle_key(&mut state, &key(ch), &mut channel);
        }
        handle_key(&mut state, &key("backspace"), &mut channel);

        assert_eq!(state.input().text(), "hi");
    }

    #[test]
    fn printable_control_bindings_type_into_shown_input() {
        let mut channel = RecordingChannel::open();
        let elements = ChatElements {
            toggle: key("t"),
            close: key("q"),
            ..mounted().elements().clone()
        };
        let mut state = WidgetState::new(elements, RenderStyle::ClassTag);

        assert!(handle_key(&mut state, &key("t"), &mut channel));
        assert_eq!(state.visibility(), ModalVisibility::Shown);

        for ch in ["q", "t"] {
            assert!(handle_key(&mut state, &key(ch), &mut channel));
        }

        assert_eq!(state.visibility(), ModalVisibility::Shown);
        assert_eq!(state.input().text(), "qt");
    }

    #[test]
    fn named_toggle_binding_still_closes_shown_modal() {
        let mut state = shown();
        let mut channel = RecordingChannel::open();

        assert!(handle_key(&mut state, &key(FakeHostPage::TOGGLE), &mut channel));

        assert_eq!(state.visibility(), ModalVisibility::Hidden);
    }

    #[test]
    fn close_control_hides_modal_and_keeps_input() {
        let mut state = shown();
        let mut channel = RecordingChannel::open();
        type_text(&mut state, "draft");

        handle_key(&mut state, &key(FakeHostPage::CLOSE), &mut channel);

        assert_eq!(state.visibility(), ModalVisibility::Hidden);
        assert_eq!(state.input().text(), "draft");
    }

    #[test]
    fn paste_only_lands_while_shown() {
        let mut state = mounted();
        assert!(!handle_paste(&mut state, "ignored"));

        toggle_modal(&mut state);
        assert!(handle_paste(&mut state, "pasted"));
        assert_eq!(state.input().text(), "pasted");
    }
}
