//! The JSON envelope exchanged with the chat endpoint in both directions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireEnvelope {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum FrameError {
    #[error("malformed chat frame: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("failed to encode chat frame: {0}")]
    Encode(#[source] serde_json::Error),
}

impl WireEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Serializes the envelope to the text frame payload.
    pub fn to_frame(&self) -> Result<String, FrameError> {
        serde_json::to_string(self).map_err(FrameError::Encode)
    }

    /// Parses an inbound text frame.
    pub fn from_frame(frame: &str) -> Result<Self, FrameError> {
        serde_json::from_str(frame).map_err(FrameError::Malformed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_single_message_field() {
        let frame = WireEnvelope::new("hi").to_frame().expect("envelope encodes");

        assert_eq!(frame, r#"{"message":"hi"}"#);
    }

    #[test]
    fn escapes_quotes_and_newlines() {
        let frame = WireEnvelope::new("say \"hi\"\nnow")
            .to_frame()
            .expect("envelope encodes");

        assert_eq!(frame, r#"{"message":"say \"hi\"\nnow"}"#);
    }

    #[test]
    fn empty_message_still_encodes_a_full_envelope() {
        let frame = WireEnvelope::new("").to_frame().expect("envelope encodes");

        assert_eq!(frame, r#"{"message":""}"#);
        assert_eq!(
            WireEnvelope::from_frame(&frame).expect("frame parses back"),
            WireEnvelope::new("")
        );
    }

    #[test]
    fn parses_inbound_frame() {
        let envelope = WireEnvelope::from_frame(r#"{"message":"hello"}"#).expect("valid frame");

        assert_eq!(envelope.message, "hello");
    }

    #[test]
    fn ignores_unknown_fields() {
        let envelope = WireEnvelope::from_frame(r#"{"message":"hello","type":"reply"}"#)
            .expect("extra fields are tolerated");

        assert_eq!(envelope.message, "hello");
    }

    #[test]
    fn rejects_frame_without_message_field() {
        let result = WireEnvelope::from_frame(r#"{"text":"hello"}"#);

        assert!(matches!(result, Err(FrameError::Malformed(_))));
    }

    #[test]
    fn rejects_invalid_json() {
        let result = WireEnvelope::from_frame("not json");

        assert!(matches!(result, Err(FrameError::Malformed(_))));
    }

    #[test]
    fn rejects_non_string_message() {
        let result = WireEnvelope::from_frame(r#"{"message":42}"#);

        assert!(matches!(result, Err(FrameError::Malformed(_))));
    }
}
