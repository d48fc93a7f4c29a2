use std::{
    collections::VecDeque,
    sync::{Mutex, MutexGuard},
};

use crate::{
    domain::{
        elements::{ElementKind, SurfaceHandle},
        events::KeyInput,
    },
    usecases::{
        connection::{MessageChannel, SendError},
        contracts::{ChatTransport, HostPage, TransportError, TransportEvent},
    },
};

/// In-memory transport that records outbound frames and replays queued events.
#[derive(Debug, Default)]
pub struct FakeTransport {
    events: VecDeque<TransportEvent>,
    sent: Vec<String>,
    failing: bool,
}

impl FakeTransport {
    pub fn push_event(&mut self, event: TransportEvent) {
        self.events.push_back(event);
    }

    pub fn sent_frames(&self) -> &[String] {
        &self.sent
    }

    pub fn fail_sends(&mut self) {
        self.failing = true;
    }
}

impl ChatTransport for FakeTransport {
    fn send_frame(&mut self, frame: String) -> Result<(), TransportError> {
        if self.failing {
            return Err(TransportError::WorkerGone);
        }
        self.sent.push(frame);
        Ok(())
    }

    fn try_next_event(&mut self) -> Option<TransportEvent> {
        self.events.pop_front()
    }
}

/// Channel stub that records every send attempt, including rejected ones.
#[derive(Debug)]
pub struct RecordingChannel {
    pub attempts: Vec<String>,
    pub delivered: Vec<String>,
    open: bool,
}

impl RecordingChannel {
    pub fn open() -> Self {
        Self {
            attempts: Vec::new(),
            delivered: Vec::new(),
            open: true,
        }
    }

    pub fn closed() -> Self {
        Self {
            open: false,
            ..Self::open()
        }
    }
}

impl MessageChannel for RecordingChannel {
    fn send(&mut self, message: String) -> Result<(), SendError> {
        self.attempts.push(message.clone());
        if !self.open {
            return Err(SendError::NotOpen);
        }
        self.delivered.push(message);
        Ok(())
    }
}

/// Host page with every element present unless explicitly removed.
#[derive(Debug, Clone)]
pub struct FakeHostPage {
    missing: Vec<ElementKind>,
}

impl FakeHostPage {
    pub const TOGGLE: &'static str = "ctrl+t";
    pub const CLOSE: &'static str = "esc";
    pub const SEND: &'static str = "ctrl+s";

    pub fn complete() -> Self {
        Self {
            missing: Vec::new(),
        }
    }

    pub fn without(kind: ElementKind) -> Self {
        Self {
            missing: vec![kind],
        }
    }
}

impl HostPage for FakeHostPage {
    fn surface(&self, kind: ElementKind) -> Option<SurfaceHandle> {
        if self.missing.contains(&kind) {
            return None;
        }
        match kind {
            ElementKind::Modal | ElementKind::Input | ElementKind::MessageLog => {
                Some(SurfaceHandle { kind })
            }
            _ => None,
        }
    }

    fn control(&self, kind: ElementKind) -> Option<KeyInput> {
        if self.missing.contains(&kind) {
            return None;
        }
        let binding = match kind {
            ElementKind::ToggleControl => Self::TOGGLE,
            ElementKind::CloseControl => Self::CLOSE,
            ElementKind::SendControl => Self::SEND,
            _ => return None,
        };
        KeyInput::parse_binding(binding)
    }
}

static ENV_LOCK: Mutex<()> = Mutex::new(());

pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().expect("env lock should not be poisoned")
}
