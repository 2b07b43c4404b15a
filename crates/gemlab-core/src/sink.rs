//! Presentation traits implemented by hosts.
//!
//! The core only ever writes to these; it never reads display state back.

use crate::selector::Slot;

/// Receives slot text and enabled-state updates.
pub trait DisplaySink {
    fn show_slot_value(&mut self, slot: Slot, text: &str);
    fn set_step_enabled(&mut self, step: Slot, enabled: bool);
    fn set_action_enabled(&mut self, enabled: bool);
}

/// Receives fire-and-forget user messages.
pub trait NotificationSink {
    fn notify(&mut self, message: &str);
}

/// A recorded [`DisplaySink`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkCall {
    ShowSlotValue { slot: Slot, text: String },
    SetStepEnabled { step: Slot, enabled: bool },
    SetActionEnabled(bool),
}

/// In-memory display that records every call and tracks the last
/// value written to each control.
#[derive(Debug, Clone, Default)]
pub struct RecordingDisplay {
    calls: Vec<SinkCall>,
    slots: [Option<String>; 2],
    step2_enabled: bool,
    action_enabled: bool,
}

impl RecordingDisplay {
    #[must_use]
    pub fn calls(&self) -> &[SinkCall] {
        &self.calls
    }

    /// Last text shown in `slot`, if any.
    #[must_use]
    pub fn slot_text(&self, slot: Slot) -> Option<&str> {
        self.slots[slot.position()].as_deref()
    }

    #[must_use]
    pub fn step2_enabled(&self) -> bool {
        self.step2_enabled
    }

    #[must_use]
    pub fn action_enabled(&self) -> bool {
        self.action_enabled
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl DisplaySink for RecordingDisplay {
    fn show_slot_value(&mut self, slot: Slot, text: &str) {
        self.slots[slot.position()] = Some(text.to_owned());
        self.calls.push(SinkCall::ShowSlotValue {
            slot,
            text: text.to_owned(),
        });
    }

    fn set_step_enabled(&mut self, step: Slot, enabled: bool) {
        if step == Slot::Second {
            self.step2_enabled = enabled;
        }
        self.calls.push(SinkCall::SetStepEnabled { step, enabled });
    }

    fn set_action_enabled(&mut self, enabled: bool) {
        self.action_enabled = enabled;
        self.calls.push(SinkCall::SetActionEnabled(enabled));
    }
}

/// In-memory notifier that keeps every message.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    messages: Vec<String>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }
}

impl NotificationSink for RecordingNotifier {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_owned());
    }
}
