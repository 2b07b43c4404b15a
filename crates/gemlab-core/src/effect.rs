//! Effects emitted by selector transitions and their interpreter.
//!
//! Transitions never touch a sink directly. They return a list of
//! [`Effect`]s, and [`apply_effects`] replays that list against the host's
//! sinks in order.

use crate::selector::Slot;
use crate::sink::{DisplaySink, NotificationSink};

/// Something the user should be told.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Matched { recipe_name: String },
    Mismatched,
    Hint,
    Table,
}

/// One display or notification instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show a selected material in a slot.
    ShowSlotValue { slot: Slot, text: String },
    /// Restore a slot's placeholder text.
    ShowPlaceholder { slot: Slot },
    /// Lock or unlock a selection step.
    SetStepEnabled { step: Slot, enabled: bool },
    /// Enable or disable the decide action.
    SetActionEnabled(bool),
    Notify(Notice),
}

/// Replay `effects` against the sinks.
///
/// `placeholder` is the text shown for [`Effect::ShowPlaceholder`];
/// `render` turns a [`Notice`] into the message handed to the notifier.
pub fn apply_effects<D, N, R>(
    effects: &[Effect],
    display: &mut D,
    notifier: &mut N,
    placeholder: &str,
    render: R,
) where
    D: DisplaySink + ?Sized,
    N: NotificationSink + ?Sized,
    R: Fn(&Notice) -> String,
{
    for effect in effects {
        match effect {
            Effect::ShowSlotValue { slot, text } => display.show_slot_value(*slot, text),
            Effect::ShowPlaceholder { slot } => display.show_slot_value(*slot, placeholder),
            Effect::SetStepEnabled { step, enabled } => display.set_step_enabled(*step, *enabled),
            Effect::SetActionEnabled(enabled) => display.set_action_enabled(*enabled),
            Effect::Notify(notice) => notifier.notify(&render(notice)),
        }
    }
}
