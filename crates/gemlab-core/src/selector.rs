//! The selector state machine.
//!
//! The free functions in this module are pure: they take the current
//! [`SelectionState`] and return a [`Transition`] holding the next state,
//! the effects to apply and the outcome. [`Selector`] owns a state plus the
//! presentation settings and drives the sinks.
//!
//! ```text
//! Empty --select(1)--> FirstChosen --select(2)--> BothChosen
//!   ^                                                 |
//!   +------------- reset / mismatch ------------------+
//! ```

use serde::Serialize;

use crate::config::SelectorConfig;
use crate::effect::{Effect, Notice, apply_effects};
use crate::error::SelectorError;
use crate::locale::MessageCatalog;
use crate::recipe::{Material, Recipe, RecipeBook};
use crate::sink::{DisplaySink, NotificationSink};

/// One of the two selection positions. Doubles as the step number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    First,
    Second,
}

impl Slot {
    /// 1-based step number.
    #[must_use]
    pub const fn step(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
        }
    }

    pub(crate) const fn position(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

impl TryFrom<u8> for Slot {
    type Error = SelectorError;

    fn try_from(step: u8) -> Result<Self, Self::Error> {
        match step {
            1 => Ok(Self::First),
            2 => Ok(Self::Second),
            other => Err(SelectorError::InvalidStep(other)),
        }
    }
}

/// Progress through the two-step sequence, derived from the slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Empty,
    FirstChosen,
    /// Slot 2 filled while slot 1 is still empty. The host normally keeps
    /// step 2 locked, so this only arises from out-of-sequence input.
    SecondOnly,
    BothChosen,
}

/// The two selection slots.
///
/// Slot 2 is meaningful only once slot 1 is set. The host's step locking
/// keeps that order; the transitions themselves accept either slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    slot1: Option<String>,
    slot2: Option<String>,
}

impl SelectionState {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn slot(&self, slot: Slot) -> Option<&str> {
        match slot {
            Slot::First => self.slot1.as_deref(),
            Slot::Second => self.slot2.as_deref(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match (&self.slot1, &self.slot2) {
            (None, None) => Phase::Empty,
            (None, Some(_)) => Phase::SecondOnly,
            (Some(_), None) => Phase::FirstChosen,
            (Some(_), Some(_)) => Phase::BothChosen,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slot1.is_none() && self.slot2.is_none()
    }
}

/// Input to the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Select { slot: Slot, value: String },
    Decide,
    Reset,
    ShowHint,
    ShowTable,
}

/// What a handled message amounted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Selected(Slot),
    Matched(Recipe),
    Mismatched,
    Reset,
    Notified,
}

/// Result of a pure transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: SelectionState,
    pub effects: Vec<Effect>,
    pub outcome: Outcome,
}

/// Fill `slot` with `value`. Any string is accepted, and step 2 is not
/// gated on step 1.
#[must_use]
pub fn select_item(state: &SelectionState, slot: Slot, value: &str) -> Transition {
    let mut next = state.clone();
    let effects = match slot {
        Slot::First => {
            next.slot1 = Some(value.to_owned());
            vec![
                Effect::ShowSlotValue { slot, text: value.to_owned() },
                Effect::SetStepEnabled { step: Slot::Second, enabled: true },
            ]
        }
        Slot::Second => {
            next.slot2 = Some(value.to_owned());
            vec![
                Effect::ShowSlotValue { slot, text: value.to_owned() },
                Effect::SetActionEnabled(true),
            ]
        }
    };
    Transition {
        state: next,
        effects,
        outcome: Outcome::Selected(slot),
    }
}

/// Match the filled pair against `book`.
///
/// A match leaves the state as is. A mismatch notifies and then resets.
pub fn check_combination(
    state: &SelectionState,
    book: &RecipeBook,
) -> Result<Transition, SelectorError> {
    let (Some(first), Some(second)) = (state.slot1.as_deref(), state.slot2.as_deref()) else {
        return Err(SelectorError::IncompleteSelection);
    };

    if let Some(recipe) = book.find(first, second) {
        return Ok(Transition {
            state: state.clone(),
            effects: vec![Effect::Notify(Notice::Matched {
                recipe_name: recipe.name.clone(),
            })],
            outcome: Outcome::Matched(recipe.clone()),
        });
    }

    let cleared = reset();
    let mut effects = Vec::with_capacity(cleared.effects.len() + 1);
    effects.push(Effect::Notify(Notice::Mismatched));
    effects.extend(cleared.effects);
    Ok(Transition {
        state: cleared.state,
        effects,
        outcome: Outcome::Mismatched,
    })
}

/// Clear both slots and relock the sequence. Idempotent.
#[must_use]
pub fn reset() -> Transition {
    Transition {
        state: SelectionState::empty(),
        effects: vec![
            Effect::ShowPlaceholder { slot: Slot::First },
            Effect::ShowPlaceholder { slot: Slot::Second },
            Effect::SetStepEnabled { step: Slot::Second, enabled: false },
            Effect::SetActionEnabled(false),
        ],
        outcome: Outcome::Reset,
    }
}

fn notify_only(state: &SelectionState, notice: Notice) -> Transition {
    Transition {
        state: state.clone(),
        effects: vec![Effect::Notify(notice)],
        outcome: Outcome::Notified,
    }
}

/// Dispatch `msg` to the matching transition.
pub fn transition(
    state: &SelectionState,
    msg: &Msg,
    book: &RecipeBook,
) -> Result<Transition, SelectorError> {
    match msg {
        Msg::Select { slot, value } => Ok(select_item(state, *slot, value)),
        Msg::Decide => check_combination(state, book),
        Msg::Reset => Ok(reset()),
        Msg::ShowHint => Ok(notify_only(state, Notice::Hint)),
        Msg::ShowTable => Ok(notify_only(state, Notice::Table)),
    }
}

/// Owns a [`SelectionState`] and applies transitions to host sinks.
#[derive(Debug, Clone)]
pub struct Selector {
    state: SelectionState,
    book: RecipeBook,
    materials: Vec<Material>,
    catalog: MessageCatalog,
    placeholder: String,
    announce_recipe_name: bool,
}

impl Default for Selector {
    fn default() -> Self {
        Self::new(&SelectorConfig::default())
    }
}

impl Selector {
    /// Build a selector from a config. The config is not validated here;
    /// call [`SelectorConfig::validate`] first when it comes from a file.
    #[must_use]
    pub fn new(config: &SelectorConfig) -> Self {
        Self {
            state: SelectionState::empty(),
            book: config.recipe_book(),
            materials: config.material_table(),
            catalog: MessageCatalog::new(config.locale),
            placeholder: config.placeholder.clone(),
            announce_recipe_name: config.announce_recipe_name,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Text shown to the user for `notice`.
    #[must_use]
    pub fn render_notice(&self, notice: &Notice) -> String {
        match notice {
            Notice::Matched { recipe_name } => self
                .catalog
                .matched(self.announce_recipe_name.then_some(recipe_name.as_str())),
            Notice::Mismatched => self.catalog.mismatched(),
            Notice::Hint => self.catalog.hint(self.book.first()),
            Notice::Table => self.catalog.table(&self.materials),
        }
    }

    /// Run `msg` through the state machine and apply its effects.
    ///
    /// On error the state is unchanged and the sinks are not touched.
    pub fn dispatch<D, N>(
        &mut self,
        msg: Msg,
        display: &mut D,
        notifier: &mut N,
    ) -> Result<Outcome, SelectorError>
    where
        D: DisplaySink + ?Sized,
        N: NotificationSink + ?Sized,
    {
        match transition(&self.state, &msg, &self.book) {
            Ok(t) => Ok(self.commit(&msg, t, display, notifier)),
            Err(err) => {
                tracing::warn!(?msg, phase = ?self.state.phase(), %err, "selector input rejected");
                Err(err)
            }
        }
    }

    fn commit<D, N>(
        &mut self,
        msg: &Msg,
        transition: Transition,
        display: &mut D,
        notifier: &mut N,
    ) -> Outcome
    where
        D: DisplaySink + ?Sized,
        N: NotificationSink + ?Sized,
    {
        let Transition {
            state,
            effects,
            outcome,
        } = transition;
        apply_effects(&effects, display, notifier, &self.placeholder, |notice| {
            self.render_notice(notice)
        });
        self.state = state;

        match &outcome {
            Outcome::Matched(recipe) => {
                tracing::info!(recipe = %recipe.name, first = %recipe.first, second = %recipe.second, "combination matched");
            }
            Outcome::Mismatched => tracing::info!("combination mismatched, selector reset"),
            _ => {}
        }
        tracing::debug!(?msg, phase = ?self.state.phase(), effects = effects.len(), "selector transition");
        outcome
    }

    /// `step` is 1 or 2.
    pub fn select_item<D, N>(
        &mut self,
        step: u8,
        value: &str,
        display: &mut D,
        notifier: &mut N,
    ) -> Result<Outcome, SelectorError>
    where
        D: DisplaySink + ?Sized,
        N: NotificationSink + ?Sized,
    {
        let slot = Slot::try_from(step).inspect_err(|err| {
            tracing::warn!(step, %err, "selector input rejected");
        })?;
        let t = select_item(&self.state, slot, value);
        let msg = Msg::Select {
            slot,
            value: value.to_owned(),
        };
        Ok(self.commit(&msg, t, display, notifier))
    }

    pub fn check_combination<D, N>(
        &mut self,
        display: &mut D,
        notifier: &mut N,
    ) -> Result<Outcome, SelectorError>
    where
        D: DisplaySink + ?Sized,
        N: NotificationSink + ?Sized,
    {
        self.dispatch(Msg::Decide, display, notifier)
    }

    pub fn reset<D, N>(&mut self, display: &mut D, notifier: &mut N)
    where
        D: DisplaySink + ?Sized,
        N: NotificationSink + ?Sized,
    {
        self.commit(&Msg::Reset, reset(), display, notifier);
    }

    pub fn show_hint<D, N>(&mut self, display: &mut D, notifier: &mut N)
    where
        D: DisplaySink + ?Sized,
        N: NotificationSink + ?Sized,
    {
        let t = notify_only(&self.state, Notice::Hint);
        self.commit(&Msg::ShowHint, t, display, notifier);
    }

    pub fn show_table<D, N>(&mut self, display: &mut D, notifier: &mut N)
    where
        D: DisplaySink + ?Sized,
        N: NotificationSink + ?Sized,
    {
        let t = notify_only(&self.state, Notice::Table);
        self.commit(&Msg::ShowTable, t, display, notifier);
    }
}
