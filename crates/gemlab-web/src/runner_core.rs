//! Platform-independent runner core.
//!
//! This module contains the logic shared between the wasm-bindgen exports
//! and the native test harness. No JS/WASM types here.

use gemlab_core::{
    ConfigError, DisplaySink, NotificationSink, Outcome, Phase, SelectionState, Selector,
    SelectorConfig, SelectorError, Slot,
};
use serde::Serialize;

/// Host-facing view of the selector state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub slot1: Option<String>,
    pub slot2: Option<String>,
    /// Name of the recipe matched by the last decide, until the next
    /// selection or reset.
    pub last_match: Option<String>,
}

impl Snapshot {
    fn of(state: &SelectionState, last_match: Option<&str>) -> Self {
        Self {
            phase: state.phase(),
            slot1: state.slot(Slot::First).map(str::to_owned),
            slot2: state.slot(Slot::Second).map(str::to_owned),
            last_match: last_match.map(str::to_owned),
        }
    }
}

/// Short tag handed to JavaScript for a decide result.
#[must_use]
pub fn outcome_tag(result: &Result<Outcome, SelectorError>) -> &'static str {
    match result {
        Ok(Outcome::Matched(_)) => "matched",
        Ok(Outcome::Mismatched) => "mismatched",
        Ok(_) => "ok",
        Err(SelectorError::IncompleteSelection) => "incomplete",
        Err(_) => "rejected",
    }
}

/// A [`Selector`] bundled with the sinks it drives.
pub struct RunnerCore<D, N> {
    selector: Selector,
    display: D,
    notifier: N,
    last_match: Option<String>,
}

impl<D: DisplaySink, N: NotificationSink> RunnerCore<D, N> {
    pub fn new(display: D, notifier: N) -> Self {
        Self::with_config(&SelectorConfig::default(), display, notifier)
    }

    pub fn with_config(config: &SelectorConfig, display: D, notifier: N) -> Self {
        Self {
            selector: Selector::new(config),
            display,
            notifier,
            last_match: None,
        }
    }

    /// Paint the initial locked state.
    pub fn init(&mut self) {
        self.reset();
    }

    /// Replace the config from a JSON document and repaint.
    ///
    /// The config is validated first; on error nothing changes.
    pub fn load_config_json(&mut self, json: &str) -> Result<(), ConfigError> {
        let config = SelectorConfig::from_json_str(json)?.validated()?;
        tracing::info!(locale = ?config.locale, recipes = config.recipe_book().len(), "selector config replaced");
        self.selector = Selector::new(&config);
        self.init();
        Ok(())
    }

    /// `step` is 1 or 2. Returns whether the selection was accepted.
    ///
    /// A rejected step number leaves the snapshot untouched.
    pub fn select_item(&mut self, step: u8, value: &str) -> bool {
        let accepted = self
            .selector
            .select_item(step, value, &mut self.display, &mut self.notifier)
            .is_ok();
        if accepted {
            self.last_match = None;
        }
        accepted
    }

    pub fn check_combination(&mut self) -> Result<Outcome, SelectorError> {
        let result = self
            .selector
            .check_combination(&mut self.display, &mut self.notifier);
        if let Ok(outcome) = &result {
            self.last_match = match outcome {
                Outcome::Matched(recipe) => Some(recipe.name.clone()),
                _ => None,
            };
        }
        result
    }

    pub fn reset(&mut self) {
        self.last_match = None;
        self.selector.reset(&mut self.display, &mut self.notifier);
    }

    pub fn show_hint(&mut self) {
        self.selector.show_hint(&mut self.display, &mut self.notifier);
    }

    pub fn show_table(&mut self) {
        self.selector.show_table(&mut self.display, &mut self.notifier);
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(self.selector.state(), self.last_match.as_deref())
    }

    #[must_use]
    pub fn snapshot_json(&self) -> String {
        // Snapshot holds only strings and unit enums.
        serde_json::to_string(&self.snapshot()).unwrap_or_else(|_| String::from("{}"))
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gemlab_core::{RecordingDisplay, RecordingNotifier};
    use pretty_assertions::assert_eq;

    type TestCore = RunnerCore<RecordingDisplay, RecordingNotifier>;

    fn core() -> TestCore {
        let mut core = TestCore::new(RecordingDisplay::default(), RecordingNotifier::default());
        core.init();
        core
    }

    #[test]
    fn init_paints_locked_placeholders() {
        let core = core();
        assert_eq!(core.display().slot_text(Slot::First), Some("?"));
        assert_eq!(core.display().slot_text(Slot::Second), Some("?"));
        assert!(!core.display().step2_enabled());
        assert!(!core.display().action_enabled());
        assert_eq!(
            core.snapshot(),
            Snapshot {
                phase: Phase::Empty,
                slot1: None,
                slot2: None,
                last_match: None,
            }
        );
    }

    #[test]
    fn match_is_reported_in_snapshot() {
        let mut core = core();
        assert!(core.select_item(1, "C"));
        assert!(core.select_item(2, "Fe"));
        let result = core.check_combination();
        assert_eq!(outcome_tag(&result), "matched");
        assert_eq!(
            core.snapshot_json(),
            r#"{"phase":"both_chosen","slot1":"C","slot2":"Fe","last_match":"ダイヤモンド"}"#
        );
    }

    #[test]
    fn mismatch_resets_snapshot() {
        let mut core = core();
        core.select_item(1, "C");
        core.select_item(2, "Cr2O3");
        assert_eq!(outcome_tag(&core.check_combination()), "mismatched");
        assert_eq!(core.snapshot().phase, Phase::Empty);
        assert_eq!(core.notifier().messages().len(), 1);
    }

    #[test]
    fn rejected_input_is_reported() {
        let mut core = core();
        assert!(!core.select_item(9, "Fe"));
        assert_eq!(outcome_tag(&core.check_combination()), "incomplete");
        assert!(core.notifier().messages().is_empty());
    }

    #[test]
    fn step_two_first_is_accepted_but_incomplete() {
        let mut core = core();
        assert!(core.select_item(2, "Fe"));
        assert_eq!(core.snapshot().phase, Phase::SecondOnly);
        assert_eq!(core.snapshot().slot2.as_deref(), Some("Fe"));
        assert!(core.display().action_enabled());
        assert_eq!(outcome_tag(&core.check_combination()), "incomplete");
    }

    #[test]
    fn rejected_step_keeps_last_match() {
        let mut core = core();
        core.select_item(1, "C");
        core.select_item(2, "Fe");
        assert_eq!(outcome_tag(&core.check_combination()), "matched");
        let before = core.snapshot();

        assert!(!core.select_item(0, "Fe"));
        assert_eq!(core.snapshot(), before);
        assert_eq!(before.last_match.as_deref(), Some("ダイヤモンド"));

        assert!(core.select_item(1, "SiO2"));
        assert_eq!(core.snapshot().last_match, None);
    }

    #[test]
    fn load_config_switches_locale_and_repaints() {
        let mut core = core();
        core.select_item(1, "C");
        core.load_config_json(r#"{"locale":"en","placeholder":"…"}"#)
            .expect("valid config");
        assert_eq!(core.snapshot().phase, Phase::Empty);
        assert_eq!(core.display().slot_text(Slot::First), Some("…"));

        core.show_hint();
        assert_eq!(core.notifier().last(), Some("Hint: for Diamond, pick C and Fe!"));
    }

    #[test]
    fn invalid_config_is_rejected_without_change() {
        let mut core = core();
        core.select_item(1, "C");
        let err = core
            .load_config_json(r#"{"recipes":[]}"#)
            .expect_err("empty recipes");
        assert!(matches!(err, ConfigError::Validation(_)));
        assert_eq!(core.snapshot().slot1.as_deref(), Some("C"));
    }

    #[test]
    fn table_popup_lists_materials() {
        let mut core = core();
        core.show_table();
        let table = core.notifier().last().expect("table message");
        assert_eq!(table.lines().count(), 6);
    }
}
