//! End-to-end picker scenarios against the recording sinks.

use gemlab_core::{
    Locale, Outcome, Phase, RecipeBook, RecordingDisplay, RecordingNotifier, Selector,
    SelectorConfig, Slot,
};
use pretty_assertions::assert_eq;

struct Harness {
    selector: Selector,
    display: RecordingDisplay,
    notifier: RecordingNotifier,
}

impl Harness {
    fn new(config: &SelectorConfig) -> Self {
        Self {
            selector: Selector::new(config),
            display: RecordingDisplay::default(),
            notifier: RecordingNotifier::default(),
        }
    }

    fn pick(&mut self, first: &str, second: &str) {
        self.selector
            .select_item(1, first, &mut self.display, &mut self.notifier)
            .expect("step 1");
        self.selector
            .select_item(2, second, &mut self.display, &mut self.notifier)
            .expect("step 2");
    }

    fn decide(&mut self) -> Outcome {
        self.selector
            .check_combination(&mut self.display, &mut self.notifier)
            .expect("both slots filled")
    }
}

#[test]
fn carbon_and_iron_make_diamond() {
    let mut h = Harness::new(&SelectorConfig::default());
    h.pick("C", "Fe");
    assert_eq!(h.display.slot_text(Slot::First), Some("C"));
    assert_eq!(h.display.slot_text(Slot::Second), Some("Fe"));

    match h.decide() {
        Outcome::Matched(recipe) => assert_eq!(recipe.name, "ダイヤモンド"),
        other => panic!("expected a match, got {other:?}"),
    }
    assert_eq!(h.notifier.messages(), ["反応を開始するよ！".to_owned()]);
    assert_eq!(h.selector.state().phase(), Phase::BothChosen);
}

#[test]
fn silica_with_no_second_material_makes_quartz() {
    let mut h = Harness::new(&SelectorConfig::default());
    h.pick("SiO2", Locale::Ja.none_marker());
    match h.decide() {
        Outcome::Matched(recipe) => assert_eq!(recipe.name, "水晶"),
        other => panic!("expected a match, got {other:?}"),
    }
}

#[test]
fn carbon_and_chromium_oxide_fail_and_reset() {
    let mut h = Harness::new(&SelectorConfig::default());
    h.pick("C", "Cr2O3");
    assert_eq!(h.decide(), Outcome::Mismatched);

    assert_eq!(
        h.notifier.messages(),
        ["組み合わせが違うよ！①から選び直してね。".to_owned()]
    );
    assert!(h.selector.state().is_empty());
    assert_eq!(h.display.slot_text(Slot::First), Some("?"));
    assert_eq!(h.display.slot_text(Slot::Second), Some("?"));
    assert!(!h.display.step2_enabled());
    assert!(!h.display.action_enabled());
}

#[test]
fn every_builtin_recipe_matches_in_english() {
    let config = SelectorConfig {
        locale: Locale::En,
        announce_recipe_name: true,
        ..SelectorConfig::default()
    };
    for recipe in RecipeBook::builtin(Locale::En).recipes() {
        let mut h = Harness::new(&config);
        h.pick(&recipe.first, &recipe.second);
        assert_eq!(h.decide(), Outcome::Matched(recipe.clone()));
        assert_eq!(
            h.notifier.last(),
            Some(format!("Starting the {} reaction!", recipe.name).as_str())
        );
    }
}

#[test]
fn retry_after_mismatch_succeeds() {
    let mut h = Harness::new(&SelectorConfig::default());
    h.pick("Fe", "C");
    assert_eq!(h.decide(), Outcome::Mismatched);
    h.pick("Al2O3", "Fe");
    match h.decide() {
        Outcome::Matched(recipe) => assert_eq!(recipe.name, "サファイア"),
        other => panic!("expected a match, got {other:?}"),
    }
}

#[test]
fn configured_recipes_replace_builtin_table() {
    let config = SelectorConfig::from_toml_str(
        r#"
        [[recipes]]
        first = "Au"
        second = "Ag"
        name = "エレクトラム"
        "#,
    )
    .and_then(SelectorConfig::validated)
    .expect("config");
    let mut h = Harness::new(&config);
    h.pick("C", "Fe");
    assert_eq!(h.decide(), Outcome::Mismatched);
    h.pick("Au", "Ag");
    assert!(matches!(h.decide(), Outcome::Matched(_)));
}
