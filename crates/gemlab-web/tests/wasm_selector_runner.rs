#![cfg(target_arch = "wasm32")]
#![forbid(unsafe_code)]

use gemlab_web::SelectorRunner;
use wasm_bindgen_test::wasm_bindgen_test;

#[wasm_bindgen_test]
fn runner_matches_without_a_document() {
    let mut runner = SelectorRunner::new();
    runner.init();
    assert!(runner.select_item(1, "C"));
    assert!(runner.select_item(2, "Fe"));
    assert_eq!(runner.check_combination(), "matched");
    assert!(runner.snapshot().contains(r#""phase":"both_chosen""#));
}

#[wasm_bindgen_test]
fn runner_accepts_step_two_first() {
    let mut runner = SelectorRunner::new();
    runner.init();
    assert!(runner.select_item(2, "Fe"));
    assert!(runner.snapshot().contains(r#""phase":"second_only""#));
    assert_eq!(runner.check_combination(), "incomplete");
    assert!(!runner.select_item(3, "Fe"));
}

#[wasm_bindgen_test]
fn runner_loads_config() {
    let mut runner = SelectorRunner::new();
    assert!(runner.load_config(r#"{"locale":"en"}"#));
    assert!(!runner.load_config("not json"));
}
