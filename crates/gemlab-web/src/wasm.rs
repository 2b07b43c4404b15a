//! `wasm-bindgen` exports for the SelectorRunner.

use std::fmt::{self, Write as _};

use gemlab_core::{DisplaySink, NotificationSink, Slot};
use js_sys::Reflect;
use tracing::field::{Field, Visit};
use tracing::{Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlButtonElement};

use crate::runner_core::{RunnerCore, outcome_tag};

const ROW2_ID: &str = "row2";
const DECIDE_ID: &str = "decide-btn";
const DISABLED_CLASS: &str = "disabled";

fn console_call(method: &str, line: &str) {
    let global = js_sys::global();
    if let Ok(console) = Reflect::get(&global, &"console".into()) {
        if let Ok(f) = Reflect::get(&console, &method.into()) {
            if let Ok(f) = f.dyn_into::<js_sys::Function>() {
                let _ = f.call1(&console, &JsValue::from_str(line));
            }
        }
    }
}

fn install_panic_hook() {
    use std::sync::Once;
    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            console_call("error", &format!("{info}"));
        }));
    });
}

#[derive(Default)]
struct LineVisitor {
    line: String,
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            let _ = write!(self.line, "{value}");
        } else {
            let _ = write!(self.line, " {}={value}", field.name());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.line, "{value:?}");
        } else {
            let _ = write!(self.line, " {}={value:?}", field.name());
        }
    }
}

/// Forwards tracing events at or above `max_level` to the JS console.
struct ConsoleLayer {
    max_level: Level,
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        if *meta.level() > self.max_level {
            return;
        }
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);
        let line = format!("[{}] {}: {}", meta.level(), meta.target(), visitor.line);
        let method = match *meta.level() {
            Level::ERROR => "error",
            Level::WARN => "warn",
            Level::INFO => "info",
            _ => "debug",
        };
        console_call(method, &line);
    }
}

fn install_console_logging() {
    use std::sync::Once;
    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        let subscriber = tracing_subscriber::registry().with(ConsoleLayer {
            max_level: Level::INFO,
        });
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

/// Writes slot text and enabled state into the page.
struct DomDisplay {
    document: Option<Document>,
}

impl DomDisplay {
    fn new() -> Self {
        let document = web_sys::window().and_then(|w| w.document());
        if document.is_none() {
            tracing::warn!("no document available, display updates are dropped");
        }
        Self { document }
    }

    fn element(&self, id: &str) -> Option<Element> {
        let element = self.document.as_ref()?.get_element_by_id(id);
        if element.is_none() {
            tracing::warn!(id, "element not found");
        }
        element
    }
}

impl DisplaySink for DomDisplay {
    fn show_slot_value(&mut self, slot: Slot, text: &str) {
        if let Some(el) = self.element(&format!("slot{}", slot.step())) {
            el.set_text_content(Some(text));
        }
    }

    fn set_step_enabled(&mut self, step: Slot, enabled: bool) {
        // Step 1 is always open.
        if step != Slot::Second {
            return;
        }
        if let Some(row) = self.element(ROW2_ID) {
            let classes = row.class_list();
            let result = if enabled {
                classes.remove_1(DISABLED_CLASS)
            } else {
                classes.add_1(DISABLED_CLASS)
            };
            if let Err(err) = result {
                tracing::warn!(?err, "failed to toggle step 2 class");
            }
        }
    }

    fn set_action_enabled(&mut self, enabled: bool) {
        match self.element(DECIDE_ID).map(|el| el.dyn_into::<HtmlButtonElement>()) {
            Some(Ok(button)) => button.set_disabled(!enabled),
            Some(Err(_)) => tracing::warn!(id = DECIDE_ID, "element is not a button"),
            None => {}
        }
    }
}

/// Shows notifications with `window.alert`.
struct AlertNotifier;

impl NotificationSink for AlertNotifier {
    fn notify(&mut self, message: &str) {
        let shown = web_sys::window().map(|w| w.alert_with_message(message));
        if !matches!(shown, Some(Ok(()))) {
            console_call("log", message);
        }
    }
}

/// WASM combination picker runner.
///
/// Host-driven: page event handlers call one method per user action.
#[wasm_bindgen]
pub struct SelectorRunner {
    inner: RunnerCore<DomDisplay, AlertNotifier>,
}

#[wasm_bindgen]
impl SelectorRunner {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        install_panic_hook();
        install_console_logging();
        Self {
            inner: RunnerCore::new(DomDisplay::new(), AlertNotifier),
        }
    }

    /// Replace the configuration from a JSON string.
    ///
    /// Expected format:
    /// ```json
    /// { "locale": "en", "announce_recipe_name": true,
    ///   "recipes": [{ "first": "C", "second": "Fe", "name": "Diamond" }] }
    /// ```
    #[wasm_bindgen(js_name = loadConfig)]
    pub fn load_config(&mut self, json: &str) -> bool {
        match self.inner.load_config_json(json) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(%err, "config rejected");
                false
            }
        }
    }

    /// Paint the initial locked state.
    pub fn init(&mut self) {
        self.inner.init();
    }

    #[wasm_bindgen(js_name = selectItem)]
    pub fn select_item(&mut self, step: u8, value: &str) -> bool {
        self.inner.select_item(step, value)
    }

    /// Returns `"matched"`, `"mismatched"`, `"incomplete"` or `"rejected"`.
    #[wasm_bindgen(js_name = checkCombination)]
    pub fn check_combination(&mut self) -> String {
        outcome_tag(&self.inner.check_combination()).to_owned()
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    #[wasm_bindgen(js_name = showHint)]
    pub fn show_hint(&mut self) {
        self.inner.show_hint();
    }

    #[wasm_bindgen(js_name = showTable)]
    pub fn show_table(&mut self) {
        self.inner.show_table();
    }

    /// JSON snapshot: `{ phase, slot1, slot2, last_match }`.
    pub fn snapshot(&self) -> String {
        self.inner.snapshot_json()
    }
}

impl Default for SelectorRunner {
    fn default() -> Self {
        Self::new()
    }
}
