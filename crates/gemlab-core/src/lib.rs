#![forbid(unsafe_code)]

//! Recipe matching core for the gemlab combination picker.
//!
//! The picker has two slots. The user fills slot 1, which unlocks slot 2,
//! which enables the decide action. Deciding looks the pair up in a small
//! [`RecipeBook`]; a match announces the reaction, a mismatch announces the
//! failure and resets the picker.
//!
//! # Role in gemlab
//! `gemlab-core` owns every rule of the picker and none of its pixels.
//! Transitions are pure functions over [`SelectionState`] that return
//! [`Effect`]s; [`Selector`] applies those effects to a [`DisplaySink`] and
//! a [`NotificationSink`] supplied by the host.
//!
//! # How it fits in the system
//! `gemlab-web` implements the sinks on top of the browser DOM and exports
//! the selector to JavaScript. Tests and native hosts use the recording
//! sinks in [`sink`].

pub mod config;
pub mod effect;
pub mod error;
pub mod locale;
pub mod recipe;
pub mod selector;
pub mod sink;

pub use config::{ConfigError, SelectorConfig};
pub use effect::{Effect, Notice};
pub use error::SelectorError;
pub use locale::{Locale, MessageCatalog};
pub use recipe::{Material, Recipe, RecipeBook};
pub use selector::{Msg, Outcome, Phase, SelectionState, Selector, Slot, Transition};
pub use sink::{DisplaySink, NotificationSink, RecordingDisplay, RecordingNotifier, SinkCall};
