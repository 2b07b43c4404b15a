//! User-facing strings.
//!
//! Japanese is the default locale; English is provided for hosts that want
//! it. Every string the picker shows comes from [`MessageCatalog`].

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::recipe::{Material, Recipe};

/// Supported display languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ja,
    En,
}

impl Locale {
    /// Material identifier meaning "no second material".
    #[must_use]
    pub const fn none_marker(self) -> &'static str {
        match self {
            Self::Ja => "なし",
            Self::En => "none",
        }
    }
}

/// Renders notices to text for one locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageCatalog {
    locale: Locale,
}

impl MessageCatalog {
    #[must_use]
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Success message. `recipe_name` is included when given.
    #[must_use]
    pub fn matched(&self, recipe_name: Option<&str>) -> String {
        match (self.locale, recipe_name) {
            (Locale::Ja, None) => "反応を開始するよ！".to_owned(),
            (Locale::Ja, Some(name)) => format!("{name}の反応を開始するよ！"),
            (Locale::En, None) => "Starting the reaction!".to_owned(),
            (Locale::En, Some(name)) => format!("Starting the {name} reaction!"),
        }
    }

    #[must_use]
    pub fn mismatched(&self) -> String {
        match self.locale {
            Locale::Ja => "組み合わせが違うよ！①から選び直してね。".to_owned(),
            Locale::En => "Wrong combination! Start again from ①.".to_owned(),
        }
    }

    /// Hint naming the materials of `recipe`.
    #[must_use]
    pub fn hint(&self, recipe: Option<&Recipe>) -> String {
        match (self.locale, recipe) {
            (Locale::Ja, Some(r)) => format!("ヒント：{}なら{}と{}を選ぼう！", r.name, r.first, r.second),
            (Locale::Ja, None) => "ヒント：①から順番に選ぼう！".to_owned(),
            (Locale::En, Some(r)) => format!("Hint: for {}, pick {} and {}!", r.name, r.first, r.second),
            (Locale::En, None) => "Hint: pick in order, starting from ①!".to_owned(),
        }
    }

    /// Reference table: a header line then `symbol: name` per material.
    #[must_use]
    pub fn table(&self, materials: &[Material]) -> String {
        let mut out = match self.locale {
            Locale::Ja => String::from("【元素記号表】"),
            Locale::En => String::from("[Element symbols]"),
        };
        for m in materials {
            let _ = write!(out, "\n{}: {}", m.symbol, m.name);
        }
        out
    }
}
