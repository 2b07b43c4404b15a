//! Recipe table and material reference catalog.

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// A rule pairing two material identifiers with a named outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub first: String,
    pub second: String,
    pub name: String,
}

impl Recipe {
    pub fn new(first: impl Into<String>, second: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            name: name.into(),
        }
    }

    /// Exact equality on both fields.
    #[must_use]
    pub fn matches(&self, first: &str, second: &str) -> bool {
        self.first == first && self.second == second
    }
}

/// An entry of the material reference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    pub symbol: String,
    pub name: String,
}

impl Material {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
        }
    }
}

/// Ordered recipe table. Lookup is first-match in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
}

impl RecipeBook {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// The five built-in recipes, named for `locale`.
    #[must_use]
    pub fn builtin(locale: Locale) -> Self {
        let none = locale.none_marker();
        let names: [&str; 5] = match locale {
            Locale::Ja => ["ダイヤモンド", "ルビー", "サファイア", "アメジスト", "水晶"],
            Locale::En => ["Diamond", "Ruby", "Sapphire", "Amethyst", "Quartz"],
        };
        Self::new(vec![
            Recipe::new("C", "Fe", names[0]),
            Recipe::new("Al2O3", "Cr2O3", names[1]),
            Recipe::new("Al2O3", "Fe", names[2]),
            Recipe::new("SiO2", "Fe", names[3]),
            Recipe::new("SiO2", none, names[4]),
        ])
    }

    /// Find the first recipe whose pair equals `(first, second)`.
    #[must_use]
    pub fn find(&self, first: &str, second: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.matches(first, second))
    }

    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// First recipe in table order, used to build the hint.
    #[must_use]
    pub fn first(&self) -> Option<&Recipe> {
        self.recipes.first()
    }
}

/// The built-in reference table of material symbols.
#[must_use]
pub fn builtin_materials(locale: Locale) -> Vec<Material> {
    let rows: [(&str, &str, &str); 5] = [
        ("C", "炭素", "Carbon"),
        ("Al2O3", "酸化アルミニウム", "Aluminium oxide"),
        ("SiO2", "二酸化ケイ素", "Silicon dioxide"),
        ("Fe", "鉄", "Iron"),
        ("Cr2O3", "酸化クロム", "Chromium oxide"),
    ];
    rows.iter()
        .map(|(symbol, ja, en)| match locale {
            Locale::Ja => Material::new(*symbol, *ja),
            Locale::En => Material::new(*symbol, *en),
        })
        .collect()
}
