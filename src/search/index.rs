//! Per-record searchable index.
//!
//! Each visible recipe gets exactly one [`SearchIndex`]: a space-framed
//! string of stemmed tokens used for substring containment checks. The
//! index is ephemeral; it is rebuilt whenever the base record set changes
//! and never leaves the engine.

use itertools::Itertools;

use crate::model::Recipe;
use crate::search::text::stemmed_terms;

/// Derived, space-framed stem strings for a single recipe.
///
/// Both fields carry one leading and one trailing space so that a lookup
/// for `" stem "` cannot falsely match a prefix or suffix of a longer
/// stem (`" taco "` must not match inside `" metacognicion "`).
#[derive(Debug, Clone)]
pub struct SearchIndex {
    /// Stems of title, description and every ingredient.
    pub(crate) all: String,
    /// Stems of the ingredient list only, for include/exclude filters.
    pub(crate) ingredients: String,
}

impl SearchIndex {
    /// Build the index for one recipe.
    pub fn build(recipe: &Recipe) -> Self {
        let ingredient_text = recipe.ingredients.join(" ");
        let full_text = format!(
            "{} {} {}",
            recipe.title, recipe.description, ingredient_text
        );
        Self {
            all: frame(&full_text),
            ingredients: frame(&ingredient_text),
        }
    }

    /// Whether `stem` occurs as a whole, space-delimited token in the
    /// full index.
    pub fn contains_stem(&self, stem: &str) -> bool {
        contains_framed(&self.all, stem)
    }

    /// Same containment check against the ingredient-only sub-index.
    pub fn ingredients_contain_stem(&self, stem: &str) -> bool {
        contains_framed(&self.ingredients, stem)
    }
}

fn frame(text: &str) -> String {
    format!(" {} ", stemmed_terms(text).iter().join(" "))
}

fn contains_framed(index: &str, stem: &str) -> bool {
    index.contains(&format!(" {stem} "))
}
