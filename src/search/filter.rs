//! Multi-criteria filter composer.
//!
//! [`FilterState`] holds the current search criteria and evaluates
//! candidate recipes against all of them. Every criterion degrades to
//! "always passes" when unset, so the default state is the identity
//! filter.

use std::collections::BTreeSet;

use crate::model::{Difficulty, Recipe, SortKey};
use crate::search::index::SearchIndex;
use crate::search::text::{normalize, stemmed_terms};

/// Mutable search criteria, owned by the orchestrator for the lifetime
/// of the screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Free-text query, matched against title, description and
    /// ingredients.
    pub query: String,
    /// Ingredients that must all be present.
    pub include_ingredients: BTreeSet<String>,
    /// Ingredients none of which may be present.
    pub exclude_ingredients: BTreeSet<String>,
    /// Preparation-time ceiling in minutes.
    pub max_time_minutes: Option<u32>,
    pub difficulty: Difficulty,
    pub sort: SortKey,
}

impl FilterState {
    /// Back to the identity filter.
    pub fn reset(&mut self) {
        *self = FilterState::default();
    }

    /// Parse a comma-separated user entry ("tomate, queso fresco") into
    /// the include set. Empty entries are dropped.
    pub fn set_include_list(&mut self, raw: &str) {
        self.include_ingredients = split_list(raw);
    }

    pub fn set_exclude_list(&mut self, raw: &str) {
        self.exclude_ingredients = split_list(raw);
    }

    /// Whether the current criteria warrant a remote search rather than
    /// reusing the locally cached feed. Include/exclude lists are local
    /// refinements only, so they never force a network call.
    pub fn is_remote_eligible(&self) -> bool {
        !self.query.trim().is_empty()
            || self.difficulty != Difficulty::Any
            || self.max_time_minutes.is_some()
    }

    /// Evaluate one recipe against every active criterion.
    ///
    /// All criteria must pass; the evaluation short-circuits on the first
    /// failure, though the outcome is order-independent.
    pub fn matches(&self, recipe: &Recipe, index: &SearchIndex) -> bool {
        self.matches_query(index)
            && self.matches_includes(index)
            && self.matches_excludes(index)
            && self.matches_max_time(recipe)
            && self.matches_difficulty(recipe)
    }

    /// Filter and sort a base set through the full composer. Indices are
    /// built fresh, one per record.
    pub fn apply(&self, recipes: &[Recipe]) -> Vec<Recipe> {
        let mut out: Vec<Recipe> = recipes
            .iter()
            .filter(|r| self.matches(r, &SearchIndex::build(r)))
            .cloned()
            .collect();
        match self.sort {
            SortKey::Title => out.sort_by_cached_key(|r| normalize(&r.title)),
            SortKey::Date => out.sort_by_key(|r| std::cmp::Reverse(r.created_ts())),
        }
        out
    }

    fn matches_query(&self, index: &SearchIndex) -> bool {
        stemmed_terms(&self.query)
            .iter()
            .all(|stem| index.contains_stem(stem))
    }

    fn matches_includes(&self, index: &SearchIndex) -> bool {
        self.include_ingredients
            .iter()
            .flat_map(|entry| stemmed_terms(entry))
            .all(|stem| index.ingredients_contain_stem(&stem))
    }

    fn matches_excludes(&self, index: &SearchIndex) -> bool {
        !self
            .exclude_ingredients
            .iter()
            .flat_map(|entry| stemmed_terms(entry))
            .any(|stem| index.ingredients_contain_stem(&stem))
    }

    fn matches_max_time(&self, recipe: &Recipe) -> bool {
        match (self.max_time_minutes, recipe.prep_minutes()) {
            (Some(ceiling), Some(minutes)) => minutes <= ceiling,
            // Unknown time is not excluded; unset ceiling passes everything.
            _ => true,
        }
    }

    fn matches_difficulty(&self, recipe: &Recipe) -> bool {
        if self.difficulty == Difficulty::Any {
            return true;
        }
        let record = stemmed_terms(&recipe.difficulty).join(" ");
        let wanted = stemmed_terms(self.difficulty.label()).join(" ");
        record.contains(&wanted)
    }
}

fn split_list(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
