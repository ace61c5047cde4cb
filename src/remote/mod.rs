//! Remote collaborators.
//!
//! - **[`client`]**: reqwest-backed client for the recipe feed and search
//!   endpoints, both returning pages shaped `{ "data": [...] }`.

pub mod client;

use serde::{Deserialize, Serialize};

use crate::search::filter::FilterState;
use crate::search::text::stemmed_terms;

/// Read-only snapshot of the filter criteria the remote search endpoint
/// understands. Built fresh per debounce cycle and never mutated after
/// dispatch; the criteria the endpoint does not apply (include/exclude
/// lists, sort) stay local.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SearchRequest {
    /// Stemmed query tokens, space-joined.
    pub q: String,
    /// Normalized difficulty label, empty for `Any`.
    pub dificultad: String,
    /// Time ceiling in minutes, empty when unset.
    pub tiempo_max: String,
    /// Remote ordering; the composer re-sorts locally afterwards.
    pub orden: String,
}

impl SearchRequest {
    pub fn from_filter(filter: &FilterState) -> Self {
        Self {
            q: stemmed_terms(&filter.query).join(" "),
            dificultad: stemmed_terms(filter.difficulty.label()).join(" "),
            tiempo_max: filter
                .max_time_minutes
                .map(|m| m.to_string())
                .unwrap_or_default(),
            orden: "recent".to_string(),
        }
    }
}

/// Envelope shared by the feed and search endpoints.
#[derive(Debug, Deserialize)]
pub struct DataPage<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;

    #[test]
    fn request_snapshot_normalizes_query_and_difficulty() {
        let mut filter = FilterState::default();
        filter.query = "  Tacos de Pollo ".into();
        filter.difficulty = Difficulty::Easy;
        filter.max_time_minutes = Some(45);

        let req = SearchRequest::from_filter(&filter);
        assert_eq!(req.q, "taco de pollo");
        assert_eq!(req.dificultad, "facil");
        assert_eq!(req.tiempo_max, "45");
        assert_eq!(req.orden, "recent");
    }

    #[test]
    fn unset_fields_serialize_empty() {
        let req = SearchRequest::from_filter(&FilterState::default());
        assert_eq!(req.q, "");
        assert_eq!(req.dificultad, "");
        assert_eq!(req.tiempo_max, "");
    }

    #[test]
    fn data_page_tolerates_missing_key() {
        let page: DataPage<crate::model::Recipe> = serde_json::from_str("{}").unwrap();
        assert!(page.data.is_empty());
    }
}
