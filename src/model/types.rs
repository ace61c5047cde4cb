//! Normalized entity structs.

use serde::{Deserialize, Deserializer, Serialize};

use crate::search::text::normalize;

/// A recipe as served by the remote API.
///
/// The engine only reads records; the wire shape uses Spanish keys and is
/// loosely typed, so the numeric-looking fields are coerced defensively
/// rather than rejected (a malformed record must never break the filter
/// pipeline).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default, deserialize_with = "loose_string")]
    pub id: String,
    #[serde(rename = "titulo", default)]
    pub title: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    /// Ingredient list; anything other than an array of values on the
    /// wire collapses to an empty list.
    #[serde(rename = "ingredientes", default, deserialize_with = "loose_string_list")]
    pub ingredients: Vec<String>,
    /// Preparation time in minutes. Kept as the raw wire value (string or
    /// number) and parsed lazily by [`Recipe::prep_minutes`].
    #[serde(rename = "tiempo_preparacion", default, deserialize_with = "loose_string")]
    pub prep_time_minutes: String,
    /// Free-form difficulty label ("Fácil", "Media", "Difícil").
    #[serde(rename = "dificultad", default)]
    pub difficulty: String,
    #[serde(rename = "autor", default)]
    pub author: String,
    /// Creation timestamp, RFC 3339.
    #[serde(rename = "creado_en", default)]
    pub created_at: String,
    #[serde(rename = "me_gusta", default)]
    pub likes_count: i64,
    #[serde(rename = "comentarios", default)]
    pub comments_count: i64,
}

impl Recipe {
    /// Preparation time as whole minutes, if the field parses.
    ///
    /// Accepts a leading integer ("30", "30 min"); anything else is
    /// `None`, which the max-time filter treats as passing.
    pub fn prep_minutes(&self) -> Option<u32> {
        let digits: String = self
            .prep_time_minutes
            .trim()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().ok()
    }

    /// Creation time as Unix milliseconds; unparsable timestamps sort as
    /// epoch zero.
    pub fn created_ts(&self) -> i64 {
        chrono::DateTime::parse_from_rfc3339(&self.created_at)
            .map(|dt| dt.timestamp_millis())
            .unwrap_or(0)
    }
}

/// Difficulty filter tier. `Any` is the explicit unset variant; empty
/// strings are never used as a sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Any,
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Display label in the remote API's vocabulary.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Any => "",
            Difficulty::Easy => "Fácil",
            Difficulty::Medium => "Media",
            Difficulty::Hard => "Difícil",
        }
    }

    /// Parse user text, tolerating accents and case ("fácil", "FACIL").
    pub fn parse(text: &str) -> Option<Self> {
        match normalize(text).as_str() {
            "" | "any" | "todas" | "cualquiera" => Some(Difficulty::Any),
            "facil" => Some(Difficulty::Easy),
            "media" | "medio" => Some(Difficulty::Medium),
            "dificil" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// Result ordering. Date is newest-first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    Date,
    Title,
}

impl SortKey {
    pub fn parse(text: &str) -> Option<Self> {
        match normalize(text).as_str() {
            "fecha" | "date" => Some(SortKey::Date),
            "titulo" | "title" => Some(SortKey::Title),
            _ => None,
        }
    }
}

/// Accept a string or number, coerce everything else to "".
fn loose_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value_to_string(&value))
}

/// Accept an array of strings/numbers; any other shape is an empty list.
fn loose_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Array(items) => Ok(items
            .iter()
            .map(value_to_string)
            .filter(|s| !s.is_empty())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

fn value_to_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_spanish_wire_shape() {
        let r: Recipe = serde_json::from_str(
            r#"{
                "id": 7,
                "titulo": "Tacos al pastor",
                "descripcion": "Clásicos",
                "ingredientes": ["pollo", "tortillas", 2],
                "tiempo_preparacion": 30,
                "dificultad": "Fácil",
                "autor": "ana",
                "creado_en": "2024-05-01T12:00:00Z",
                "me_gusta": 4
            }"#,
        )
        .unwrap();
        assert_eq!(r.id, "7");
        assert_eq!(r.ingredients, vec!["pollo", "tortillas", "2"]);
        assert_eq!(r.prep_minutes(), Some(30));
        assert_eq!(r.likes_count, 4);
        assert_eq!(r.comments_count, 0);
    }

    #[test]
    fn non_array_ingredients_become_empty() {
        let r: Recipe =
            serde_json::from_str(r#"{"titulo": "x", "ingredientes": "pollo, arroz"}"#).unwrap();
        assert!(r.ingredients.is_empty());
    }

    #[test]
    fn unparsable_prep_time_is_none() {
        let r: Recipe = serde_json::from_str(r#"{"tiempo_preparacion": "un rato"}"#).unwrap();
        assert_eq!(r.prep_minutes(), None);

        let r: Recipe = serde_json::from_str(r#"{"tiempo_preparacion": "45 min"}"#).unwrap();
        assert_eq!(r.prep_minutes(), Some(45));
    }

    #[test]
    fn unparsable_timestamp_is_epoch_zero() {
        let r = Recipe {
            created_at: "yesterday".into(),
            ..Recipe::default()
        };
        assert_eq!(r.created_ts(), 0);

        let r = Recipe {
            created_at: "2024-05-01T12:00:00Z".into(),
            ..Recipe::default()
        };
        assert!(r.created_ts() > 0);
    }

    #[test]
    fn difficulty_parse_tolerates_accents() {
        assert_eq!(Difficulty::parse("Fácil"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::parse("FACIL"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::parse("difícil"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::parse(""), Some(Difficulty::Any));
        assert_eq!(Difficulty::parse("imposible"), None);
    }

    #[test]
    fn sort_key_parse() {
        assert_eq!(SortKey::parse("Título"), Some(SortKey::Title));
        assert_eq!(SortKey::parse("fecha"), Some(SortKey::Date));
        assert_eq!(SortKey::parse("votes"), None);
    }
}
