//! Search layer facade.
//!
//! This module provides the recipe search and filtering engine:
//!
//! - **[`text`]**: Normalization, tokenization and Spanish-plural stemming.
//! - **[`index`]**: Per-record stemmed index for containment checks.
//! - **[`filter`]**: Multi-criteria filter composer and result sorting.
//! - **[`orchestrator`]**: Debounced query orchestration with the
//!   stale-response sequence guard.

pub mod filter;
pub mod index;
pub mod orchestrator;
pub mod text;
