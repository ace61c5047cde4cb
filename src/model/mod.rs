pub mod types;

pub use types::{Difficulty, Recipe, SortKey};
