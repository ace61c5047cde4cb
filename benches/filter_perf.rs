use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use recetas_search::model::{Difficulty, Recipe};
use recetas_search::search::filter::FilterState;
use recetas_search::search::index::SearchIndex;
use recetas_search::search::text::stemmed_terms;

fn sample_recipes(n: usize) -> Vec<Recipe> {
    (0..n)
        .map(|i| Recipe {
            id: i.to_string(),
            title: format!("Tacos de prueba número {i}"),
            description: "Receta de ejemplo con varios ingredientes típicos y una descripción razonablemente larga para el índice".into(),
            ingredients: vec![
                "500g de pollo".into(),
                "tortillas de maíz".into(),
                format!("especias {i}"),
                "cebolla morada".into(),
            ],
            prep_time_minutes: (10 + (i % 90)).to_string(),
            difficulty: ["Fácil", "Media", "Difícil"][i % 3].into(),
            ..Recipe::default()
        })
        .collect()
}

/// Index construction for a full feed page.
fn bench_index_build_500(c: &mut Criterion) {
    let recipes = sample_recipes(500);
    c.bench_function("index_build_500", |b| {
        b.iter(|| {
            for r in &recipes {
                let _ = black_box(SearchIndex::build(r));
            }
        })
    });
}

/// The full composer (query + includes + excludes + time + difficulty)
/// over a feed-sized record set.
fn bench_filter_apply_500(c: &mut Criterion) {
    let recipes = sample_recipes(500);
    let mut filter = FilterState::default();
    filter.query = "tacos pollo".into();
    filter.set_include_list("tortillas,cebolla");
    filter.set_exclude_list("nueces");
    filter.max_time_minutes = Some(60);
    filter.difficulty = Difficulty::Medium;

    c.bench_function("filter_apply_500", |b| {
        b.iter(|| {
            let _ = black_box(filter.apply(&recipes));
        })
    });
}

/// Text pipeline on a typical query string.
fn bench_stemmed_terms(c: &mut Criterion) {
    c.bench_function("stemmed_terms_query", |b| {
        b.iter(|| {
            let _ = black_box(stemmed_terms("Tacos al Pastor con Piñas y Cebollas"));
        })
    });
}

criterion_group!(
    benches,
    bench_index_build_500,
    bench_filter_apply_500,
    bench_stemmed_terms
);
criterion_main!(benches);
