pub mod config;
pub mod error;
pub mod model;
pub mod remote;
pub mod search;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;

use config::RemoteConfig;
use model::{Difficulty, Recipe, SortKey};
use remote::SearchRequest;
use remote::client::ApiClient;
use search::filter::FilterState;
use search::orchestrator::RecipeSource;

/// Command-line interface.
#[derive(Parser, Debug)]
#[command(
    name = "recetas-search",
    version,
    about = "Search and filter recipes from the Recetas API"
)]
pub struct Cli {
    /// Base URL of the recipe API (overrides RECETAS_API_BASE)
    #[arg(long)]
    pub api_base: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// One-shot search with the full filter pipeline
    Search {
        /// Free-text query
        query: Option<String>,

        /// Difficulty tier (facil, media, dificil)
        #[arg(long)]
        dificultad: Option<String>,

        /// Maximum preparation time in minutes
        #[arg(long = "tiempo-max")]
        tiempo_max: Option<u32>,

        /// Comma-separated ingredients that must all be present
        #[arg(long)]
        incluir: Option<String>,

        /// Comma-separated ingredients none of which may be present
        #[arg(long)]
        excluir: Option<String>,

        /// Sort order (fecha, titulo)
        #[arg(long)]
        orden: Option<String>,

        /// Emit JSON instead of formatted text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Dump the full feed, newest first
    Feed {
        /// Emit JSON instead of formatted text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = RemoteConfig::from_env();
    if let Some(base) = cli.api_base {
        config.base_url = base.trim_end_matches('/').to_string();
    }
    let client = ApiClient::new(&config).context("building API client")?;

    match cli.command {
        Commands::Search {
            query,
            dificultad,
            tiempo_max,
            incluir,
            excluir,
            orden,
            json,
        } => {
            let filter = build_filter(query, dificultad, tiempo_max, incluir, excluir, orden)?;
            let base = if filter.is_remote_eligible() {
                let request = SearchRequest::from_filter(&filter);
                client.search(&request).await.context("remote search")?
            } else {
                client.fetch_feed().await.context("fetching feed")?
            };
            let results = filter.apply(&base);
            print_results(&results, json)
        }
        Commands::Feed { json } => {
            let base = client.fetch_feed().await.context("fetching feed")?;
            let results = FilterState::default().apply(&base);
            print_results(&results, json)
        }
    }
}

fn build_filter(
    query: Option<String>,
    dificultad: Option<String>,
    tiempo_max: Option<u32>,
    incluir: Option<String>,
    excluir: Option<String>,
    orden: Option<String>,
) -> Result<FilterState> {
    let mut filter = FilterState::default();
    filter.query = query.unwrap_or_default();
    filter.max_time_minutes = tiempo_max;
    if let Some(raw) = &dificultad {
        filter.difficulty = Difficulty::parse(raw)
            .with_context(|| format!("unknown difficulty {raw:?} (facil, media, dificil)"))?;
    }
    if let Some(raw) = &orden {
        filter.sort =
            SortKey::parse(raw).with_context(|| format!("unknown sort order {raw:?} (fecha, titulo)"))?;
    }
    if let Some(raw) = &incluir {
        filter.set_include_list(raw);
    }
    if let Some(raw) = &excluir {
        filter.set_exclude_list(raw);
    }
    Ok(filter)
}

fn print_results(results: &[Recipe], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
        return Ok(());
    }
    if results.is_empty() {
        println!("{}", "no recipes matched".dimmed());
        return Ok(());
    }
    for recipe in results {
        let time = recipe
            .prep_minutes()
            .map(|m| format!("{m} min"))
            .unwrap_or_else(|| "? min".to_string());
        println!(
            "{}  {}  {}",
            recipe.title.bold(),
            time.cyan(),
            recipe.difficulty.yellow()
        );
        if !recipe.ingredients.is_empty() {
            println!("  {}", recipe.ingredients.join(", ").dimmed());
        }
    }
    println!("{}", format!("{} recipes", results.len()).dimmed());
    Ok(())
}
