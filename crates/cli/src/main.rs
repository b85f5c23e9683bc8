use anyhow::{anyhow, Context, Result};
use catalog::{load_catalog, Catalog, ContentItem};
use clap::{Parser, Subcommand};
use colored::Colorize;
use engine::{Engine, EngineConfig, RankedItem, Strategy, ViewingContext, DEFAULT_LIMIT};
use std::path::PathBuf;
use std::time::Instant;
use tracing::warn;

/// patrimoine-recs - Cultural content recommendation engine
#[derive(Parser)]
#[command(name = "patrimoine-recs")]
#[command(about = "Ranks cultural content catalogs with pluggable strategies", long_about = None)]
struct Cli {
    /// Path to the catalog JSON file (an array of content items)
    #[arg(short, long, default_value = "data/catalog.json")]
    catalog: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the catalog with a strategy
    Rank {
        /// Strategy name (popular, recent, trending, personalized, similar)
        #[arg(long)]
        strategy: String,

        /// Id of the currently viewed item (context for `similar`)
        #[arg(long)]
        current_id: Option<String>,

        /// Id of a previously viewed item; repeat for a longer history
        /// (context for `personalized`)
        #[arg(long = "history-id")]
        history_ids: Vec<String>,

        /// Number of results to return
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,

        /// Count two items without an origin as origin-matched in `similar`
        #[arg(long)]
        null_origin_matches: bool,
    },

    /// List the available strategies
    Strategies,

    /// Show one catalog item
    Show {
        /// Item id to display
        #[arg(long)]
        id: String,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Commands::Strategies = cli.command {
        // no catalog needed for a listing
        return handle_strategies();
    }

    println!("Loading catalog from {}...", cli.catalog.display());
    let start = Instant::now();
    let catalog = load_catalog(&cli.catalog)
        .with_context(|| format!("failed to load catalog from {}", cli.catalog.display()))?;
    println!(
        "{} Loaded {} items in {:?}",
        "✓".green(),
        catalog.len(),
        start.elapsed()
    );

    match cli.command {
        Commands::Rank {
            strategy,
            current_id,
            history_ids,
            limit,
            null_origin_matches,
        } => handle_rank(
            &catalog,
            &strategy,
            current_id,
            history_ids,
            limit,
            null_origin_matches,
        ),
        Commands::Show { id } => handle_show(&catalog, &id),
        Commands::Strategies => unreachable!("handled before catalog loading"),
    }
}

/// Handle the 'rank' command
fn handle_rank(
    catalog: &Catalog,
    strategy: &str,
    current_id: Option<String>,
    history_ids: Vec<String>,
    limit: usize,
    null_origin_matches: bool,
) -> Result<()> {
    let strategy: Strategy = strategy.parse()?;

    let mut ctx = ViewingContext::new();
    if let Some(id) = current_id {
        match catalog.get(&id) {
            Some(item) => ctx.current_item = Some(item.clone()),
            None => warn!(%id, "current item not found in catalog, ignoring"),
        }
    }
    for id in history_ids {
        match catalog.get(&id) {
            Some(item) => ctx.history.push(item.clone()),
            None => warn!(%id, "history item not found in catalog, ignoring"),
        }
    }

    let engine = Engine::with_config(EngineConfig {
        limit,
        null_origin_matches,
        ..EngineConfig::default()
    });

    let start = Instant::now();
    let ranked = engine.rank(catalog, strategy, &ctx)?;
    println!(
        "{} Ranked with '{}' in {:?}",
        "✓".green(),
        strategy,
        start.elapsed()
    );

    print_ranked(&ranked);
    Ok(())
}

/// Handle the 'strategies' command
fn handle_strategies() -> Result<()> {
    println!("{}", "Available strategies:".bold().blue());
    for strategy in Strategy::ALL {
        println!(
            "  {} - {}",
            strategy.name().green(),
            strategy.description()
        );
    }
    Ok(())
}

/// Handle the 'show' command
fn handle_show(catalog: &Catalog, id: &str) -> Result<()> {
    let item = catalog
        .get(id)
        .ok_or_else(|| anyhow!("item {} not found in catalog", id))?;
    print_item(item);
    Ok(())
}

fn print_ranked(ranked: &[RankedItem]) {
    if ranked.is_empty() {
        println!("No results.");
        return;
    }
    println!("{}", "Recommendations:".bold().blue());
    for (i, r) in ranked.iter().enumerate() {
        let origin = r.item.origin.as_deref().unwrap_or("-");
        println!(
            "{}. {} [{:?}] origin: {} - score: {:.3} ({})",
            (i + 1).to_string().green(),
            r.item.id,
            r.item.category,
            origin,
            r.score,
            r.strategy
        );
    }
}

fn print_item(item: &ContentItem) {
    println!("{}", format!("Item {}", item.id).bold().blue());
    println!("{}Category: {:?}", "• ".green(), item.category);
    println!(
        "{}Origin: {}",
        "• ".green(),
        item.origin.as_deref().unwrap_or("-")
    );
    println!(
        "{}Artist: {}",
        "• ".green(),
        item.artist.as_deref().unwrap_or("-")
    );
    let tags: Vec<&str> = item.tags.iter().map(String::as_str).collect();
    println!("{}Tags: {}", "• ".green(), tags.join(", "));
    println!("{}Likes: {}  Views: {}", "• ".cyan(), item.likes, item.views);
    if let Some(rating) = item.rating {
        println!("{}Rating: {:.1}/5", "• ".cyan(), rating);
    }
    println!("{}Published: {}", "• ".cyan(), item.created_at.to_rfc3339());
}
