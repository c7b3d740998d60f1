//! Loadout Forge - headless optimizer CLI
//!
//! Loads an item pool snapshot (and optionally a mod selection and
//! settings), runs the combination search on the dedicated worker, and
//! prints the ranked loadouts.

use clap::Parser;
use loadout_forge::core::config::ForgeSettings;
use loadout_forge::core::error::{ForgeError, Result};
use loadout_forge::core::types::ClassType;
use loadout_forge::inventory::{Item, ItemPool};
use loadout_forge::mods::{total_stat_changes, ModSelection};
use loadout_forge::optimizer::{
    hydrate_armor_set, normalize_pool, Objective, SearchRequest, SearchWorker,
};
use loadout_forge::stats::StatType;
use std::fs;
use std::path::PathBuf;

/// Search an item pool for stat-maximal armor loadouts
#[derive(Parser, Debug)]
#[command(name = "loadout-forge")]
#[command(about = "Search an item pool for stat-maximal armor loadouts")]
struct Args {
    /// Item pool JSON file (array of items)
    #[arg(long)]
    pool: PathBuf,

    /// Class to build for: titan, hunter, or warlock
    #[arg(long)]
    class: String,

    /// Optimization target: a stat name, "total", or "power"
    #[arg(long, default_value = "total")]
    target: String,

    /// Mod selection JSON file
    #[arg(long)]
    mods: Option<PathBuf>,

    /// Settings TOML file
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Rank by base stat values instead of current values
    #[arg(long)]
    base: bool,

    /// Override how many ranked objective values to keep
    #[arg(long)]
    limit: Option<usize>,
}

fn parse_class(name: &str) -> Result<ClassType> {
    match name {
        "titan" => Ok(ClassType::Titan),
        "hunter" => Ok(ClassType::Hunter),
        "warlock" => Ok(ClassType::Warlock),
        other => Err(ForgeError::UnknownClass(other.to_string())),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("loadout_forge=info")
        .init();

    let args = Args::parse();

    let mut settings = match &args.settings {
        Some(path) => ForgeSettings::from_toml_path(path)?,
        None => ForgeSettings::default(),
    };
    if let Some(limit) = args.limit {
        settings.max_ranked_values = limit;
    }
    settings.compare_base_stats = settings.compare_base_stats || args.base;

    let class = parse_class(&args.class)?;
    let objective = Objective::parse(&args.target, &settings, class)?;

    let items: Vec<Item> = serde_json::from_str(&fs::read_to_string(&args.pool)?)?;
    let pool = ItemPool::new(items);

    let selection: ModSelection = match &args.mods {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => ModSelection::default(),
    };

    tracing::info!(
        pool_size = pool.items.len(),
        class = ?class,
        target = %args.target,
        "starting loadout search"
    );
    if !selection.is_empty() {
        tracing::info!(
            mods = selection.all_mods().count(),
            "applying mod selection"
        );
    }

    let candidates = normalize_pool(&pool, class, &selection, &settings);
    let deltas = total_stat_changes(&selection);

    let worker = SearchWorker::spawn()?;
    let rx = worker.submit(SearchRequest {
        candidates,
        deltas,
        objective,
        settings,
    })?;
    let outcome = rx.recv().map_err(|_| ForgeError::WorkerGone)?;

    if outcome.is_empty() {
        println!("No feasible loadout for this pool and mod selection.");
        return Ok(());
    }

    let by_id = pool.items_by_id();
    for (rank, set) in outcome.sets.iter().enumerate() {
        let hydrated = hydrate_armor_set(set, &by_id);
        println!(
            "#{:<3} objective {:>5}  power {:>4}",
            rank + 1,
            set.objective,
            set.power
        );
        let totals: Vec<String> = StatType::all()
            .iter()
            .map(|&stat| format!("{} {}", stat.name(), set.stats[stat]))
            .collect();
        println!("     {}", totals.join("  "));
        for item in &hydrated.items {
            println!("     - {}", item.name);
        }
        if hydrated.is_stale() {
            println!("     (some items no longer in pool - rerun the search)");
        }
    }

    Ok(())
}
