//! Drop-rate analyzer CLI application.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use drop_analyzer::render::{
    render_drop_rate, render_engagement_chart, render_genres, render_progress,
    render_ranked_title, render_stat_cards, render_summary,
};
use drop_analyzer::{
    fetch_title_report, filter_desired_genres, find_genre, rank_genre, resolve_anime,
    AnimeSource, JikanClient,
};
use shared::Config;
use std::path::PathBuf;
use tracing::info;

const CHART_WIDTH: usize = 40;

#[derive(Parser, Debug)]
#[command(name = "drop-analyzer")]
#[command(author, version, about = "Anime engagement and drop-rate analyzer", long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up a title by name and show its engagement statistics
    Search {
        /// Anime name
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// List the genres available for ranking
    Genres,

    /// Rank a genre's top-scored titles by engagement
    Top {
        /// Genre name, e.g. "Isekai"
        genre: String,

        /// Number of titles (defaults to the configured top_limit)
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::from_file(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;

    shared::logging::init(shared::LogConfig::from_settings(
        "drop-analyzer",
        &config.logging,
        args.verbose,
    ))?;

    info!(config_file = %args.config.display(), "Drop analyzer starting");

    let client =
        JikanClient::from_config(&config.analyzer).context("Failed to create Jikan client")?;

    match args.command {
        Command::Search { query } => search(&client, &config, &query.join(" ")).await,
        Command::Genres => genres(&client, &config).await,
        Command::Top { genre, limit } => {
            let limit = limit.unwrap_or(config.analyzer.top_limit);
            top(&client, &config, &genre, limit).await
        }
    }
}

async fn search(client: &JikanClient, config: &Config, query: &str) -> Result<()> {
    let summary = resolve_anime(client, query, config.analyzer.search_limit)
        .await
        .with_context(|| format!("Failed to look up '{}'", query))?;
    let report = fetch_title_report(client, summary.id)
        .await
        .with_context(|| format!("Failed to fetch statistics for {}", summary.title))?;

    println!("{}", render_summary(&summary));
    println!("Stats");
    println!("{}", render_stat_cards(&report));
    println!("Chart");
    println!("{}", render_engagement_chart(&report.stats, CHART_WIDTH));
    println!("{}", render_drop_rate(report.drop_rate));

    Ok(())
}

async fn genres(client: &JikanClient, config: &Config) -> Result<()> {
    let catalog = client
        .fetch_all_genres()
        .await
        .context("Failed to fetch genre catalog")?;
    let genres = filter_desired_genres(&catalog, &config.analyzer.desired_genres)?;

    print!("{}", render_genres(&genres));
    Ok(())
}

async fn top(client: &JikanClient, config: &Config, genre_name: &str, limit: usize) -> Result<()> {
    let catalog = client
        .fetch_all_genres()
        .await
        .context("Failed to fetch genre catalog")?;
    let genres = filter_desired_genres(&catalog, &config.analyzer.desired_genres)?;
    let genre = find_genre(&genres, genre_name).ok_or_else(|| {
        let names: Vec<&str> = genres.iter().map(|g| g.name.as_str()).collect();
        anyhow!(
            "Unknown genre '{}', expected one of: {}",
            genre_name,
            names.join(", ")
        )
    })?;

    println!("Top {} {} Anime", limit, genre.name);
    println!();

    let ranked = rank_genre(client, genre.id, limit, |progress| {
        info!(genre = %genre.name, "{}", render_progress(progress));
    })
    .await
    .with_context(|| format!("Failed to rank {} anime", genre.name))?;

    for title in &ranked {
        println!("{}", render_ranked_title(title, CHART_WIDTH));
    }

    Ok(())
}
