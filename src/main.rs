// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use cdp_assistant::utils::logging::{
    format_error, format_heading, format_info, format_source, format_success, format_warning,
};
use cdp_assistant::{
    AnswerKind, AnswerRequest, Config, CorpusLoader, DocumentationStore, HealthReport, HealthStatus,
    MemoryStore, Platform, QueryPipeline, Scope, Validator, check_store,
};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};

const PREVIEW_LENGTH: usize = 200;

#[derive(Parser)]
#[command(name = "cdp_assistant")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Answers questions about Segment, mParticle, Lytics and Zeotap", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a question about one or all supported CDPs
    Ask {
        query: String,

        /// segment, mparticle, lytics, zeotap or all
        #[arg(short, long)]
        platform: Option<String>,

        /// Print the answer as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search the documentation corpus directly
    Search {
        query: String,

        #[arg(short, long)]
        platform: Option<String>,

        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },

    /// List a platform's documents, most recently updated first
    Docs { platform: String },

    /// Show per-platform document counts and store health
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    cdp_assistant::utils::logging::init_logger(cli.color, cli.verbose);

    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    let store = Arc::new(load_store(&config)?);

    match cli.command {
        Commands::Ask {
            query,
            platform,
            json,
        } => {
            cmd_ask(&config, store, query, platform.as_deref(), json).await?;
        }
        Commands::Search {
            query,
            platform,
            limit,
        } => {
            cmd_search(store.as_ref(), &query, platform.as_deref(), limit).await?;
        }
        Commands::Docs { platform } => {
            cmd_docs(store.as_ref(), &platform).await?;
        }
        Commands::Stats => {
            cmd_stats(store.as_ref()).await?;
        }
    }

    Ok(())
}

fn load_store(config: &Config) -> Result<MemoryStore> {
    let loader = CorpusLoader::new(&config.store.corpus_path);
    loader
        .load_store()
        .with_context(|| format!("Failed to load corpus from {}", loader.path().display()))
}

async fn cmd_ask(
    config: &Config,
    store: Arc<MemoryStore>,
    query: String,
    platform: Option<&str>,
    json: bool,
) -> Result<()> {
    let scope = platform
        .map(str::parse::<Scope>)
        .transpose()
        .context("Invalid --platform value")?;

    let pipeline = QueryPipeline::new(store, config);
    let request = AnswerRequest::new(query, scope);

    let outcome = match pipeline.process(&request).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Query failed: {}", e);
            eprintln!("{}", format_error(&e.user_message()));
            return Err(anyhow::Error::new(e).context("Failed to answer question"));
        }
    };

    if json {
        let response = outcome.into_response();
        println!(
            "{}",
            serde_json::to_string_pretty(&response).context("Failed to serialize answer")?
        );
        return Ok(());
    }

    match outcome.answer.kind {
        AnswerKind::OutOfDomain
        | AnswerKind::NoResults
        | AnswerKind::InsufficientComparisonData => {
            println!("{}", format_warning(&outcome.answer.text));
        }
        _ => println!("{}", outcome.answer.text),
    }

    if !outcome.answer.sources.is_empty() {
        println!();
        println!("{}", format_heading("Sources"));
        for (index, source) in outcome.answer.sources.iter().enumerate() {
            println!("{}", format_source(index + 1, &source.title, &source.url));
        }
    }

    println!();
    println!("{}", format_info(&format!("Answered for scope: {}", outcome.scope)));

    Ok(())
}

async fn cmd_search(
    store: &dyn DocumentationStore,
    query: &str,
    platform: Option<&str>,
    limit: usize,
) -> Result<()> {
    Validator::validate_query(query)?;
    Validator::validate_limit(limit)?;

    let platform = platform
        .map(str::parse::<Platform>)
        .transpose()
        .context("Invalid --platform value")?;

    info!("Searching for: {}", query);

    let hits = store
        .search(query, platform, limit)
        .await
        .context("Search failed")?;

    if hits.is_empty() {
        println!("{}", format_warning("No matching documents"));
        return Ok(());
    }

    println!(
        "{}",
        format_success(&format!("Found {} matching documents", hits.len()))
    );
    for (index, hit) in hits.iter().enumerate() {
        println!("\n{}. {}", index + 1, hit.format_summary(PREVIEW_LENGTH));
    }

    Ok(())
}

async fn cmd_docs(store: &dyn DocumentationStore, platform: &str) -> Result<()> {
    let platform: Platform = platform.parse().context("Invalid platform")?;

    let documents = store
        .list_by_platform(platform)
        .await
        .context("Failed to list documents")?;

    println!(
        "{}",
        format_heading(&format!("{} documents ({})", platform.capitalized(), documents.len()))
    );

    for document in &documents {
        let updated = document
            .last_updated
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "undated".to_string());
        println!(
            "  [{}] {} - {} ({})",
            document.category, document.title, document.url, updated
        );
    }

    Ok(())
}

async fn cmd_stats(store: &dyn DocumentationStore) -> Result<()> {
    info!("Gathering statistics");

    let total = store.count(None).await.context("Failed to count documents")?;
    println!("{}", format_info(&format!("Total documents: {}", total)));

    let checks = check_store(store).await;
    let report = HealthReport::new(checks, env!("CARGO_PKG_VERSION").to_string());

    match report.overall_status {
        HealthStatus::Healthy => println!("{}", format_success("Store is healthy")),
        HealthStatus::Degraded => println!("{}", format_warning("Store is degraded")),
        HealthStatus::Unhealthy => println!("{}", format_error("Store is unhealthy")),
    }
    println!("{}", report.format());

    Ok(())
}
