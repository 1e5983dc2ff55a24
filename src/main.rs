use anyhow::Context;
use clap::{Args as ClapArgs, Parser, Subcommand};
use selectx::{Application, Catalog, Query, RankStats, ScoringConfig};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Select and rank catalog items against a partial specification
#[derive(Parser, Debug)]
#[command(name = "selectx")]
#[command(about = "Rank catalog items against a partial specification", long_about = None)]
struct Args {
    /// Path to a JSON catalog (defaults to the built-in sample catalog)
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// Path to a JSON scoring configuration
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Filter and rank the catalog
    Rank {
        #[command(flatten)]
        query: QueryArgs,

        /// Include summary statistics
        #[arg(long)]
        stats: bool,
    },
    /// Check a query without ranking
    Validate {
        #[command(flatten)]
        query: QueryArgs,
    },
    /// Most efficient items for an application
    Suggest {
        #[arg(short, long)]
        application: String,

        #[arg(short, long, default_value_t = 5)]
        limit: usize,
    },
    /// Best items overall by efficiency and versatility
    Top {
        #[arg(short, long, default_value_t = 5)]
        limit: usize,
    },
}

#[derive(ClapArgs, Debug)]
struct QueryArgs {
    /// Required flow (m³/h)
    #[arg(long, allow_negative_numbers = true)]
    flow: Option<f64>,

    /// Required head (m)
    #[arg(long, allow_negative_numbers = true)]
    head: Option<f64>,

    /// Maximum available power (kW)
    #[arg(long, allow_negative_numbers = true)]
    max_power: Option<f64>,

    #[arg(long)]
    installation: Option<String>,

    #[arg(long)]
    phase: Option<String>,

    #[arg(long)]
    application: Option<String>,

    #[arg(long)]
    material: Option<String>,

    /// The medium carries solids
    #[arg(long)]
    solids: bool,
}

impl From<QueryArgs> for Query {
    fn from(args: QueryArgs) -> Self {
        Query {
            flow: args.flow,
            head: args.head,
            max_power: args.max_power,
            installation: args.installation,
            phase: args.phase,
            application: args.application,
            preferred_material: args.material,
            solids_handling: args.solids.then_some(true),
        }
    }
}

#[derive(Serialize)]
struct RankOutput<'a> {
    #[serde(flatten)]
    result: selectx::FilterResult<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<RankStats>,
}

/// Suggestions as JSON; an unknown application has no members
fn suggest(catalog: &Catalog, application: &str, limit: usize) -> anyhow::Result<String> {
    let items = match application.parse::<Application>() {
        Ok(application) => selectx::suggest_by_category(catalog, application, limit),
        Err(err) => {
            warn!("{}", err);
            Vec::new()
        }
    };
    Ok(serde_json::to_string_pretty(&items)?)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let catalog = match &args.catalog {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("failed to load catalog from {:?}", path))?,
        None => Catalog::builtin().context("built-in catalog is invalid")?,
    };
    info!("Catalog ready with {} items", catalog.len());

    let config = match &args.config {
        Some(path) => ScoringConfig::from_path(path)
            .with_context(|| format!("failed to load scoring config from {:?}", path))?,
        None => ScoringConfig::default(),
    };

    let output = match args.command {
        Command::Rank { query, stats } => {
            // invalid values are logged and ignored by the engine
            let query = Query::from(query);
            let result = selectx::rank(&catalog, &query, &config);
            let stats = stats.then(|| RankStats::compute(&result, catalog.len()));
            serde_json::to_string_pretty(&RankOutput { result, stats })?
        }
        Command::Validate { query } => {
            let report = selectx::validate_with_limits(&Query::from(query), &config.limits);
            serde_json::to_string_pretty(&report)?
        }
        Command::Suggest { application, limit } => suggest(&catalog, &application, limit)?,
        Command::Top { limit } => {
            serde_json::to_string_pretty(&selectx::top_rated(&catalog, limit))?
        }
    };

    println!("{}", output);
    Ok(())
}
