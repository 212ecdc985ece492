use anyhow::{Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use piggy_finance::{Analysis, categorize};
use piggy_ingest::import_all;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod config;
mod report;

#[derive(Parser, Debug)]
#[command(name = "piggy", version, about = "Categorized spend analytics and budget comparison")]
struct Cli {
    /// Config file (default: ./piggy.toml, built-in defaults if absent)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Import transactions, categorize them and print the analysis
    Report {
        /// CSV export (date,amount,description)
        #[arg(long, default_value = "money.csv")]
        csv: PathBuf,

        /// JSON export ({"transactions": [...]})
        #[arg(long, default_value = "transactions.json")]
        json: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Print the category each description would get
    Categorize {
        #[arg(required = true)]
        descriptions: Vec<String>,
    },

    /// List categories in priority order with their keywords
    Taxonomy,

    /// Write the default configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins, then --verbose, then warnings only
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr).compact())
        .init();

    let config_path = config::config_path(cli.config.as_deref());

    match cli.command {
        Command::Report { csv, json, format } => {
            let cfg = config::load_config(&config_path)?;
            let taxonomy = cfg.taxonomy()?;

            let txns = import_all(&[csv, json]);
            if txns.is_empty() {
                bail!("no data to analyze");
            }
            debug!(count = txns.len(), "running analysis");

            let analysis = Analysis::run(txns, &taxonomy, &cfg.budget);
            match format {
                Format::Text => print!("{}", report::render_text(&analysis)?),
                Format::Json => println!("{}", serde_json::to_string_pretty(&analysis)?),
            }
        }

        Command::Categorize { descriptions } => {
            let taxonomy = config::load_config(&config_path)?.taxonomy()?;
            for d in &descriptions {
                println!("{}\t{}", categorize(d, &taxonomy), d);
            }
        }

        Command::Taxonomy => {
            let taxonomy = config::load_config(&config_path)?.taxonomy()?;
            for (i, rule) in taxonomy.rules().iter().enumerate() {
                println!("{:>2}. {}: {}", i + 1, rule.name(), rule.keywords().join(", "));
            }
            println!("    fallback: {}", taxonomy.other());
        }

        Command::InitConfig { force } => {
            config::init_config(&config_path, force)?;
        }
    }

    Ok(())
}
