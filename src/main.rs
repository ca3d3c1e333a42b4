//! jlc-parts - Crawl the JLCPCB component catalog into CSV files.

use anyhow::Result;
use clap::{Parser, Subcommand};
use jlc_parts::commands::FetchCommand;
use jlc_parts::config::Config;
use jlc_parts::query::ComponentFamily;
use jlc_parts::units::UnitTable;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "jlc-parts",
    version,
    about = "Crawl the JLCPCB parts catalog into CSV files",
    long_about = "Searches the JLCPCB catalog for standard-value passives or whole library \
                  partitions and writes the matching parts to CSV in the working directory."
)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long, global = true, env = "JLC_PROXY")]
    proxy: Option<String>,

    /// Delay between requests in milliseconds
    #[arg(long, global = true)]
    delay: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Hide the progress bar
    #[arg(long, global = true)]
    no_progress: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// E96 chip resistors -> resistors.csv
    Resistors,

    /// E12 capacitors -> capacitors.csv
    Capacitors,

    /// Standard inductor values -> inductors.csv
    Inductors,

    /// Every basic part -> baseparts.csv
    Base,

    /// Every extended part -> expandparts.csv
    Expand,

    /// Dump both library partitions (base and expand)
    All,

    /// Crawl resistors, capacitors and inductors
    Families,
}

impl Commands {
    fn families(&self) -> Vec<ComponentFamily> {
        match self {
            Commands::Resistors => vec![ComponentFamily::Resistors],
            Commands::Capacitors => vec![ComponentFamily::Capacitors],
            Commands::Inductors => vec![ComponentFamily::Inductors],
            Commands::Base => vec![ComponentFamily::BaseParts],
            Commands::Expand => vec![ComponentFamily::ExpandParts],
            Commands::All => ComponentFamily::PARTITIONS.to_vec(),
            Commands::Families => ComponentFamily::STANDARD.to_vec(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    if let Some(delay) = cli.delay {
        config.delay_ms = delay;
    }

    if let Some(proxy) = cli.proxy {
        config.proxy = Some(proxy);
    }

    if cli.no_progress {
        config.progress = false;
    }

    let units = UnitTable::standard();
    let cmd = FetchCommand::new(config);

    for family in cli.command.families() {
        println!("getting {}", family);
        let output = cmd.execute(family, &units).await?;
        println!("{}", output);
    }

    Ok(())
}
