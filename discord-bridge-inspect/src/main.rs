//! Bridge inspection tool
//!
//! Lists, for every bundled bridge, which enum values it can represent and
//! which native types back the abstract API, or shows how the memory
//! bridge resolves each channel kind to a wrapper.
//!
//! Usage:
//!   discord-bridge-inspect support --domain CHANNEL_TYPE
//!   discord-bridge-inspect resolve --json

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use discord_bridge_api::{BridgeConfig, EnumDomain};
use discord_bridge_inspect::{
    bundled_registry, memory_channel_resolutions, registry_report, render_resolutions,
    render_support,
};
use std::path::PathBuf;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "discord-bridge-inspect")]
#[command(about = "Inspect the bundled Discord bridges")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Bridge config file (defaults to $DISCORD_BRIDGE_CONFIG or ./discord-bridge.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Enum support and native types per bridge
    Support {
        /// Restrict to these domains (e.g. CHANNEL_TYPE); repeatable
        #[arg(short, long)]
        domain: Vec<String>,
    },
    /// Wrapper resolution for every memory channel kind
    Resolve,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::WARN };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let config = match &args.config {
        Some(path) => BridgeConfig::load_from(path),
        None => BridgeConfig::load(),
    };
    debug!(?config, "Loaded bridge config");

    match args.command {
        Command::Support { domain } => {
            let domains = parse_domains(&domain)?;
            let registry = bundled_registry(config);
            info!(bridges = registry.bridges().len(), "Inspecting bridges");
            let reports = registry_report(&registry, &domains);
            if args.json {
                let json = serde_json::to_string_pretty(&reports)
                    .context("Failed to serialize support report")?;
                println!("{json}");
            } else {
                print!("{}", render_support(&reports));
            }
        }
        Command::Resolve => {
            let reports =
                memory_channel_resolutions().context("Failed to build memory session")?;
            if args.json {
                let json = serde_json::to_string_pretty(&reports)
                    .context("Failed to serialize resolution report")?;
                println!("{json}");
            } else {
                print!("{}", render_resolutions(&reports));
            }
        }
    }
    Ok(())
}

fn parse_domains(names: &[String]) -> Result<Vec<EnumDomain>> {
    if names.is_empty() {
        return Ok(EnumDomain::ALL.to_vec());
    }
    names
        .iter()
        .map(|name| match EnumDomain::from_name(name) {
            Some(domain) => Ok(domain),
            None => bail!("unknown domain '{}'", name),
        })
        .collect()
}
