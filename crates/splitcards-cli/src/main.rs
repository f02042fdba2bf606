//! Split Cards Finder CLI
//!
//! Thin wrapper around splitcards-core for inspecting data files from the
//! command line.
//!
//! ## Usage
//!
//! ```bash
//! # Show the values offered by the two dropdowns
//! splitcards options
//!
//! # List cards with mana value 3 castable for 2
//! splitcards filter --mv 3 --cost 2
//!
//! # Validate a data file line by line
//! splitcards --data other_cards.json check
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use splitcards_core::{
    compute_visible_cards, parse_card_lines, parse_selection, Catalog, DataSource, LoadPolicy, ManaValue,
    DEFAULT_DATA_FILE,
};

/// Split Cards Finder - filter split cards by mana value and casting cost
#[derive(Parser)]
#[command(name = "splitcards")]
#[command(version = "0.1.0")]
#[command(about = "Split Cards Finder - filter split cards by mana value and casting cost")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Card data file path or http(s) URL
    #[arg(short, long, global = true, default_value = DEFAULT_DATA_FILE)]
    data: String,

    /// Fail on the first malformed line instead of skipping it
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the distinct mana values and casting costs
    Options,

    /// List cards matching a mana value and casting cost
    Filter {
        /// Mana value (negative means unset)
        #[arg(long, allow_hyphen_values = true)]
        mv: String,

        /// Casting cost (negative means unset)
        #[arg(long, allow_hyphen_values = true)]
        cost: String,
    },

    /// Report malformed lines in the data file
    Check,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Join values the way the dropdowns label them
fn format_values(values: &[ManaValue]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let source: DataSource = cli.data.parse()?;
    let policy = if cli.strict {
        LoadPolicy::Strict
    } else {
        LoadPolicy::Lenient
    };

    match cli.command {
        Commands::Options => {
            let catalog = Catalog::load(&source, policy).await?;

            println!("MV: {}", format_values(catalog.mv_values()));
            println!("Casting costs: {}", format_values(catalog.casting_cost_values()));
        }
        Commands::Filter { mv, cost } => {
            let catalog = Catalog::load(&source, policy).await?;

            let visible =
                compute_visible_cards(catalog.cards(), parse_selection(&mv), parse_selection(&cost));
            if visible.is_empty() {
                println!("No matching cards found");
            } else {
                println!("Matching Cards");
                for card in visible {
                    println!("  {}  {}", card.name, card.scryfall_uri);
                }
            }
        }
        Commands::Check => {
            // Decoded lines, not a Catalog: an all-rejected file still gets its report.
            let text = source.fetch_text().await?;
            let parsed = parse_card_lines(&text, LoadPolicy::Lenient)?;

            println!("Cards: {}", parsed.cards.len());
            if parsed.rejected.is_empty() {
                println!("All lines OK");
            } else {
                println!("Rejected lines: {}", parsed.rejected.len());
                for rejected in &parsed.rejected {
                    println!("  line {}: {}", rejected.line_number, rejected.reason);
                }
                anyhow::bail!("{} malformed lines in {}", parsed.rejected.len(), source);
            }
        }
    }

    Ok(())
}
