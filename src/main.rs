#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use anyhow::Result;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use splitcards_core::{DataSource, LoadPolicy, DEFAULT_DATA_FILE};

use crate::context::LoadConfig;

/// Split Cards Finder - pick a mana value and casting cost, see matching split cards
#[derive(Parser, Debug)]
#[command(name = "splitcards-desktop")]
#[command(about = "Split Cards Finder - filter split cards by mana value and casting cost")]
struct Args {
    /// Card data file path or http(s) URL
    #[arg(short, long, env = "SPLITCARDS_DATA", default_value = DEFAULT_DATA_FILE)]
    data: String,

    /// Fail the whole load on the first malformed line
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let source: DataSource = args.data.parse()?;
    let policy = if args.strict {
        LoadPolicy::Strict
    } else {
        LoadPolicy::Lenient
    };

    tracing::info!("Starting with data source {} ({:?})", source, policy);

    // Store load configuration globally
    context::set_load_config(LoadConfig { source, policy });

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Split Cards Finder")
            .with_inner_size(dioxus::desktop::LogicalSize::new(900.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
