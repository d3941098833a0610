#![allow(non_snake_case)]

mod app;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use folio_core::logging::setup_logging;
use folio_core::{Catalog, FolioConfig};

/// Catalog shown by the app, set once before launch
static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Get the catalog (the built-in sample if none was loaded)
pub fn get_catalog() -> Catalog {
    CATALOG.get().cloned().unwrap_or_else(Catalog::builtin)
}

/// Folio - project showcase
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - project cards with full-detail overlays")]
struct Args {
    /// Catalog JSON file (overrides the config file)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Config file (default: <config dir>/folio/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let config = FolioConfig::resolve(args.config.as_deref()).context("Failed to load config")?;

    let catalog = match args.catalog.as_ref().or(config.catalog.as_ref()) {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => {
            tracing::info!("No catalog configured, showing the built-in sample");
            Catalog::builtin()
        }
    };

    tracing::info!(
        "Starting '{}' with {} projects",
        config.title,
        catalog.projects().len()
    );
    let _ = CATALOG.set(catalog);

    // Configure desktop window
    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&config.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(
                config.window_width,
                config.window_height,
            ))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}
