#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod platform;
mod theme;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context as _;
use bizcard_core::CardConfig;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// Digital Business Card - desktop viewer
#[derive(Parser, Debug)]
#[command(name = "bizcard-desktop")]
#[command(about = "Digital business card with gallery, vCard export and sharing")]
struct Args {
    /// Card JSON to display instead of the built-in card
    #[arg(short, long)]
    card: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1180.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

fn load_card(path: Option<&PathBuf>) -> anyhow::Result<CardConfig> {
    match path {
        Some(path) => CardConfig::load(path)
            .with_context(|| format!("failed to load card from {}", path.display())),
        None => CardConfig::builtin().context("built-in card is invalid"),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("bizcard=info,bizcard_core=info")),
        )
        .init();

    let args = Args::parse();

    let card = match load_card(args.card.as_ref()) {
        Ok(card) => card,
        Err(e) => {
            tracing::error!("{:#}", e);
            return ExitCode::FAILURE;
        }
    };

    let source = args
        .card
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in".to_string());
    tracing::info!("Starting card '{}' from {}", card.hero.name, source);

    let title = card.contact.share_metadata.title.clone();
    let card: context::SharedCard = Arc::new(card);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(card)
        .launch(app::App);

    ExitCode::SUCCESS
}
