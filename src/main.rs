//! brewguide - an interactive brewing-recipe guide
//!
//! Demo host window: a brewing-stand screen with the guide overlay.

mod app;
mod config;
mod overlay;
mod packs;
mod screen;

use anyhow::Result;
use app::{AppAction, GuideApp};
use brewguide_core::RecipeCatalog;
use config::GuideConfig;
use std::{env, path::PathBuf};
use tracing::info;
use winit::event_loop::{ControlFlow, EventLoop};

fn main() -> Result<()> {
    // Initialize tracing with INFO level by default (can be overridden via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting brewguide v{}", env!("CARGO_PKG_VERSION"));

    let cli = CliOptions::parse(env::args().skip(1));
    let mut config = GuideConfig::load();
    if cli.no_sounds {
        config.play_sounds = false;
    }
    if cli.recipe_pack.is_some() {
        config.recipe_pack = cli.recipe_pack;
    }

    let mut catalog = RecipeCatalog::vanilla();
    if let Some(path) = &config.recipe_pack {
        if let Err(err) = packs::load_into(&mut catalog, path) {
            tracing::warn!(
                "Failed to load recipe pack {}: {err}. Continuing with the standard table",
                path.display()
            );
        }
    }
    info!("Recipe catalog ready ({} recipes)", catalog.len());

    // Create event loop
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GuideApp::new(&event_loop, catalog, &config)?;

    event_loop.run(move |event, elwt| match app.handle_event(&event) {
        AppAction::Continue => {}
        AppAction::Quit => {
            info!("Quitting");
            elwt.exit();
        }
    })?;

    info!("brewguide shutting down");
    Ok(())
}

#[derive(Clone)]
struct CliOptions {
    recipe_pack: Option<PathBuf>,
    no_sounds: bool,
}

impl CliOptions {
    fn parse<I: Iterator<Item = String>>(mut args: I) -> Self {
        let mut opts = CliOptions {
            recipe_pack: None,
            no_sounds: false,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--recipe-pack" => {
                    if let Some(path) = args.next() {
                        opts.recipe_pack = Some(PathBuf::from(path));
                    } else {
                        tracing::error!("--recipe-pack requires a file path");
                    }
                }
                "--no-sounds" => opts.no_sounds = true,
                _ => {}
            }
        }

        opts
    }
}
