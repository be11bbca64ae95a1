#![warn(clippy::all)]

use anyhow::{anyhow, Context};
use clap::Parser;
use eframe::egui::{vec2, ViewportBuilder};
use torus_life::{App, Config, Session, Style};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();
    config.validate().context("invalid configuration")?;
    info!(?config, "starting");

    let session = Session::new(&config).context("failed to create the world")?;

    let side = config.window_size()?;
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(Style::TITLE)
            .with_inner_size(vec2(side, side))
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        Style::TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(App::new(&cc.egui_ctx, session, &config)))),
    )
    .map_err(|err| anyhow!("{err}"))
}
