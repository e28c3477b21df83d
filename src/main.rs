use std::path::PathBuf;

use clap::{ArgAction, Parser};
use sketchpad::{Config, backend, config::ColorSpec, draw::Color, editor::parse_thickness};

#[derive(Parser, Debug)]
#[command(name = "sketchpad")]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SKETCHPAD_GIT_HASH"), ")"),
    about = "Minimal drawing canvas for Wayland desktops"
)]
struct Cli {
    /// Load configuration from this file instead of ~/.config/sketchpad/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Initial drawing color (palette name or #rrggbb)
    #[arg(long, value_name = "COLOR")]
    color: Option<Color>,

    /// Initial line thickness in pixels (positive integer)
    #[arg(long, short = 't', value_name = "PIXELS", value_parser = parse_thickness)]
    thickness: Option<u32>,

    /// Write a documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|err| {
            log::warn!("Failed to load config: {:#}. Using defaults.", err);
            Config::default()
        }),
    };

    if let Some(color) = cli.color {
        config.drawing.default_color = ColorSpec::Name(color.to_hex());
    }
    if let Some(thickness) = cli.thickness {
        config.drawing.default_thickness = thickness;
    }

    // Check for Wayland environment
    if std::env::var("WAYLAND_DISPLAY").is_err() {
        log::error!("WAYLAND_DISPLAY not set - this application requires Wayland.");
        log::error!("Please run inside a Wayland session (GNOME, KDE Plasma, Sway, etc.).");
        return Err(anyhow::anyhow!("Wayland environment required"));
    }

    log::info!("Starting sketchpad...");
    log::info!("Controls:");
    log::info!("  - Pick a tool in the toolbar, then press and drag on the canvas");
    log::info!("  - Color: opens the palette dialog (Escape cancels)");
    log::info!("  - Thickness: click the field and type a positive number");
    log::info!("  - Undo: removes the most recent item");
    log::info!("");

    backend::run_wayland(config)?;

    log::info!("Sketchpad closed.");
    Ok(())
}
