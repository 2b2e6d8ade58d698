use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::info;
use std::path::PathBuf;

use lyricpane::app;
use lyricpane::lyrics::Lyrics;
use lyricpane::utils::config::Config;

/// LyricPane - a frameless, always-on-top lyrics pane
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// LRC lyrics file to display
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Window width
    #[arg(long)]
    width: Option<u32>,

    /// Window height
    #[arg(long)]
    height: Option<u32>,

    /// Border color as hex, e.g. "#1E1E24"
    #[arg(long, value_name = "COLOR")]
    border_color: Option<String>,

    /// Do not keep the window above others
    #[arg(long)]
    no_always_on_top: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::load()?;

    // Initialize logging
    let log_level = if args.debug {
        "debug".to_string()
    } else {
        config.general.log_level.clone()
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level.as_str()))
        .format_timestamp_millis()
        .init();

    info!("Starting LyricPane v{}", env!("CARGO_PKG_VERSION"));

    // Command line overrides
    if let Some(width) = args.width {
        config.window.width = width;
    }
    if let Some(height) = args.height {
        config.window.height = height;
    }
    if let Some(color) = args.border_color {
        config.chrome.border_color = Some(color);
    }
    if args.no_always_on_top {
        config.window.always_on_top = false;
    }
    config.validate()?;

    let lyrics = match &args.file {
        Some(path) => {
            info!("Loading lyrics: {:?}", path);
            Some(Lyrics::load(path)?)
        }
        None => None,
    };

    app::run(config, lyrics)?;

    Ok(())
}
