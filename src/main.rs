// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, Subcommand};
use filtercam::config::{self, Config};
use filtercam::i18n;
use filtercam::terminal::{self, HandOff};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "filtercam")]
#[command(about = "Camera screen with a filter strip, in the terminal")]
#[command(version)]
#[command(subcommand_required = false)]
struct Cli {
    /// Simulate a device with only a front camera
    #[arg(long, global = true)]
    front_only: bool,

    /// Simulate cameras without a flash
    #[arg(long, global = true)]
    no_flash: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the filter presets
    Presets,

    /// Take or pick one photo and write it to a file
    Capture {
        /// Output file path; the extension picks the format
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // The terminal screen owns stdout, so it logs to a file
    let log_target = match cli.command {
        Some(Commands::Presets) => None,
        _ => log_file(),
    };
    init_logging(log_target);

    // Get the system's preferred languages.
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();
    i18n::init(&requested_languages);

    match cli.command {
        Some(Commands::Presets) => cli::list_presets(),
        Some(Commands::Capture { output }) => {
            let config = load_config(cli.front_only, cli.no_flash)?;
            cli::capture(config, output)
        }
        None => {
            let config = load_config(cli.front_only, cli.no_flash)?;
            terminal::run(config, HandOff::Editor)?;
            Ok(())
        }
    }
}

/// Initialize logging
///
/// Set RUST_LOG to control the level, e.g. RUST_LOG=debug or RUST_LOG=filtercam=info.
fn init_logging(file: Option<File>) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true);

    match file {
        Some(file) => builder.with_ansi(false).with_writer(Mutex::new(file)).init(),
        None => builder.init(),
    }
}

fn log_file() -> Option<File> {
    let dir = dirs::cache_dir()?.join("filtercam");
    std::fs::create_dir_all(&dir).ok()?;
    File::create(dir.join("filtercam.log")).ok()
}

fn load_config(front_only: bool, no_flash: bool) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = config::load()?;
    // Write the defaults once so there is a file to edit
    if config::default_config_path().is_some_and(|path| !path.exists())
        && let Err(e) = config::save(&config)
    {
        warn!(error = %e, "Could not write default config");
    }
    if front_only {
        config.virtual_camera.front_camera = true;
        config.virtual_camera.back_camera = false;
    }
    if no_flash {
        config.virtual_camera.flash_on_front = false;
        config.virtual_camera.flash_on_back = false;
    }
    Ok(config)
}
