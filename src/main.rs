// Word of the Day - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading and logging initialisation
// 3. Store and session restore
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::ui::...` etc.
pub use wotd::app;
pub use wotd::platform;
pub use wotd::ui;
pub use wotd::util;

use clap::Parser;
use std::path::PathBuf;

/// Word of the Day - keep track of the word of each day and who sent it in.
#[derive(Parser, Debug)]
#[command(name = "wotd", version, about)]
struct Cli {
    /// CSV store to open (overrides [store] path in config.toml).
    store: Option<PathBuf>,

    /// Directory containing config.toml (defaults to the platform config dir).
    #[arg(short = 'c', long = "config-dir")]
    config_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let platform_paths = platform::config::PlatformPaths::resolve();
    let config_dir = cli
        .config_dir
        .clone()
        .unwrap_or_else(|| platform_paths.config_dir.clone());

    // Config is read before logging starts so its level and file apply;
    // its warnings are replayed once the subscriber is up.
    let (config, config_warnings) = platform::config::load_config(&config_dir);

    util::logging::init(
        cli.debug,
        config.log_level.as_deref(),
        config.log_file.as_deref(),
    );

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config_dir = %config_dir.display(),
        "Word of the Day starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    // Store path: CLI > config.toml > platform data dir.
    let store_path = cli
        .store
        .clone()
        .or_else(|| config.store_path.clone())
        .unwrap_or_else(|| platform_paths.default_store_path());

    let mut state = app::state::AppState::new(config, store_path, cli.debug);
    state.session_path = Some(app::session::session_path(&platform_paths.data_dir));
    for warning in config_warnings {
        state.push_warning(warning);
    }

    if let Err(e) = state.open() {
        tracing::error!(error = %e, "Store could not be loaded; writes are disabled");
    }
    state.load_session();

    tracing::info!(records = state.table.len(), "Ready to launch GUI");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |_cc| Ok(Box::new(gui::WotdApp::new(state)))),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch Word of the Day: {e}");
        std::process::exit(1);
    }
}
