mod app;
mod config;
mod data;
mod state;
mod ui;

use anyhow::{anyhow, Context};
use app::PlayerSearchApp;
use config::Config;
use eframe::egui;
use state::AppState;
use ui::splash::Splash;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::load()?;

    let csv_path = match config.csv_path.clone() {
        Some(path) => path,
        None => ui::dialogs::pick_player_file().context("no player data file selected")?,
    };

    let table = match data::loader::load_csv(&csv_path) {
        Ok(table) => table,
        Err(e) => {
            log::error!("Failed to load {}: {e}", csv_path.display());
            ui::dialogs::show_load_error(&csv_path, &e);
            return Err(e).with_context(|| format!("loading {}", csv_path.display()));
        }
    };
    log::info!(
        "Loaded {} rows from {} with columns {:?}",
        table.len(),
        csv_path.display(),
        table.column_names
    );

    let title = config.window_title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([500.0, 400.0])
            .with_min_inner_size([360.0, 280.0])
            .with_title(title.as_str()),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            // Install image loaders so egui can render the splash image.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            let splash = Splash::from_config(&config);
            Ok(Box::new(PlayerSearchApp::new(AppState::new(table), splash)))
        }),
    )
    .map_err(|e| anyhow!("running the UI: {e}"))
}
