use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Native dialogs used before the event loop starts
// ---------------------------------------------------------------------------

/// Ask for the player data file when none was configured.
pub fn pick_player_file() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Open player auction data")
        .add_filter("CSV", &["csv"])
        .pick_file()
}

/// Blocking error box for a data file that could not be loaded.
pub fn show_load_error(path: &Path, error: &dyn std::error::Error) {
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title("Cannot load player data")
        .set_description(format!("{}\n\n{error}", path.display()))
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}
