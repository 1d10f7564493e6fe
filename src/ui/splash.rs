use std::path::Path;
use std::time::{Duration, Instant};

use eframe::egui::{self, Align2, Color32, FontId, Ui};

use crate::config::Config;

const MESSAGE: &str = "IPL Auction Player Search\nLoading Data...";
const IMAGE_SIZE: egui::Vec2 = egui::vec2(500.0, 300.0);

/// Static image shown for a fixed interval before the search view.
pub struct Splash {
    image_uri: Option<String>,
    duration: Duration,
    started: Instant,
}

impl Splash {
    /// `None` when the configured duration is zero.
    pub fn from_config(config: &Config) -> Option<Self> {
        if config.splash_duration.is_zero() {
            return None;
        }
        Some(Self {
            image_uri: config.splash_image.as_deref().and_then(image_uri),
            duration: config.splash_duration,
            started: Instant::now(),
        })
    }

    /// Time left before the search view appears, or `None` once it is over.
    pub fn remaining(&self) -> Option<Duration> {
        remaining_at(self.started, self.duration, Instant::now())
    }

    pub fn show(&self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(Color32::BLACK))
            .show(ctx, |ui: &mut Ui| {
                let rect = ui.max_rect();
                if let Some(uri) = &self.image_uri {
                    let image_rect = egui::Rect::from_center_size(rect.center(), IMAGE_SIZE);
                    egui::Image::new(uri.as_str())
                        .fit_to_exact_size(IMAGE_SIZE)
                        .paint_at(ui, image_rect);
                }
                ui.painter().text(
                    rect.center_bottom() - egui::vec2(0.0, 16.0),
                    Align2::CENTER_BOTTOM,
                    MESSAGE,
                    FontId::proportional(18.0),
                    Color32::WHITE,
                );
            });
    }
}

fn remaining_at(started: Instant, duration: Duration, now: Instant) -> Option<Duration> {
    let elapsed = now.saturating_duration_since(started);
    duration.checked_sub(elapsed).filter(|d| !d.is_zero())
}

/// `file://` URI for the egui image loaders, or `None` (with a warning)
/// when the file is missing.
fn image_uri(path: &Path) -> Option<String> {
    if !path.is_file() {
        log::warn!("Splash image {} not found; showing text only", path.display());
        return None;
    }
    let path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    Some(format!("file://{}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_counts_down_to_none() {
        let start = Instant::now();
        let duration = Duration::from_millis(2000);

        assert_eq!(remaining_at(start, duration, start), Some(duration));
        assert_eq!(
            remaining_at(start, duration, start + Duration::from_millis(500)),
            Some(Duration::from_millis(1500))
        );
        assert_eq!(remaining_at(start, duration, start + duration), None);
        assert_eq!(
            remaining_at(start, duration, start + Duration::from_secs(10)),
            None
        );
    }

    #[test]
    fn zero_duration_disables_splash() {
        let config = Config {
            csv_path: None,
            splash_image: None,
            splash_duration: Duration::ZERO,
            window_title: String::new(),
        };
        assert!(Splash::from_config(&config).is_none());
    }

    #[test]
    fn missing_image_falls_back_to_text() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(image_uri(&dir.path().join("missing.jpg")), None);

        let path = dir.path().join("splash.jpg");
        std::fs::write(&path, b"not really a jpeg").unwrap();
        let uri = image_uri(&path).unwrap();
        assert!(uri.starts_with("file://"));
        assert!(uri.ends_with("splash.jpg"));
    }
}
