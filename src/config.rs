//! Animation and pipeline settings.
//!
//! All fields use `#[serde(default)]` so a partial TOML file (e.g. only
//! overriding `duration`) works correctly; missing files fall back to the
//! defaults entirely.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Animation length in seconds
    pub duration: f32,
    /// Frames rendered per second of animation
    pub frame_rate: f32,
    pub image_width: u32,
    pub image_height: u32,
    /// POV-Ray render quality, 0 (fastest) to 11 (full)
    pub quality: u8,
    /// Antialias threshold; 0 disables antialiasing
    pub antialias: f32,
    pub povray_binary: String,
    pub ffmpeg_binary: String,
    /// Directory receiving emitted `.pov` files, frames and encoded video
    pub output_dir: PathBuf,
    /// Basename for emitted frame files
    pub output_prefix: String,
    /// Directory holding bundled assets such as `.pdb` molecule files
    pub asset_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            duration: 4.0,
            frame_rate: 20.0,
            image_width: 800,
            image_height: 600,
            quality: 9,
            antialias: 0.3,
            povray_binary: "povray".to_string(),
            ffmpeg_binary: "ffmpeg".to_string(),
            output_dir: PathBuf::from("output"),
            output_prefix: "frame".to_string(),
            asset_dir: PathBuf::from("assets"),
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("parsing settings from {}", path.display()))
    }

    /// Total frame count; at least one frame even for zero-length animations
    pub fn n_frames(&self) -> u32 {
        ((self.duration * self.frame_rate).round() as u32).max(1)
    }

    /// Wall-clock length of a single frame in seconds
    pub fn frame_time(&self) -> f32 {
        1.0 / self.frame_rate
    }

    /// Path of a bundled PDB file under the asset directory
    pub fn pdb_path(&self, name: &str) -> PathBuf {
        self.asset_dir.join("pdb").join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trips_through_toml() {
        let settings = Settings::default();
        let toml_str = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&toml_str).unwrap();
        assert_eq!(settings, parsed);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let parsed: Settings = toml::from_str("duration = 2.0\nframe_rate = 40.0").unwrap();
        assert_eq!(parsed.duration, 2.0);
        assert_eq!(parsed.frame_rate, 40.0);
        assert_eq!(parsed.image_width, Settings::default().image_width);
        assert_eq!(parsed.povray_binary, "povray");
    }

    #[test]
    fn test_n_frames_from_duration_and_rate() {
        let settings = Settings {
            duration: 4.0,
            frame_rate: 20.0,
            ..Default::default()
        };
        assert_eq!(settings.n_frames(), 80);
    }

    #[test]
    fn test_n_frames_never_zero() {
        let settings = Settings {
            duration: 0.0,
            ..Default::default()
        };
        assert_eq!(settings.n_frames(), 1);
    }

    #[test]
    fn test_bundled_settings_file_parses() {
        let settings = Settings::load(Path::new("assets/default.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_pdb_path_joins_asset_dir() {
        let settings = Settings::default();
        assert_eq!(settings.pdb_path("ethanol.pdb"), PathBuf::from("assets/pdb/ethanol.pdb"));
    }
}
