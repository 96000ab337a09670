//! Palette configuration resource.
//!
//! Manages the palette tunables and demo window settings loaded from an INI
//! configuration file. Provides defaults for safe startup and methods to
//! load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [palette]
//! swipe_sensitivity = 0.3
//! item_spacing = 0.2
//! item_depth = 0.1
//! fade_duration = 0.3
//! fade_stagger = 0.04
//! hide_delay = 1.0
//! growth_step = 0.001
//! growth_interval = 0.01
//! highlight_factor = 0.8
//! max_placement_scale = 3.0
//! prototypes = ./assets/prototypes.json
//!
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 90
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::components::palette::PaletteSettings;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 90;
const DEFAULT_PROTOTYPES_PATH: &str = "./assets/prototypes.json";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Palette configuration resource.
///
/// Stores the tunables handed to each palette (as [`PaletteSettings`]) and
/// the demo window options.
#[derive(Resource, Debug, Clone)]
pub struct PaletteConfig {
    /// Widget tunables.
    pub palette: PaletteSettings,
    /// JSON prototype catalog.
    pub prototypes_path: PathBuf,
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn read_f32(config: &Ini, section: &str, key: &str) -> Option<f32> {
    config
        .getfloat(section, key)
        .ok()
        .flatten()
        .map(|v| v as f32)
}

impl PaletteConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            palette: PaletteSettings::default(),
            prototypes_path: PathBuf::from(DEFAULT_PROTOTYPES_PATH),
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config);

        info!(
            "Loaded config: sensitivity={}, spacing={}, hide_delay={}, window {}x{} @ {} fps",
            self.palette.swipe_sensitivity,
            self.palette.item_spacing,
            self.palette.hide_delay,
            self.window_width,
            self.window_height,
            self.target_fps
        );

        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        // [palette] section
        let p = &mut self.palette;
        if let Some(v) = read_f32(config, "palette", "swipe_sensitivity") {
            p.swipe_sensitivity = v;
        }
        if let Some(v) = read_f32(config, "palette", "item_spacing") {
            p.item_spacing = v;
        }
        if let Some(v) = read_f32(config, "palette", "item_depth") {
            p.item_depth = v;
        }
        if let Some(v) = read_f32(config, "palette", "fade_duration") {
            p.fade_duration = v;
        }
        if let Some(v) = read_f32(config, "palette", "fade_stagger") {
            p.fade_stagger = v;
        }
        if let Some(v) = read_f32(config, "palette", "hide_delay") {
            p.hide_delay = v;
        }
        if let Some(v) = read_f32(config, "palette", "growth_step") {
            p.growth_step = v;
        }
        if let Some(v) = read_f32(config, "palette", "growth_interval") {
            p.growth_interval = v;
        }
        if let Some(v) = read_f32(config, "palette", "highlight_factor") {
            p.highlight_factor = v;
        }
        if let Some(v) = read_f32(config, "palette", "max_placement_scale") {
            p.max_placement_scale = Some(v);
        }
        *p = p.sanitized();
        if let Some(path) = config.get("palette", "prototypes") {
            self.prototypes_path = PathBuf::from(path);
        }

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();
        let p = &self.palette;

        // [palette] section
        config.set("palette", "swipe_sensitivity", Some(p.swipe_sensitivity.to_string()));
        config.set("palette", "item_spacing", Some(p.item_spacing.to_string()));
        config.set("palette", "item_depth", Some(p.item_depth.to_string()));
        config.set("palette", "fade_duration", Some(p.fade_duration.to_string()));
        config.set("palette", "fade_stagger", Some(p.fade_stagger.to_string()));
        config.set("palette", "hide_delay", Some(p.hide_delay.to_string()));
        config.set("palette", "growth_step", Some(p.growth_step.to_string()));
        config.set("palette", "growth_interval", Some(p.growth_interval.to_string()));
        config.set("palette", "highlight_factor", Some(p.highlight_factor.to_string()));
        if let Some(max) = p.max_placement_scale {
            config.set("palette", "max_placement_scale", Some(max.to_string()));
        }
        config.set(
            "palette",
            "prototypes",
            Some(self.prototypes_path.display().to_string()),
        );

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Tunables for a new palette.
    pub fn settings(&self) -> PaletteSettings {
        self.palette.sanitized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_defaults() {
        let c = PaletteConfig::new();
        assert!(approx_eq(c.palette.swipe_sensitivity, 0.3));
        assert!(approx_eq(c.palette.hide_delay, 1.0));
        assert!(c.palette.max_placement_scale.is_none());
        assert_eq!(c.window_width, 1280);
    }

    #[test]
    fn test_load_from_str_overrides_present_keys() {
        let mut c = PaletteConfig::new();
        c.load_from_str(
            "[palette]\nswipe_sensitivity = 0.5\nhide_delay = 2\nprototypes = /tmp/p.json\n[window]\nwidth = 800\n",
        )
        .unwrap();
        assert!(approx_eq(c.palette.swipe_sensitivity, 0.5));
        assert!(approx_eq(c.palette.hide_delay, 2.0));
        assert!(approx_eq(c.palette.item_spacing, 0.2));
        assert_eq!(c.prototypes_path, PathBuf::from("/tmp/p.json"));
        assert_eq!(c.window_width, 800);
        assert_eq!(c.window_height, 720);
    }

    #[test]
    fn test_sensitivity_is_clamped() {
        let mut c = PaletteConfig::new();
        c.load_from_str("[palette]\nswipe_sensitivity = 7.5\n").unwrap();
        assert!(approx_eq(c.settings().swipe_sensitivity, 1.0));
    }

    #[test]
    fn test_max_placement_scale() {
        let mut c = PaletteConfig::new();
        c.load_from_str("[palette]\nmax_placement_scale = 2.5\n").unwrap();
        assert_eq!(c.palette.max_placement_scale, Some(2.5));
    }

    #[test]
    fn test_missing_file_is_error() {
        let mut c = PaletteConfig::with_path("/definitely/not/here.ini");
        assert!(c.load_from_file().is_err());
        assert!(approx_eq(c.palette.swipe_sensitivity, 0.3));
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!(
            "objectpalette_config_{}.ini",
            std::process::id()
        ));
        let mut c = PaletteConfig::with_path(&path);
        c.palette.swipe_sensitivity = 0.75;
        c.palette.max_placement_scale = Some(4.0);
        c.target_fps = 72;
        c.save_to_file().unwrap();

        let mut loaded = PaletteConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        let _ = std::fs::remove_file(&path);

        assert!(approx_eq(loaded.palette.swipe_sensitivity, 0.75));
        assert_eq!(loaded.palette.max_placement_scale, Some(4.0));
        assert_eq!(loaded.target_fps, 72);
    }
}
