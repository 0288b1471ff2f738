use std::f64::consts::PI;
use std::fs;
use std::path::Path;

use anyhow::{ensure, Result};
use log::{info, warn};
use serde::Deserialize;

use crate::color::Rgba;
use crate::motion::MotionSettings;
use crate::player::Player;
use crate::render::RenderSettings;
use crate::vector::Vector2;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub screen: ScreenConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub minimap: MinimapConfig,
    #[serde(default)]
    pub scene: SceneConfig,
    #[serde(default)]
    pub colors: ColorsConfig,
}

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_window_title")]
    pub title: String,
    #[serde(default = "default_window_width")]
    pub width: i32,
    #[serde(default = "default_window_height")]
    pub height: i32,
}

/// Virtual resolution of the first-person view
#[derive(Debug, Deserialize)]
pub struct ScreenConfig {
    #[serde(default = "default_columns")]
    pub columns: u32,
    #[serde(default = "default_rows")]
    pub rows: u32,
}

#[derive(Debug, Deserialize)]
pub struct CameraConfig {
    #[serde(default = "default_fov")]
    pub fov: f64,
    #[serde(default = "default_near_clipping_plane")]
    pub near_clipping_plane: f64,
    #[serde(default = "default_brightness")]
    pub brightness: f64,
}

#[derive(Debug, Deserialize)]
pub struct PlayerConfig {
    #[serde(default = "default_player_x")]
    pub x: f64,
    #[serde(default = "default_player_y")]
    pub y: f64,
    #[serde(default = "default_player_direction")]
    pub direction: f64,
    #[serde(default = "default_player_speed")]
    pub speed: f64,
    #[serde(default = "default_player_size")]
    pub size: f64,
    #[serde(default = "default_turn_step")]
    pub turn_step: f64,
}

#[derive(Debug, Deserialize)]
pub struct MinimapConfig {
    #[serde(default = "default_minimap_scale")]
    pub scale: f64,
    #[serde(default = "default_minimap_line_width")]
    pub line_width: f64,
    #[serde(default = "default_minimap_player_radius")]
    pub player_radius: f64,
}

#[derive(Debug, Deserialize)]
pub struct SceneConfig {
    #[serde(default = "default_scene_path")]
    pub path: String,
}

#[derive(Debug, Deserialize)]
pub struct ColorsConfig {
    #[serde(default = "default_background")]
    pub background: Rgba,
    #[serde(default = "default_ceiling")]
    pub ceiling: Rgba,
    #[serde(default = "default_background")]
    pub minimap_background: Rgba,
    #[serde(default = "default_grid_lines")]
    pub grid_lines: Rgba,
    #[serde(default = "default_marker")]
    pub player: Rgba,
    #[serde(default = "default_marker")]
    pub fov: Rgba,
}

// Default values
fn default_window_title() -> String { "gridcaster".to_string() }
fn default_window_width() -> i32 { 800 }
fn default_window_height() -> i32 { 600 }
fn default_columns() -> u32 { 16 * 10 }
fn default_rows() -> u32 { 9 * 10 }
fn default_fov() -> f64 { PI * 0.5 }
fn default_near_clipping_plane() -> f64 { 0.25 }
fn default_brightness() -> f64 { 4.0 }
fn default_player_x() -> f64 { 3.5 }
fn default_player_y() -> f64 { 3.7 }
fn default_player_direction() -> f64 { PI * 1.5 }
fn default_player_speed() -> f64 { 3.1 }
fn default_player_size() -> f64 { 0.3 }
fn default_turn_step() -> f64 { PI * 0.02 }
fn default_minimap_scale() -> f64 { 0.3 }
fn default_minimap_line_width() -> f64 { 0.05 }
fn default_minimap_player_radius() -> f64 { 0.07 }
fn default_scene_path() -> String { "assets/scene.json".to_string() }
fn default_background() -> Rgba { Rgba::from_bytes(0x18, 0x18, 0x18, 0xff) }
fn default_ceiling() -> Rgba { Rgba::from_bytes(0x2e, 0x00, 0x00, 0xff) }
fn default_grid_lines() -> Rgba { Rgba::from_bytes(0x50, 0x50, 0x50, 0xff) }
fn default_marker() -> Rgba { Rgba::MAGENTA }

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_window_title(),
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            rows: default_rows(),
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: default_fov(),
            near_clipping_plane: default_near_clipping_plane(),
            brightness: default_brightness(),
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            x: default_player_x(),
            y: default_player_y(),
            direction: default_player_direction(),
            speed: default_player_speed(),
            size: default_player_size(),
            turn_step: default_turn_step(),
        }
    }
}

impl Default for MinimapConfig {
    fn default() -> Self {
        Self {
            scale: default_minimap_scale(),
            line_width: default_minimap_line_width(),
            player_radius: default_minimap_player_radius(),
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            path: default_scene_path(),
        }
    }
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
            ceiling: default_ceiling(),
            minimap_background: default_background(),
            grid_lines: default_grid_lines(),
            player: default_marker(),
            fov: default_marker(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            screen: ScreenConfig::default(),
            camera: CameraConfig::default(),
            player: PlayerConfig::default(),
            minimap: MinimapConfig::default(),
            scene: SceneConfig::default(),
            colors: ColorsConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, or use defaults if it is missing or malformed
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(config) => {
                    info!("Loaded configuration from {}", path.display());
                    config
                }
                Err(e) => {
                    warn!("Failed to parse {}: {}", path.display(), e);
                    warn!("Using default configuration");
                    Config::default()
                }
            },
            Err(_) => {
                info!("No {} found, using default configuration", path.display());
                Config::default()
            }
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Reject settings the renderer or collision test cannot work with
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.screen.columns > 0 && self.screen.rows > 0,
            "screen resolution must be non-zero, got {}x{}",
            self.screen.columns,
            self.screen.rows
        );
        ensure!(
            self.camera.fov > 0.0 && self.camera.fov < PI,
            "camera fov must be within (0, pi), got {}",
            self.camera.fov
        );
        ensure!(
            self.camera.near_clipping_plane > 0.0,
            "near clipping plane must be positive, got {}",
            self.camera.near_clipping_plane
        );
        ensure!(
            self.player.size > 0.0 && self.player.size < 0.5,
            "player size must be within (0, 0.5), got {}",
            self.player.size
        );
        ensure!(
            self.window.width > 0 && self.window.height > 0,
            "window size must be positive, got {}x{}",
            self.window.width,
            self.window.height
        );
        Ok(())
    }

    pub fn spawn_player(&self) -> Player {
        Player::new(
            Vector2::new(self.player.x, self.player.y),
            self.player.direction,
        )
    }

    pub fn motion_settings(&self) -> MotionSettings {
        MotionSettings {
            speed: self.player.speed,
            size: self.player.size,
            turn_step: self.player.turn_step,
        }
    }

    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            columns: self.screen.columns,
            rows: self.screen.rows,
            fov: self.camera.fov,
            near_clipping_plane: self.camera.near_clipping_plane,
            brightness: self.camera.brightness,
            minimap_scale: self.minimap.scale,
            minimap_origin: Vector2::zero(),
            minimap_line_width: self.minimap.line_width,
            minimap_player_radius: self.minimap.player_radius,
            background: self.colors.background,
            ceiling: self.colors.ceiling,
            minimap_background: self.colors.minimap_background,
            grid_lines: self.colors.grid_lines,
            player_marker: self.colors.player,
            fov_lines: self.colors.fov,
        }
    }
}
