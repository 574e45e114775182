//! Field and simulation configuration.

use crate::color::{self, Color};
use crate::entity::EntityKind;
use crate::error::FieldError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub field: FieldConfig,
    #[serde(default)]
    pub sim: SimConfig,
}

impl Config {
    /// Load configuration from `path`, writing the defaults there if it is missing.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let config: Self = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str(&contents)?
        } else {
            info!("No {} found, creating default config", path.display());
            let default_config = Self::default();
            std::fs::write(path, toml::to_string_pretty(&default_config)?)?;
            default_config
        };
        config.field.validate()?;
        config.sim.validate()?;
        Ok(config)
    }
}

/// Everything the game field needs to know at construction.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FieldConfig {
    #[serde(default)]
    pub border: BorderConfig,
    #[serde(default)]
    pub placement: PlacementConfig,
    #[serde(default)]
    pub cell: CellConfig,
    #[serde(default)]
    pub food: FoodConfig,
    #[serde(default)]
    pub bush: BushConfig,
}

impl FieldConfig {
    /// Inclusive radius range allowed for an entity kind.
    #[inline]
    pub fn radius_bounds(&self, kind: EntityKind) -> (f64, f64) {
        match kind {
            EntityKind::Cell => (self.cell.min_radius, self.cell.max_radius),
            EntityKind::Food => (self.food.radius, self.food.radius),
            EntityKind::Bush => (self.bush.min_radius, self.bush.max_radius),
        }
    }

    /// Reject configurations the field cannot honor.
    pub fn validate(&self) -> Result<(), FieldError> {
        let invalid = |msg: &str| Err(FieldError::InvalidConfig(msg.to_string()));

        if !(self.border.width > 0.0 && self.border.height > 0.0) {
            return invalid("border width and height must be positive");
        }
        if !(self.placement.safety_distance >= 0.0) {
            return invalid("placement.safety_distance must not be negative");
        }
        if self.placement.max_attempts == 0 {
            return invalid("placement.max_attempts must be at least 1");
        }
        let cell = &self.cell;
        if !(cell.min_radius > 0.0
            && cell.min_radius <= cell.start_radius
            && cell.start_radius <= cell.max_radius)
        {
            return invalid("cell radii must satisfy 0 < min_radius <= start_radius <= max_radius");
        }
        if !(self.food.radius > 0.0) {
            return invalid("food.radius must be positive");
        }
        if !(self.bush.min_radius > 0.0 && self.bush.min_radius <= self.bush.max_radius) {
            return invalid("bush radii must satisfy 0 < min_radius <= max_radius");
        }
        if cell.palette.is_empty() || self.food.palette.is_empty() {
            return invalid("color palettes must not be empty");
        }
        Ok(())
    }
}

/// Field bounds.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BorderConfig {
    #[serde(default = "default_border_size")]
    pub width: f64,
    #[serde(default = "default_border_size")]
    pub height: f64,
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self {
            width: default_border_size(),
            height: default_border_size(),
        }
    }
}

fn default_border_size() -> f64 {
    500.0
}

/// Spawn placement policy.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlacementConfig {
    /// No entity may lie within this distance of a fresh spawn point.
    #[serde(default = "default_safety_distance")]
    pub safety_distance: f64,
    /// Samples tried before giving up with a saturated field.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            safety_distance: default_safety_distance(),
            max_attempts: default_max_attempts(),
        }
    }
}

fn default_safety_distance() -> f64 {
    10.0
}
fn default_max_attempts() -> u32 {
    1000
}

/// Player cell configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CellConfig {
    #[serde(default = "default_cell_min_radius")]
    pub min_radius: f64,
    #[serde(default = "default_cell_max_radius")]
    pub max_radius: f64,
    /// Radius of a freshly spawned cell.
    #[serde(default = "default_cell_start_radius")]
    pub start_radius: f64,
    #[serde(default = "color::cell_palette")]
    pub palette: Vec<Color>,
}

impl Default for CellConfig {
    fn default() -> Self {
        Self {
            min_radius: default_cell_min_radius(),
            max_radius: default_cell_max_radius(),
            start_radius: default_cell_start_radius(),
            palette: color::cell_palette(),
        }
    }
}

fn default_cell_min_radius() -> f64 {
    2.5
}
fn default_cell_max_radius() -> f64 {
    60.0
}
fn default_cell_start_radius() -> f64 {
    10.0
}

/// Food configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FoodConfig {
    #[serde(default = "default_food_radius")]
    pub radius: f64,
    #[serde(default = "color::food_palette")]
    pub palette: Vec<Color>,
}

impl Default for FoodConfig {
    fn default() -> Self {
        Self {
            radius: default_food_radius(),
            palette: color::food_palette(),
        }
    }
}

fn default_food_radius() -> f64 {
    2.0
}

/// Bush configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BushConfig {
    #[serde(default = "default_bush_min_radius")]
    pub min_radius: f64,
    #[serde(default = "default_bush_max_radius")]
    pub max_radius: f64,
    #[serde(default = "default_bush_color")]
    pub color: Color,
}

impl Default for BushConfig {
    fn default() -> Self {
        Self {
            min_radius: default_bush_min_radius(),
            max_radius: default_bush_max_radius(),
            color: default_bush_color(),
        }
    }
}

fn default_bush_min_radius() -> f64 {
    8.0
}
fn default_bush_max_radius() -> f64 {
    20.0
}
fn default_bush_color() -> Color {
    color::BUSH_COLOR
}

/// Headless simulation driver settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimConfig {
    /// Tick interval in milliseconds.
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,
    /// Number of ticks to run (0 = until interrupted).
    #[serde(default)]
    pub ticks: u64,
    /// Food count maintained on the field.
    #[serde(default = "default_food_target")]
    pub food_target: usize,
    /// Bush count maintained on the field.
    #[serde(default = "default_bush_target")]
    pub bush_target: usize,
    /// Number of bot players.
    #[serde(default = "default_bots")]
    pub bots: usize,
    /// Ticks between bot split requests.
    #[serde(default = "default_split_every")]
    pub split_every_ticks: u64,
    /// Children produced by each bot split.
    #[serde(default = "default_split_children")]
    pub split_children: usize,
    /// Per-tick chance that a bot gets eliminated.
    #[serde(default = "default_elimination_chance")]
    pub elimination_chance: f64,
    /// Ticks between stats log lines.
    #[serde(default = "default_stats_every")]
    pub stats_every_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval(),
            ticks: 0,
            food_target: default_food_target(),
            bush_target: default_bush_target(),
            bots: default_bots(),
            split_every_ticks: default_split_every(),
            split_children: default_split_children(),
            elimination_chance: default_elimination_chance(),
            stats_every_ticks: default_stats_every(),
        }
    }
}

impl SimConfig {
    /// Reject driver settings the bots cannot act on.
    pub fn validate(&self) -> Result<(), FieldError> {
        if !(0.0..=1.0).contains(&self.elimination_chance) {
            return Err(FieldError::InvalidConfig(
                "sim.elimination_chance must be within [0, 1]".to_string(),
            ));
        }
        if self.split_children == 0 {
            return Err(FieldError::InvalidConfig(
                "sim.split_children must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_tick_interval() -> u64 {
    40
}
fn default_food_target() -> usize {
    150
}
fn default_bush_target() -> usize {
    10
}
fn default_bots() -> usize {
    4
}
fn default_split_every() -> u64 {
    50
}
fn default_split_children() -> usize {
    2
}
fn default_elimination_chance() -> f64 {
    0.005
}
fn default_stats_every() -> u64 {
    25
}
