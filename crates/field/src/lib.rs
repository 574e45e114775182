//! Blob arena game field.
//!
//! The authoritative spatial model of an arena: collision-free spawn placement,
//! proximity queries for consumption checks, and player cell splitting and
//! removal. The `sim` module drives a field headlessly with bot players.

pub mod color;
pub mod config;
pub mod entity;
pub mod error;
pub mod field;
pub mod placement;
pub mod player;
pub mod sim;
pub mod spatial;

// Re-export commonly used types
pub use color::Color;
pub use config::{Config, FieldConfig, SimConfig};
pub use entity::{Body, Bush, Entity, EntityId, EntityKind, Food, PlayerCell};
pub use error::FieldError;
pub use field::{Blueprint, FieldCounts, GameField};
pub use player::Player;
