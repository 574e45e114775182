//! Field error types.

use crate::entity::EntityKind;
use thiserror::Error;

/// Errors that can occur while mutating the game field.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FieldError {
    #[error("Field saturated: no free spot found after {attempts} attempts")]
    Saturated { attempts: u32 },

    #[error("Center ({x:.2}, {y:.2}) lies outside the field")]
    OutOfBounds { x: f64, y: f64 },

    #[error("Invalid {kind} radius {radius} (expected {min}..={max})")]
    InvalidRadius {
        kind: EntityKind,
        radius: f64,
        min: f64,
        max: f64,
    },

    #[error("Spot ({x:.2}, {y:.2}) is occupied")]
    Occupied { x: f64, y: f64 },

    #[error("Invalid split count: {0}")]
    InvalidSplitCount(usize),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
