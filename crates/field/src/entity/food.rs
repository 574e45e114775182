//! Food pellet.

use super::body::{Body, EntityData, EntityId};
use crate::color::Color;
use glam::DVec2;

/// A static food pellet that player cells can consume.
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    data: EntityData,
}

impl Food {
    pub(crate) fn new(id: EntityId, center: DVec2, radius: f64, color: Color) -> Self {
        Self {
            data: EntityData::new(id, center, radius, color),
        }
    }
}

impl Body for Food {
    fn data(&self) -> &EntityData {
        &self.data
    }
}
