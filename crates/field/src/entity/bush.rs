//! Bush obstacle.

use super::body::{Body, EntityData, EntityId};
use crate::color::Color;
use glam::DVec2;

/// A static obstacle that cells can hide under.
#[derive(Debug, Clone, PartialEq)]
pub struct Bush {
    data: EntityData,
}

impl Bush {
    pub(crate) fn new(id: EntityId, center: DVec2, radius: f64, color: Color) -> Self {
        Self {
            data: EntityData::new(id, center, radius, color),
        }
    }
}

impl Body for Bush {
    fn data(&self) -> &EntityData {
        &self.data
    }
}
