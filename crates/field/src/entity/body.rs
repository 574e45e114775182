//! Common entity data and identity.

use crate::color::Color;
use glam::DVec2;
use std::fmt;

/// Field-assigned identity of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out entity ids in increasing order, starting at 1.
///
/// Ids are unique for the field's lifetime as long as fewer than `u64::MAX`
/// have been handed out. Past that the counter wraps back to 1 without
/// checking which ids are still live.
#[derive(Debug)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Get the next entity id.
    pub fn next_id(&mut self) -> EntityId {
        let id = self.next;
        self.next = self.next.wrapping_add(1);
        if self.next == 0 {
            self.next = 1; // Skip 0
        }
        EntityId(id)
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Entity variant tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Cell,
    Food,
    Bush,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityKind::Cell => "cell",
            EntityKind::Food => "food",
            EntityKind::Bush => "bush",
        })
    }
}

/// Data shared by every entity variant.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityData {
    pub id: EntityId,
    /// Center in field coordinates.
    pub center: DVec2,
    pub radius: f64,
    pub color: Color,
}

impl EntityData {
    pub(crate) fn new(id: EntityId, center: DVec2, radius: f64, color: Color) -> Self {
        Self {
            id,
            center,
            radius,
            color,
        }
    }

    #[inline]
    pub fn left_edge(&self) -> f64 {
        self.center.x - self.radius
    }

    #[inline]
    pub fn right_edge(&self) -> f64 {
        self.center.x + self.radius
    }

    /// Circle area.
    #[inline]
    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }
}

/// Read access to the shared data of an entity variant.
pub trait Body: Send + Sync {
    fn data(&self) -> &EntityData;

    #[inline]
    fn id(&self) -> EntityId {
        self.data().id
    }

    #[inline]
    fn center(&self) -> DVec2 {
        self.data().center
    }

    #[inline]
    fn radius(&self) -> f64 {
        self.data().radius
    }

    #[inline]
    fn color(&self) -> Color {
        self.data().color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_and_nonzero() {
        let mut ids = IdAllocator::new();
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert_ne!(a.0, 0);
    }

    #[test]
    fn test_id_counter_wraps_past_zero() {
        let mut ids = IdAllocator { next: u64::MAX };
        assert_eq!(ids.next_id(), EntityId(u64::MAX));
        assert_eq!(ids.next_id(), EntityId(1));
    }

    #[test]
    fn test_id_allocator_skips_zero_on_wrap() {
        let mut ids = IdAllocator { next: u64::MAX };
        assert_eq!(ids.next_id(), EntityId(u64::MAX));
        assert_eq!(ids.next_id(), EntityId(1));
    }

    #[test]
    fn test_edges() {
        let data = EntityData::new(EntityId(1), DVec2::new(50.0, 20.0), 5.0, Color::RED);
        assert_eq!(data.left_edge(), 45.0);
        assert_eq!(data.right_edge(), 55.0);
    }
}
