//! Player cell.

use super::body::{Body, EntityData, EntityId, IdAllocator};
use crate::color::Color;
use crate::player::Player;
use crate::spatial::FieldBounds;
use glam::DVec2;
use rand::Rng;
use std::f64::consts::TAU;

// Guards the floor() in split_count against (r / min)^2 landing a hair under an integer.
const SPLIT_EPSILON: f64 = 1e-9;

/// A cell controlled by a player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerCell {
    data: EntityData,
    owner: Player,
}

impl PlayerCell {
    pub(crate) fn new(id: EntityId, owner: Player, center: DVec2, radius: f64, color: Color) -> Self {
        Self {
            data: EntityData::new(id, center, radius, color),
            owner,
        }
    }

    #[inline]
    pub fn owner(&self) -> &Player {
        &self.owner
    }

    /// How many children a split into `requested` pieces actually produces.
    ///
    /// Children get radius `r / sqrt(k)`, so `k` is capped where that would drop
    /// below `min_radius`. Always at least 1.
    pub fn split_count(&self, requested: usize, min_radius: f64) -> usize {
        let ratio = self.data.radius / min_radius;
        let max_children = (ratio * ratio + SPLIT_EPSILON).floor().max(1.0) as usize;
        requested.clamp(1, max_children)
    }

    /// Split into up to `requested` children owned by the same player.
    ///
    /// Total area is conserved. Children sit on a ring inside the parent's former
    /// footprint, evenly spaced from a random phase. Near an edge the ring's center
    /// is pulled inward so that every child lands in bounds on its own spot. When
    /// the cell cannot split (count capped to 1) it is returned unchanged, keeping
    /// its identity.
    pub fn split<R: Rng + ?Sized>(
        &self,
        requested: usize,
        min_radius: f64,
        bounds: &FieldBounds,
        ids: &mut IdAllocator,
        rng: &mut R,
    ) -> Vec<PlayerCell> {
        let count = self.split_count(requested, min_radius);
        if count < 2 {
            return vec![self.clone()];
        }

        let child_radius = (self.data.radius / (count as f64).sqrt()).max(min_radius);
        let ring = self.data.radius - child_radius;
        let phase = rng.random_range(0.0..TAU);
        let step = TAU / count as f64;
        let base = ring_center(self.data.center, ring, bounds);

        (0..count)
            .map(|i| {
                let angle = phase + step * i as f64;
                let offset = DVec2::new(angle.cos(), angle.sin()) * ring;
                PlayerCell::new(
                    ids.next_id(),
                    self.owner.clone(),
                    bounds.clamp(base + offset),
                    child_radius,
                    self.data.color,
                )
            })
            .collect()
    }
}

/// Move `center` at least `ring` away from every edge, when the field is wide enough.
fn ring_center(center: DVec2, ring: f64, bounds: &FieldBounds) -> DVec2 {
    if 2.0 * ring > bounds.width || 2.0 * ring > bounds.height {
        return bounds.clamp(center);
    }
    DVec2::new(
        center.x.clamp(ring, bounds.width - ring),
        center.y.clamp(ring, bounds.height - ring),
    )
}

impl Body for PlayerCell {
    fn data(&self) -> &EntityData {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(radius: f64) -> PlayerCell {
        PlayerCell::new(
            EntityId(100),
            Player::new("alice"),
            DVec2::new(250.0, 250.0),
            radius,
            Color::RED,
        )
    }

    #[test]
    fn test_split_conserves_area() {
        let parent = cell(20.0);
        let bounds = FieldBounds::new(500.0, 500.0);
        let mut ids = IdAllocator::new();
        let children = parent.split(4, 2.5, &bounds, &mut ids, &mut rand::rng());

        assert_eq!(children.len(), 4);
        let total: f64 = children.iter().map(|c| c.data().area()).sum();
        assert!((total - parent.data().area()).abs() < 1e-6);
        for child in &children {
            assert!(child.radius() < parent.radius());
            assert_eq!(child.owner(), parent.owner());
            assert_eq!(child.color(), parent.color());
            assert_ne!(child.id(), parent.id());
        }
    }

    #[test]
    fn test_split_children_do_not_coincide() {
        let parent = cell(10.0);
        let bounds = FieldBounds::new(500.0, 500.0);
        let mut ids = IdAllocator::new();
        let children = parent.split(3, 2.5, &bounds, &mut ids, &mut rand::rng());

        assert_eq!(children.len(), 3);
        for (i, a) in children.iter().enumerate() {
            for b in &children[i + 1..] {
                assert!(a.center().distance(b.center()) > 1e-6);
            }
            // Children stay inside the parent's footprint.
            assert!(a.center().distance(parent.center()) + a.radius() <= parent.radius() + 1e-9);
        }
    }

    #[test]
    fn test_split_count_capped_by_min_radius() {
        // (10 / 2.5)^2 = 16 children at most.
        let parent = cell(10.0);
        assert_eq!(parent.split_count(2, 2.5), 2);
        assert_eq!(parent.split_count(16, 2.5), 16);
        assert_eq!(parent.split_count(40, 2.5), 16);
        assert_eq!(cell(2.5).split_count(8, 2.5), 1);
    }

    #[test]
    fn test_unsplittable_cell_is_kept() {
        let parent = cell(3.0);
        let bounds = FieldBounds::new(500.0, 500.0);
        let mut ids = IdAllocator::new();
        let children = parent.split(2, 2.5, &bounds, &mut ids, &mut rand::rng());
        assert_eq!(children, vec![parent]);
    }

    #[test]
    fn test_split_near_corner_stays_in_bounds() {
        let parent = PlayerCell::new(EntityId(1), Player::new("bob"), DVec2::ZERO, 20.0, Color::CYAN);
        let bounds = FieldBounds::new(500.0, 500.0);
        let mut ids = IdAllocator::new();
        let children = parent.split(5, 2.5, &bounds, &mut ids, &mut rand::rng());
        assert_eq!(children.len(), 5);
        for (i, a) in children.iter().enumerate() {
            assert!(bounds.contains(a.center()));
            for b in &children[i + 1..] {
                assert!(a.center().distance(b.center()) > 1e-6);
            }
        }
    }

    #[test]
    fn test_split_along_edges_keeps_children_apart() {
        let bounds = FieldBounds::new(500.0, 500.0);
        let mut ids = IdAllocator::new();
        let edges = [
            DVec2::new(500.0, 0.0),
            DVec2::new(0.0, 250.0),
            DVec2::new(250.0, 500.0),
            DVec2::new(500.0, 500.0),
        ];
        for center in edges {
            let parent = PlayerCell::new(EntityId(1), Player::new("bob"), center, 10.0, Color::CYAN);
            let children = parent.split(16, 2.5, &bounds, &mut ids, &mut rand::rng());
            assert_eq!(children.len(), 16);
            for (i, a) in children.iter().enumerate() {
                assert!(bounds.contains(a.center()));
                for b in &children[i + 1..] {
                    assert!(a.center().distance(b.center()) > 1e-6, "children coincide near {:?}", center);
                }
            }
        }
    }

    #[test]
    fn test_ring_center_falls_back_on_tiny_field() {
        let bounds = FieldBounds::new(10.0, 10.0);
        assert_eq!(ring_center(DVec2::new(-3.0, 4.0), 8.0, &bounds), DVec2::new(0.0, 4.0));
        assert_eq!(ring_center(DVec2::new(1.0, 9.0), 2.0, &bounds), DVec2::new(2.0, 8.0));
    }
}
