//! Proximity acceptance tests shared by the field queries.
//!
//! Both tests compare the center distance against the candidate's radius with
//! `|d - e.r + s.r|` (entity form) or `|d - e.r|` (point form). Note the entity
//! form adds the subject radius rather than subtracting the radii sum; existing
//! callers depend on exactly this predicate.

use crate::entity::{Body, Entity};
use glam::DVec2;

/// Whether `candidate` is within `distance` of a subject circle.
#[inline]
pub fn entity_in_range(subject_center: DVec2, subject_radius: f64, candidate: &Entity, distance: f64) -> bool {
    let data = candidate.data();
    subject_center.x + subject_radius + distance > data.left_edge()
        && (data.center.distance(subject_center) - data.radius + subject_radius).abs() <= distance
}

/// Whether `candidate` is within `distance` of a point.
#[inline]
pub fn point_in_range(point: DVec2, candidate: &Entity, distance: f64) -> bool {
    let data = candidate.data();
    point.x + distance > data.left_edge()
        && (data.center.distance(point) - data.radius).abs() <= distance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::entity::{EntityId, Food};

    fn food_at(x: f64, y: f64, radius: f64) -> Entity {
        Food::new(EntityId(1), DVec2::new(x, y), radius, Color::RED).into()
    }

    #[test]
    fn test_point_in_range() {
        let food = food_at(100.0, 100.0, 2.0);
        // d = 10, |10 - 2| = 8
        assert!(point_in_range(DVec2::new(110.0, 100.0), &food, 8.0));
        assert!(!point_in_range(DVec2::new(110.0, 100.0), &food, 7.9));
        // Point on the rim: |2 - 2| = 0
        assert!(point_in_range(DVec2::new(100.0, 102.0), &food, 0.0));
    }

    #[test]
    fn test_point_prefilter_rejects_far_left() {
        // Formula alone would accept (|10 - 2| = 8 <= 8), but the x pre-filter
        // needs point.x + distance > left edge: 90 + 8 > 98 fails.
        let food = food_at(100.0, 100.0, 2.0);
        assert!(!point_in_range(DVec2::new(90.0, 100.0), &food, 8.0));
        assert!(point_in_range(DVec2::new(110.0, 100.0), &food, 8.0));
    }

    #[test]
    fn test_entity_formula_adds_subject_radius() {
        let food = food_at(100.0, 100.0, 2.0);
        // Subject at distance 10 with radius 5: |10 - 2 + 5| = 13.
        let center = DVec2::new(110.0, 100.0);
        assert!(entity_in_range(center, 5.0, &food, 13.0));
        assert!(!entity_in_range(center, 5.0, &food, 12.9));
        // The geometric gap (10 - 2 - 5 = 3) is not what is tested.
        assert!(!entity_in_range(center, 5.0, &food, 3.0));
    }

    #[test]
    fn test_entity_matches_itself_only_when_radii_allow() {
        // Self match: |0 - r + r| = 0 <= d for any d >= 0.
        let food = food_at(50.0, 50.0, 2.0);
        assert!(entity_in_range(food.center(), food.radius(), &food, 0.0));
    }

    #[test]
    fn test_negative_distance_matches_nothing() {
        let food = food_at(50.0, 50.0, 2.0);
        assert!(!point_in_range(DVec2::new(50.0, 52.0), &food, -1.0));
        assert!(!entity_in_range(food.center(), food.radius(), &food, -1.0));
    }

    #[test]
    fn test_monotonic_in_distance() {
        let food = food_at(200.0, 120.0, 2.0);
        let point = DVec2::new(230.0, 90.0);
        let mut included = false;
        for step in 0..200 {
            let d = step as f64 * 0.5;
            let now = point_in_range(point, &food, d);
            assert!(!included || now, "dropped out at distance {}", d);
            included = now;
        }
        assert!(included);
    }
}
