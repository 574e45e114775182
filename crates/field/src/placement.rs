//! Random radius and color generation for spawns.
//!
//! Center generation needs the entity collection and lives on
//! [`GameField`](crate::GameField).

use crate::color::Color;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Uniform radius in `[min, max]`.
#[inline]
pub fn generate_radius<R: Rng + ?Sized>(min: f64, max: f64, rng: &mut R) -> f64 {
    if max > min {
        rng.random_range(min..=max)
    } else {
        min
    }
}

/// Uniform pick from a palette. `None` only for an empty palette.
#[inline]
pub fn generate_color<R: Rng + ?Sized>(palette: &[Color], rng: &mut R) -> Option<Color> {
    palette.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;

    #[test]
    fn test_radius_in_range() {
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let r = generate_radius(8.0, 20.0, &mut rng);
            assert!((8.0..=20.0).contains(&r));
        }
        assert_eq!(generate_radius(2.0, 2.0, &mut rng), 2.0);
    }

    #[test]
    fn test_color_from_palette() {
        let mut rng = rand::rng();
        let palette = color::food_palette();
        let mut seen = Vec::new();
        for _ in 0..500 {
            let c = generate_color(&palette, &mut rng).unwrap();
            assert!(palette.contains(&c));
            if !seen.contains(&c) {
                seen.push(c);
            }
        }
        // Every palette entry is reachable.
        assert_eq!(seen.len(), palette.len());
        assert_eq!(generate_color(&[], &mut rng), None);
    }
}
