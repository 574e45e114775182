//! Spatial indexing and proximity tests.
//!
//! Entities are kept in a sweep list ordered by left edge, which lets both
//! proximity queries stop scanning at the first entity past the x pre-filter.

mod bounds;
mod proximity;
mod sweep;

pub use bounds::FieldBounds;
pub use proximity::{entity_in_range, point_in_range};
pub use sweep::SweepIndex;
