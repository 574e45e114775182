//! Sweep list: entities ordered by left edge.

use crate::entity::{Body, Entity, EntityId};

/// Entities kept sorted by left edge (`x - r`) ascending.
///
/// Entities with equal left edges keep insertion order. Since both proximity
/// pre-filters accept exactly the entities whose left edge is below a limit,
/// [`SweepIndex::candidates`] can stop at the first entity past it.
#[derive(Debug, Default)]
pub struct SweepIndex {
    entities: Vec<Entity>,
}

impl SweepIndex {
    pub fn new() -> Self {
        Self {
            entities: Vec::with_capacity(256),
        }
    }

    /// Insert an entity at its sorted position.
    pub fn insert(&mut self, entity: Entity) {
        let key = entity.left_edge();
        let pos = self.entities.partition_point(|e| e.left_edge() <= key);
        self.entities.insert(pos, entity);
    }

    /// Remove an entity by id.
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let pos = self.entities.iter().position(|e| e.id() == id)?;
        Some(self.entities.remove(pos))
    }

    /// Remove every entity matching `pred`, returning how many were removed.
    pub fn remove_where<F: FnMut(&Entity) -> bool>(&mut self, mut pred: F) -> usize {
        let before = self.entities.len();
        self.entities.retain(|e| !pred(e));
        before - self.entities.len()
    }

    /// Entities whose left edge is strictly below `limit`, in sweep order.
    #[inline]
    pub fn candidates(&self, limit: f64) -> impl Iterator<Item = &Entity> {
        self.entities.iter().take_while(move |e| e.left_edge() < limit)
    }

    #[inline]
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id() == id)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
