//! Field entities.
//!
//! Every entity is one variant of the closed [`Entity`] enum. The field assigns
//! each one an [`EntityId`]; identity, not geometry, distinguishes entities.

mod body;
mod bush;
mod food;
mod player_cell;

pub use body::{Body, EntityData, EntityId, EntityKind, IdAllocator};
pub use bush::Bush;
pub use food::Food;
pub use player_cell::PlayerCell;

use crate::player::Player;

/// An entity placed on the field.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Cell(PlayerCell),
    Food(Food),
    Bush(Bush),
}

impl Body for Entity {
    fn data(&self) -> &EntityData {
        match self {
            Entity::Cell(c) => c.data(),
            Entity::Food(f) => f.data(),
            Entity::Bush(b) => b.data(),
        }
    }
}

impl Entity {
    #[inline]
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Cell(_) => EntityKind::Cell,
            Entity::Food(_) => EntityKind::Food,
            Entity::Bush(_) => EntityKind::Bush,
        }
    }

    /// Left edge (`x - r`), the key the field orders entities by.
    #[inline]
    pub fn left_edge(&self) -> f64 {
        self.data().left_edge()
    }

    /// Owner of the entity, if it is a player cell.
    #[inline]
    pub fn owner(&self) -> Option<&Player> {
        match self {
            Entity::Cell(c) => Some(c.owner()),
            Entity::Food(_) | Entity::Bush(_) => None,
        }
    }

    #[inline]
    pub fn is_owned_by(&self, player: &Player) -> bool {
        self.owner() == Some(player)
    }

    #[inline]
    pub fn as_cell(&self) -> Option<&PlayerCell> {
        match self {
            Entity::Cell(c) => Some(c),
            Entity::Food(_) | Entity::Bush(_) => None,
        }
    }
}

impl From<PlayerCell> for Entity {
    fn from(cell: PlayerCell) -> Self {
        Entity::Cell(cell)
    }
}

impl From<Food> for Entity {
    fn from(food: Food) -> Self {
        Entity::Food(food)
    }
}

impl From<Bush> for Entity {
    fn from(bush: Bush) -> Self {
        Entity::Bush(bush)
    }
}
