//! The game field.
//!
//! Owns every entity, places new ones on free spots, answers proximity queries
//! and replaces or removes player cells. A single read-write lock guards the
//! whole collection: queries share the read side, every mutation takes the
//! write side.

use crate::color::Color;
use crate::config::FieldConfig;
use crate::entity::{Body, Bush, Entity, EntityId, EntityKind, Food, IdAllocator, PlayerCell};
use crate::error::FieldError;
use crate::placement::{generate_color, generate_radius};
use crate::player::Player;
use crate::spatial::{entity_in_range, point_in_range, FieldBounds, SweepIndex};
use glam::DVec2;
use parking_lot::RwLock;
use tracing::{debug, trace, warn};

/// Entity to place at an explicit spot with [`GameField::spawn_at`].
#[derive(Debug, Clone, PartialEq)]
pub enum Blueprint {
    Food { color: Color },
    Bush { radius: f64 },
    Cell { owner: Player, radius: f64, color: Color },
}

impl Blueprint {
    fn kind(&self) -> EntityKind {
        match self {
            Blueprint::Food { .. } => EntityKind::Food,
            Blueprint::Bush { .. } => EntityKind::Bush,
            Blueprint::Cell { .. } => EntityKind::Cell,
        }
    }
}

/// Entity count statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldCounts {
    pub cells: usize,
    pub food: usize,
    pub bushes: usize,
    pub total: usize,
}

/// Lock-protected field contents.
#[derive(Debug)]
struct FieldState {
    index: SweepIndex,
    ids: IdAllocator,
}

impl FieldState {
    fn nearby_point(&self, point: DVec2, distance: f64) -> Vec<Entity> {
        self.index
            .candidates(point.x + distance)
            .filter(|e| point_in_range(point, e, distance))
            .cloned()
            .collect()
    }

    /// Whether no entity lies within `safety` of `point`.
    fn is_free(&self, point: DVec2, safety: f64) -> bool {
        !self
            .index
            .candidates(point.x + safety)
            .any(|e| point_in_range(point, e, safety))
    }

    fn owned_cells(&self, player: &Player) -> Vec<PlayerCell> {
        self.index
            .iter()
            .filter_map(Entity::as_cell)
            .filter(|c| c.owner() == player)
            .cloned()
            .collect()
    }
}

/// The bounded arena and the authoritative collection of its entities.
#[derive(Debug)]
pub struct GameField {
    config: FieldConfig,
    bounds: FieldBounds,
    state: RwLock<FieldState>,
}

impl GameField {
    /// Create an empty field.
    pub fn new(config: FieldConfig) -> Result<Self, FieldError> {
        config.validate()?;
        let bounds = FieldBounds::new(config.border.width, config.border.height);
        debug!("Created game field {}x{}", bounds.width, bounds.height);
        Ok(Self {
            config,
            bounds,
            state: RwLock::new(FieldState {
                index: SweepIndex::new(),
                ids: IdAllocator::new(),
            }),
        })
    }

    #[inline]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    #[inline]
    pub fn bounds(&self) -> FieldBounds {
        self.bounds
    }

    // ---------------------------------------------------------------------
    // Placement
    // ---------------------------------------------------------------------

    /// Find a random center with no entity within the safety distance.
    ///
    /// The answer is only a snapshot: another caller may take the spot before
    /// it is used. Spawns do not go through here; they check and insert under
    /// one lock acquisition per attempt.
    pub fn generate_center(&self, radius: f64) -> Result<DVec2, FieldError> {
        let safety = self.config.placement.safety_distance;
        let attempts = self.config.placement.max_attempts;
        let mut rng = rand::rng();
        for _ in 0..attempts {
            let center = self.bounds.random_point(&mut rng);
            if self.state.read().is_free(center, safety) {
                trace!("Found center ({:.2}, {:.2}) for radius {:.2}", center.x, center.y, radius);
                return Ok(center);
            }
        }
        warn!("No free center after {} attempts", attempts);
        Err(FieldError::Saturated { attempts })
    }

    /// Sample centers until one is free, then build and insert the entity there.
    ///
    /// The write lock is held for one check-and-insert at a time, so concurrent
    /// spawns never both claim overlapping space and other callers get the lock
    /// between attempts.
    fn place<F>(&self, mut build: F) -> Result<EntityId, FieldError>
    where
        F: FnMut(EntityId, DVec2) -> Entity,
    {
        let safety = self.config.placement.safety_distance;
        let attempts = self.config.placement.max_attempts;
        let mut rng = rand::rng();
        for _ in 0..attempts {
            let center = self.bounds.random_point(&mut rng);
            let mut state = self.state.write();
            if state.is_free(center, safety) {
                let id = state.ids.next_id();
                state.index.insert(build(id, center));
                return Ok(id);
            }
        }
        warn!("Field saturated: gave up placing after {} attempts", attempts);
        Err(FieldError::Saturated { attempts })
    }

    /// Spawn a bush on a free spot.
    pub fn spawn_bush(&self) -> Result<EntityId, FieldError> {
        let bush = &self.config.bush;
        let radius = generate_radius(bush.min_radius, bush.max_radius, &mut rand::rng());
        let color = bush.color;
        let id = self.place(|id, center| Bush::new(id, center, radius, color).into())?;
        trace!("Spawned bush {} (r={:.2})", id, radius);
        Ok(id)
    }

    /// Spawn a food pellet on a free spot.
    pub fn spawn_food(&self) -> Result<EntityId, FieldError> {
        let food = &self.config.food;
        let color = generate_color(&food.palette, &mut rand::rng()).unwrap_or_default();
        let radius = food.radius;
        let id = self.place(|id, center| Food::new(id, center, radius, color).into())?;
        trace!("Spawned food {}", id);
        Ok(id)
    }

    /// Spawn a cell controlled by `player` on a free spot.
    pub fn spawn_player_cell(&self, player: &Player) -> Result<EntityId, FieldError> {
        let cell = &self.config.cell;
        let color = generate_color(&cell.palette, &mut rand::rng()).unwrap_or_default();
        let radius = cell.start_radius;
        let id = self.place(|id, center| PlayerCell::new(id, player.clone(), center, radius, color).into())?;
        debug!("Spawned cell {} for player {}", id, player);
        Ok(id)
    }

    /// Place an entity at an explicit center.
    ///
    /// Validates bounds, the variant's radius range and the safety distance.
    pub fn spawn_at(&self, blueprint: Blueprint, center: DVec2) -> Result<EntityId, FieldError> {
        if !self.bounds.contains(center) {
            return Err(FieldError::OutOfBounds { x: center.x, y: center.y });
        }

        let kind = blueprint.kind();
        let radius = match &blueprint {
            Blueprint::Food { .. } => self.config.food.radius,
            Blueprint::Bush { radius } | Blueprint::Cell { radius, .. } => *radius,
        };
        let (min, max) = self.config.radius_bounds(kind);
        if !(radius > 0.0 && radius >= min && radius <= max) {
            return Err(FieldError::InvalidRadius { kind, radius, min, max });
        }

        let mut state = self.state.write();
        if !state.is_free(center, self.config.placement.safety_distance) {
            return Err(FieldError::Occupied { x: center.x, y: center.y });
        }
        let id = state.ids.next_id();
        let entity: Entity = match blueprint {
            Blueprint::Food { color } => Food::new(id, center, radius, color).into(),
            Blueprint::Bush { .. } => Bush::new(id, center, radius, self.config.bush.color).into(),
            Blueprint::Cell { owner, color, .. } => PlayerCell::new(id, owner, center, radius, color).into(),
        };
        state.index.insert(entity);
        trace!("Placed {} {} at ({:.2}, {:.2})", kind, id, center.x, center.y);
        Ok(id)
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    /// Entities within `distance` of `subject`, in left-edge order.
    ///
    /// If `subject` is itself on the field it matches too; filter it out by id
    /// if that is not wanted.
    pub fn find_nearby<B: Body + ?Sized>(&self, subject: &B, distance: f64) -> Vec<Entity> {
        let center = subject.center();
        let radius = subject.radius();
        let state = self.state.read();
        state
            .index
            .candidates(center.x + radius + distance)
            .filter(|e| entity_in_range(center, radius, e, distance))
            .cloned()
            .collect()
    }

    /// Entities within `distance` of `point`, in left-edge order.
    pub fn find_nearby_point(&self, point: DVec2, distance: f64) -> Vec<Entity> {
        self.state.read().nearby_point(point, distance)
    }

    /// Snapshot of every player cell on the field.
    pub fn get_player_cells(&self) -> Vec<PlayerCell> {
        self.state
            .read()
            .index
            .iter()
            .filter_map(Entity::as_cell)
            .cloned()
            .collect()
    }

    /// Snapshot of every entity that is not a player cell.
    pub fn get_non_player_entities(&self) -> Vec<Entity> {
        self.state
            .read()
            .index
            .iter()
            .filter(|e| match e {
                Entity::Cell(_) => false,
                Entity::Food(_) | Entity::Bush(_) => true,
            })
            .cloned()
            .collect()
    }

    /// Snapshot of the cells owned by `player`.
    pub fn player_cells(&self, player: &Player) -> Vec<PlayerCell> {
        self.state.read().owned_cells(player)
    }

    pub fn player_cell_count(&self, player: &Player) -> usize {
        self.state
            .read()
            .index
            .iter()
            .filter(|e| e.is_owned_by(player))
            .count()
    }

    /// Get an entity by id.
    pub fn get(&self, id: EntityId) -> Option<Entity> {
        self.state.read().index.get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.state.read().index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().index.is_empty()
    }

    /// Count entities of each kind.
    pub fn counts(&self) -> FieldCounts {
        let state = self.state.read();
        let mut counts = FieldCounts::default();
        for entity in state.index.iter() {
            match entity {
                Entity::Cell(_) => counts.cells += 1,
                Entity::Food(_) => counts.food += 1,
                Entity::Bush(_) => counts.bushes += 1,
            }
        }
        counts.total = state.index.len();
        counts
    }

    // ---------------------------------------------------------------------
    // Mutations
    // ---------------------------------------------------------------------

    /// Split every cell owned by `player` into up to `children` smaller cells.
    ///
    /// Parents are replaced by their children in one write-lock section, so no
    /// query sees a half-split population. Cells too small to split stay as they
    /// are. Returns how many cells the player owns afterwards.
    pub fn split_player_cells(&self, player: &Player, children: usize) -> Result<usize, FieldError> {
        if children == 0 {
            return Err(FieldError::InvalidSplitCount(children));
        }

        let min_radius = self.config.cell.min_radius;
        let mut rng = rand::rng();
        let mut state = self.state.write();

        let parents = state.owned_cells(player);
        if parents.is_empty() {
            return Ok(0);
        }

        let mut produced = Vec::with_capacity(parents.len() * children);
        for parent in &parents {
            produced.extend(parent.split(children, min_radius, &self.bounds, &mut state.ids, &mut rng));
        }

        state.index.remove_where(|e| e.is_owned_by(player));
        let count = produced.len();
        for cell in produced {
            state.index.insert(cell.into());
        }

        debug!("Player {} split {} cells into {}", player, parents.len(), count);
        Ok(count)
    }

    /// Remove an entity by identity. Returns false if it was not on the field.
    pub fn remove_entity<B: Body + ?Sized>(&self, entity: &B) -> bool {
        self.remove_entity_by_id(entity.id())
    }

    pub fn remove_entity_by_id(&self, id: EntityId) -> bool {
        let removed = self.state.write().index.remove(id).is_some();
        if removed {
            trace!("Removed entity {}", id);
        }
        removed
    }

    /// Remove every cell owned by `player`, returning how many were removed.
    pub fn remove_player_cells(&self, player: &Player) -> usize {
        let removed = self.state.write().index.remove_where(|e| e.is_owned_by(player));
        if removed > 0 {
            debug!("Removed {} cells of player {}", removed, player);
        }
        removed
    }
}
