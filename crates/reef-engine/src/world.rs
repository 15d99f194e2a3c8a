//! The single owner of entity records and their placement.
//!
//! [`World`] holds the [`EntityArena`] and the [`SpatialGrid`] together and
//! is the only code that mutates either. [`spawn`](World::spawn),
//! [`despawn`](World::despawn), and [`relocate`](World::relocate) update
//! both sides in one call, so the registry and the grid cannot drift apart
//! through normal use. [`check_consistency`](World::check_consistency)
//! verifies that they have not.

use std::error::Error;
use std::fmt;

use reef_arena::{ArenaError, Entity, EntityArena, NewEntity};
use reef_core::{Coord, EntityId, InvariantViolation, Sex, Species};
use reef_space::{Connectivity, Lattice, SpaceError, SpatialGrid};
use serde::Serialize;

// ── WorldError ─────────────────────────────────────────────────────

/// A grid or arena operation was misused.
///
/// Lifecycle rules only issue operations that are valid for the current
/// state, so any of these indicates a defect rather than a runtime
/// condition.
#[derive(Clone, Debug, PartialEq)]
pub enum WorldError {
    /// The grid rejected an operation.
    Space(SpaceError),
    /// The arena rejected an operation.
    Arena(ArenaError),
    /// The grid and arena disagree.
    Invariant(InvariantViolation),
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "grid: {e}"),
            Self::Arena(e) => write!(f, "arena: {e}"),
            Self::Invariant(e) => write!(f, "invariant violated: {e}"),
        }
    }
}

impl Error for WorldError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            Self::Arena(e) => Some(e),
            Self::Invariant(e) => Some(e),
        }
    }
}

impl From<SpaceError> for WorldError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

impl From<ArenaError> for WorldError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}

impl From<InvariantViolation> for WorldError {
    fn from(e: InvariantViolation) -> Self {
        Self::Invariant(e)
    }
}

// ── EntityView ─────────────────────────────────────────────────────

/// Read-only summary of one live entity, for rendering and reporting.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EntityView {
    /// Entity id.
    pub id: EntityId,
    /// Current cell.
    pub pos: Coord,
    /// Species tag.
    pub species: Species,
    /// Current energy.
    pub energy: f64,
    /// Sex, for medusae and fish.
    pub sex: Option<Sex>,
}

impl From<&Entity> for EntityView {
    fn from(e: &Entity) -> Self {
        Self {
            id: e.id,
            pos: e.pos,
            species: e.species(),
            energy: e.energy,
            sex: e.sex(),
        }
    }
}

// ── World ──────────────────────────────────────────────────────────

/// Entity registry and grid, kept in agreement.
#[derive(Debug, Clone)]
pub struct World {
    arena: EntityArena,
    grid: SpatialGrid,
}

impl World {
    /// An empty world over `lattice`.
    pub fn new(lattice: Lattice) -> Self {
        Self {
            arena: EntityArena::new(),
            grid: SpatialGrid::new(lattice),
        }
    }

    /// Create an entity and place it. Returns its new id.
    ///
    /// On failure nothing is created.
    pub fn spawn(&mut self, new: NewEntity) -> Result<EntityId, WorldError> {
        self.grid.lattice().check_bounds(new.pos)?;
        let id = self.arena.allocate_id();
        self.grid.place(id, new.species(), new.pos)?;
        if let Err(e) = self.arena.insert(new.with_id(id)) {
            self.grid.remove(id)?;
            return Err(e.into());
        }
        Ok(id)
    }

    /// Remove an entity from the grid and the registry. Returns its record.
    pub fn despawn(&mut self, id: EntityId) -> Result<Entity, WorldError> {
        if !self.arena.contains(id) {
            return Err(ArenaError::UnknownEntity { id }.into());
        }
        self.grid.remove(id)?;
        Ok(self.arena.remove(id)?)
    }

    /// Move an entity to `to`.
    pub fn relocate(&mut self, id: EntityId, to: Coord) -> Result<(), WorldError> {
        if !self.arena.contains(id) {
            return Err(ArenaError::UnknownEntity { id }.into());
        }
        self.grid.move_to(id, to)?;
        let entity = self
            .arena
            .get_mut(id)
            .ok_or(ArenaError::UnknownEntity { id })?;
        entity.pos = to;
        Ok(())
    }

    /// Look up a live entity.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.arena.get(id)
    }

    /// Mutable access for energy and counter updates. Position and
    /// species must only change through [`relocate`](Self::relocate) and
    /// despawn/spawn.
    pub(crate) fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.arena.get_mut(id)
    }

    /// Whether `id` is live.
    pub fn contains(&self, id: EntityId) -> bool {
        self.arena.contains(id)
    }

    /// Live entities of `species`.
    pub fn type_count(&self, species: Species) -> usize {
        self.arena.count(species)
    }

    /// Live entities of `species` that satisfy `filter`.
    pub fn type_count_filtered(&self, species: Species, filter: impl Fn(&Entity) -> bool) -> usize {
        self.arena
            .ids(species)
            .filter_map(|id| self.arena.get(id))
            .filter(|e| filter(e))
            .count()
    }

    /// Live entities across all species.
    pub fn total_count(&self) -> usize {
        self.arena.len()
    }

    /// Views of all live entities.
    pub fn entities(&self) -> impl Iterator<Item = EntityView> + '_ {
        self.arena.iter().map(EntityView::from)
    }

    /// Views of the live entities of one species.
    pub fn entities_of(&self, species: Species) -> impl Iterator<Item = EntityView> + '_ {
        self.arena
            .ids(species)
            .filter_map(|id| self.arena.get(id))
            .map(EntityView::from)
    }

    /// The occupancy grid.
    pub fn grid(&self) -> &SpatialGrid {
        &self.grid
    }

    /// The entity registry.
    pub fn arena(&self) -> &EntityArena {
        &self.arena
    }

    /// The grid topology.
    pub fn lattice(&self) -> &Lattice {
        self.grid.lattice()
    }

    // ── Neighbourhood queries ───────────────────────────────────────

    /// Ids of `species` within `radius` of `center`, in neighbourhood order.
    pub fn neighbours_of_species(
        &self,
        center: Coord,
        radius: u32,
        connectivity: Connectivity,
        include_center: bool,
        species: Species,
    ) -> Vec<EntityId> {
        self.grid
            .neighbours(center, radius, connectivity, include_center)
            .into_iter()
            .filter(|&(_, s)| s == species)
            .map(|(id, _)| id)
            .collect()
    }

    /// Cells within `radius` of `center` holding at least one `species`.
    pub fn cells_with(
        &self,
        center: Coord,
        radius: u32,
        connectivity: Connectivity,
        include_center: bool,
        species: Species,
    ) -> Vec<Coord> {
        self.grid
            .neighbourhood_cells(center, radius, connectivity, include_center)
            .into_iter()
            .filter(|&c| self.grid.has_species(c, species))
            .collect()
    }

    /// Open cells within `radius` of `center`.
    pub fn open_cells(
        &self,
        center: Coord,
        radius: u32,
        connectivity: Connectivity,
        include_center: bool,
    ) -> Vec<Coord> {
        self.grid
            .neighbourhood_cells(center, radius, connectivity, include_center)
            .into_iter()
            .filter(|&c| self.grid.is_open(c))
            .collect()
    }

    // ── Consistency ─────────────────────────────────────────────────

    /// Verify that every registered entity is placed exactly where its
    /// record says and that every placement belongs to a registered entity
    /// of the cached species.
    pub fn check_consistency(&self) -> Result<(), InvariantViolation> {
        for entity in self.arena.iter() {
            match self.grid.position_of(entity.id) {
                None => return Err(InvariantViolation::UnplacedEntity { id: entity.id }),
                Some(found) if found != entity.pos => {
                    return Err(InvariantViolation::PositionMismatch {
                        id: entity.id,
                        recorded: entity.pos,
                        found,
                    })
                }
                Some(_) => {}
            }
        }
        for (at, cell) in self.grid.occupied_cells() {
            for &(id, cached) in cell {
                let entity = self
                    .arena
                    .get(id)
                    .ok_or(InvariantViolation::OrphanedOccupant { id, at })?;
                if entity.species() != cached {
                    return Err(InvariantViolation::SpeciesMismatch {
                        id,
                        recorded: entity.species(),
                        found: cached,
                    });
                }
            }
        }
        if self.arena.len() != self.grid.placed_count() {
            return Err(InvariantViolation::CountMismatch {
                registry: self.arena.len(),
                grid: self.grid.placed_count(),
            });
        }
        Ok(())
    }
}
