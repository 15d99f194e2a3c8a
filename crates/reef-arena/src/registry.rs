//! Slab-backed entity registry.

use crate::entity::Entity;
use crate::error::ArenaError;
use indexmap::{IndexMap, IndexSet};
use reef_core::{EntityId, Species};

/// Owner of every live [`Entity`].
///
/// Storage is a slab of slots with a free list: removed slots are reused by
/// later inserts, so a long run with steady births and deaths does not
/// grow the slab. A live map resolves ids to slots and a per-species index
/// serves counts and iteration without scanning the slab.
///
/// Ids come from a monotonic counter and are never reused, so a stale id
/// cannot alias a newer entity.
#[derive(Clone, Debug, Default)]
pub struct EntityArena {
    /// All slots (live and vacated).
    slots: Vec<Option<Entity>>,
    /// Indices of vacated slots available for reuse.
    free_list: Vec<usize>,
    /// Live id → slot index.
    live_map: IndexMap<EntityId, usize>,
    /// Live ids per species, indexed by [`Species::index`].
    by_species: [IndexSet<EntityId>; Species::COUNT],
    next_id: u64,
}

impl EntityArena {
    /// Create an empty arena. The first allocated id is `EntityId(0)`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out a fresh id.
    pub fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Register an entity under its (previously allocated) id.
    pub fn insert(&mut self, entity: Entity) -> Result<(), ArenaError> {
        let id = entity.id;
        if id.0 >= self.next_id {
            return Err(ArenaError::UnallocatedId {
                id,
                next: EntityId(self.next_id),
            });
        }
        if self.live_map.contains_key(&id) {
            return Err(ArenaError::DuplicateId { id });
        }
        let species = entity.species();

        let slot_idx = if let Some(reuse_idx) = self.free_list.pop() {
            self.slots[reuse_idx] = Some(entity);
            reuse_idx
        } else {
            let idx = self.slots.len();
            self.slots.push(Some(entity));
            idx
        };

        self.live_map.insert(id, slot_idx);
        self.by_species[species.index()].insert(id);
        Ok(())
    }

    /// Remove and return a live entity.
    pub fn remove(&mut self, id: EntityId) -> Result<Entity, ArenaError> {
        let slot_idx = self
            .live_map
            .swap_remove(&id)
            .ok_or(ArenaError::UnknownEntity { id })?;
        let entity = self.slots[slot_idx]
            .take()
            .ok_or(ArenaError::UnknownEntity { id })?;
        self.free_list.push(slot_idx);
        self.by_species[entity.species().index()].swap_remove(&id);
        Ok(entity)
    }

    /// Look up a live entity.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        let &idx = self.live_map.get(&id)?;
        self.slots[idx].as_ref()
    }

    /// Look up a live entity mutably.
    ///
    /// Callers must not change the entity's species through this handle;
    /// the species index would go stale. Stage changes remove and insert.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        let &idx = self.live_map.get(&id)?;
        self.slots[idx].as_mut()
    }

    /// Whether `id` is live.
    pub fn contains(&self, id: EntityId) -> bool {
        self.live_map.contains_key(&id)
    }

    /// Live entities of `species`.
    pub fn count(&self, species: Species) -> usize {
        self.by_species[species.index()].len()
    }

    /// Total live entities.
    pub fn len(&self) -> usize {
        self.live_map.len()
    }

    /// Whether no entity is live.
    pub fn is_empty(&self) -> bool {
        self.live_map.is_empty()
    }

    /// Copy of the live ids of `species` at this moment.
    ///
    /// Iterate the copy, not the arena, when the loop body may spawn or
    /// despawn entities.
    pub fn snapshot(&self, species: Species) -> Vec<EntityId> {
        self.by_species[species.index()].iter().copied().collect()
    }

    /// Live ids of `species`, borrowed.
    pub fn ids(&self, species: Species) -> impl Iterator<Item = EntityId> + '_ {
        self.by_species[species.index()].iter().copied()
    }

    /// All live entities.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.live_map
            .values()
            .filter_map(move |&idx| self.slots[idx].as_ref())
    }

    /// Total slots (live + vacated).
    pub fn total_slots(&self) -> usize {
        self.slots.len()
    }

    /// Number of vacated slots available for reuse.
    pub fn free_count(&self) -> usize {
        self.free_list.len()
    }

    /// The id the next [`allocate_id`](Self::allocate_id) call will return.
    pub fn next_id(&self) -> EntityId {
        EntityId(self.next_id)
    }
}
