//! Predation and grazing.

use reef_arena::Entity;
use reef_core::{EntityId, Species};
use reef_space::Connectivity;
use tracing::trace;

use crate::context::StepContext;
use crate::world::{World, WorldError};

/// Eat one entity within `radius` of `id` (own cell included).
///
/// Candidates are the occupants whose species is in `prey` and that pass
/// `accept`. One is chosen uniformly and removed; its record is returned
/// so the caller can work out the energy gained. `None` when nothing was
/// in reach.
pub(crate) fn eat_one(
    world: &mut World,
    ctx: &mut StepContext<'_>,
    id: EntityId,
    radius: u32,
    connectivity: Connectivity,
    prey: &[Species],
    accept: impl Fn(&Entity) -> bool,
) -> Result<Option<Entity>, WorldError> {
    let Some(pos) = world.get(id).map(|e| e.pos) else {
        return Ok(None);
    };
    let candidates: Vec<EntityId> = world
        .grid()
        .neighbours(pos, radius, connectivity, true)
        .into_iter()
        .filter(|&(other, species)| other != id && prey.contains(&species))
        .filter(|&(other, _)| world.get(other).is_some_and(&accept))
        .map(|(other, _)| other)
        .collect();
    let Some(victim) = ctx.pick(&candidates) else {
        return Ok(None);
    };
    let eaten = world.despawn(victim)?;
    ctx.stats().record_predation(eaten.species());
    trace!(tick = ctx.tick().0, predator = %id, prey = %victim, species = %eaten.species(), "eaten");
    Ok(Some(eaten))
}
