//! Jellyfish larva: forages for plankton, then settles as a polyp.

use reef_core::{EntityId, Species};
use tracing::trace;

use super::feeding::eat_one;
use super::movement::random_walk;
use super::{gain_energy, metabolise, newborn};
use crate::context::StepContext;
use crate::world::{World, WorldError};

pub(super) fn step(
    world: &mut World,
    ctx: &mut StepContext<'_>,
    id: EntityId,
) -> Result<(), WorldError> {
    let params = &ctx.params().jellyfish_larva;
    let conn = params.connectivity();

    random_walk(world, ctx, id, params.move_radius, conn, Species::Plankton)?;
    if !metabolise(world, ctx, id, params.energy_cost, true)? {
        return Ok(());
    }

    if world.get(id).is_some_and(|e| e.is_hungry())
        && eat_one(world, ctx, id, params.sense_radius, conn, &[Species::Plankton], |_| true)?.is_some()
    {
        gain_energy(world, id, params.gain_from_food);
    }

    if world.get(id).is_some_and(|e| e.is_mature()) {
        settle(world, ctx, id)?;
    }
    Ok(())
}

/// Replace the larva with a fresh polyp on the same cell.
fn settle(world: &mut World, ctx: &mut StepContext<'_>, id: EntityId) -> Result<(), WorldError> {
    let larva = world.despawn(id)?;
    let polyp = newborn(ctx.params(), Species::JellyfishPolyp, larva.pos, ctx.rng());
    let polyp_id = world.spawn(polyp)?;
    ctx.stats().transformations += 1;
    ctx.stats().record_birth(Species::JellyfishPolyp);
    trace!(tick = ctx.tick().0, larva = %id, polyp = %polyp_id, at = %larva.pos, "larva settled");
    Ok(())
}
