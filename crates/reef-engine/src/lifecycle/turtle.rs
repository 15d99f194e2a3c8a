//! Sea turtle: long-lived medusa predator.
//!
//! Turtles pay a per-tick cost but are never removed for low energy, and
//! they do not reproduce within the model.

use reef_core::{EntityId, Species};

use super::feeding::eat_one;
use super::movement::random_walk;
use super::{gain_energy, metabolise};
use crate::context::StepContext;
use crate::world::{World, WorldError};

pub(super) fn step(
    world: &mut World,
    ctx: &mut StepContext<'_>,
    id: EntityId,
) -> Result<(), WorldError> {
    let params = &ctx.params().sea_turtle;
    let conn = params.connectivity();

    random_walk(world, ctx, id, params.move_radius, conn, Species::JellyfishMedusa)?;
    if !metabolise(world, ctx, id, params.energy_cost, false)? {
        return Ok(());
    }

    if world.get(id).is_some_and(|e| e.is_hungry()) {
        if let Some(prey) = eat_one(
            world,
            ctx,
            id,
            params.sense_radius,
            conn,
            &[Species::JellyfishMedusa],
            |_| true,
        )? {
            gain_energy(world, id, prey.energy.max(0.0));
        }
    }
    Ok(())
}
