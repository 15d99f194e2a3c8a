//! Fish: hunts larvae once mature, grazes otherwise, breeds in pairs.

use reef_core::{EntityId, Species};

use super::feeding::eat_one;
use super::movement::random_walk;
use super::reproduction::{mate, MatingRule};
use super::{gain_energy, metabolise, newborn};
use crate::context::StepContext;
use crate::world::{World, WorldError};

pub(super) fn step(
    world: &mut World,
    ctx: &mut StepContext<'_>,
    id: EntityId,
) -> Result<(), WorldError> {
    let params = &ctx.params().fish;
    let conn = params.connectivity();

    random_walk(world, ctx, id, params.move_radius, conn, Species::JellyfishLarva)?;
    if !metabolise(world, ctx, id, params.energy_cost, true)? {
        return Ok(());
    }

    if let Some(mature) = world.get(id).filter(|e| e.is_hungry()).map(|e| e.is_mature()) {
        let mut eaten = None;
        if mature {
            eaten = eat_one(world, ctx, id, params.sense_radius, conn, &[Species::JellyfishLarva], |_| true)?;
        }
        if eaten.is_none() {
            eaten = eat_one(world, ctx, id, params.sense_radius, conn, &[Species::Plankton], |_| true)?;
        }
        if eaten.is_some() {
            gain_energy(world, id, params.gain_from_food);
        }
    }

    let rule = MatingRule {
        species: Species::Fish,
        mate_radius: params.mate_radius,
        probability: params.reproduction_probability,
        max_crowding: params.max_non_empty_neighbour_cells_to_reproduce,
        cooldown: params.reproduction_cooldown,
        litter: ctx.rules().fish_offspring(),
    };
    mate(world, ctx, id, &rule, |ctx, at, parent_energy| {
        let mut fry = newborn(ctx.params(), Species::Fish, at, ctx.rng());
        fry.energy = parent_energy;
        fry
    })?;
    Ok(())
}
