//! Jellyfish medusa: swimming adult that grazes, preys on young fish,
//! and spawns larvae.

use reef_arena::EntityKind;
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
    let params = &ctx.params().jellyfish_medusa;
    let conn = params.connectivity();

    random_walk(world, ctx, id, params.move_radius, conn, Species::Plankton)?;
    if !metabolise(world, ctx, id, params.energy_cost, true)? {
        return Ok(());
    }

    if world.get(id).is_some_and(|e| e.is_hungry()) {
        let eaten = eat_one(
            world,
            ctx,
            id,
            params.sense_radius,
            conn,
            &[Species::Plankton, Species::Fish],
            |prey| prey.species() != Species::Fish || !prey.is_mature(),
        )?;
        match eaten.map(|prey| prey.kind) {
            Some(EntityKind::Plankton { density }) => {
                gain_energy(world, id, params.gain_from_food * density)
            }
            Some(_) => gain_energy(world, id, params.gain_from_food),
            None => {}
        }
    }

    let rule = MatingRule {
        species: Species::JellyfishMedusa,
        mate_radius: params.mate_radius,
        probability: params.reproduce_probability,
        max_crowding: params.max_non_empty_neighbour_cells_to_reproduce,
        cooldown: params.reproduction_cooldown,
        litter: ctx.rules().medusa_offspring(),
    };
    mate(world, ctx, id, &rule, |ctx, at, _| {
        newborn(ctx.params(), Species::JellyfishLarva, at, ctx.rng())
    })?;
    Ok(())
}
