//! Per-species step functions.
//!
//! Every animal step has the same skeleton: move, pay the per-tick energy
//! cost and count the maturity timer down, die if energy went negative,
//! feed if still hungry, then run the species' maturity transition. The
//! shared pieces live in [`movement`], [`feeding`], and [`reproduction`];
//! the species files wire them together with their own parameters.
//!
//! Absence of prey, partners, or open cells is never an error. The only
//! errors are [`WorldError`]s, which indicate a defect.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use reef_arena::{EntityKind, NewEntity};
use reef_core::{Coord, EntityId, Sex, Species};
use tracing::trace;

use crate::config::EcosystemConfig;
use crate::context::StepContext;
use crate::world::{World, WorldError};

pub(crate) mod feeding;
pub(crate) mod movement;
pub(crate) mod reproduction;

mod fish;
mod larva;
mod medusa;
mod plankton;
mod polyp;
mod turtle;

/// Run one entity's step. Dead or unknown ids are skipped.
pub fn step_entity(
    world: &mut World,
    ctx: &mut StepContext<'_>,
    id: EntityId,
) -> Result<(), WorldError> {
    let Some(species) = world.get(id).map(|e| e.species()) else {
        return Ok(());
    };
    match species {
        Species::Plankton => plankton::step(world, ctx, id),
        Species::JellyfishLarva => larva::step(world, ctx, id),
        Species::JellyfishPolyp => polyp::step(world, ctx, id),
        Species::JellyfishMedusa => medusa::step(world, ctx, id),
        Species::Fish => fish::step(world, ctx, id),
        Species::SeaTurtle => turtle::step(world, ctx, id),
    }
}

/// A freshly created entity of `species` at `pos` with the configured
/// starting energy and maturity timer.
///
/// Draws one uniform sample from `rng` for sexed species and none
/// otherwise.
pub fn newborn(
    params: &EcosystemConfig,
    species: Species,
    pos: Coord,
    rng: &mut ChaCha8Rng,
) -> NewEntity {
    match species {
        Species::Plankton => {
            let p = &params.plankton;
            NewEntity {
                pos,
                energy: 0.0,
                time_to_grow: p.time_to_grow,
                connectivity: p.connectivity(),
                kind: EntityKind::Plankton { density: p.density },
            }
        }
        Species::JellyfishLarva => {
            let p = &params.jellyfish_larva;
            NewEntity {
                pos,
                energy: p.initial_energy,
                time_to_grow: p.time_to_grow,
                connectivity: p.connectivity(),
                kind: EntityKind::Larva {
                    max_energy: p.max_energy,
                },
            }
        }
        Species::JellyfishPolyp => {
            let p = &params.jellyfish_polyp;
            NewEntity {
                pos,
                energy: p.initial_energy,
                time_to_grow: p.time_to_grow,
                connectivity: p.connectivity(),
                kind: EntityKind::Polyp {
                    max_energy: p.max_energy,
                },
            }
        }
        Species::JellyfishMedusa => {
            let p = &params.jellyfish_medusa;
            NewEntity {
                pos,
                energy: p.initial_energy,
                time_to_grow: p.time_to_grow,
                connectivity: p.connectivity(),
                kind: EntityKind::Medusa {
                    sex: Sex::from_unit_sample(rng.random()),
                    max_energy: p.max_energy,
                },
            }
        }
        Species::Fish => {
            let p = &params.fish;
            NewEntity {
                pos,
                energy: p.initial_energy,
                time_to_grow: p.time_to_grow,
                connectivity: p.connectivity(),
                kind: EntityKind::Fish {
                    sex: Sex::from_unit_sample(rng.random()),
                    max_energy: p.max_energy,
                },
            }
        }
        Species::SeaTurtle => {
            let p = &params.sea_turtle;
            NewEntity {
                pos,
                energy: p.initial_energy,
                time_to_grow: 0,
                connectivity: p.connectivity(),
                kind: EntityKind::Turtle {
                    max_energy: p.max_energy,
                },
            }
        }
    }
}

/// Pay `cost`, tick the maturity timer, and remove the entity if its
/// energy fell below zero and `starves` is set.
///
/// Returns `false` when the entity is gone.
pub(crate) fn metabolise(
    world: &mut World,
    ctx: &mut StepContext<'_>,
    id: EntityId,
    cost: f64,
    starves: bool,
) -> Result<bool, WorldError> {
    let Some(entity) = world.get_mut(id) else {
        return Ok(false);
    };
    entity.energy -= cost;
    entity.time_to_grow = entity.time_to_grow.saturating_sub(1);
    if !(starves && entity.energy < 0.0) {
        return Ok(true);
    }
    let dead = world.despawn(id)?;
    ctx.stats().record_starvation(dead.species());
    trace!(tick = ctx.tick().0, %id, species = %dead.species(), "starved");
    Ok(false)
}

/// Add `gain` to a live entity's energy.
pub(crate) fn gain_energy(world: &mut World, id: EntityId, gain: f64) {
    if let Some(entity) = world.get_mut(id) {
        entity.energy += gain;
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::Bench;
    use super::*;

    #[test]
    fn newborn_uses_configured_energy_and_timer() {
        let mut b = Bench::small();
        let cfg = b.rules.config().clone();
        let n = newborn(&cfg, Species::Fish, Coord::new(1, 1), &mut b.rng);
        assert_eq!(n.energy, cfg.fish.initial_energy);
        assert_eq!(n.time_to_grow, cfg.fish.time_to_grow);
        assert_eq!(n.species(), Species::Fish);
        let n = newborn(&cfg, Species::SeaTurtle, Coord::new(1, 1), &mut b.rng);
        assert_eq!(n.energy, 1000.0);
        let n = newborn(&cfg, Species::Plankton, Coord::new(1, 1), &mut b.rng);
        assert_eq!(n.kind, EntityKind::Plankton { density: 0.5 });
    }

    #[test]
    fn metabolise_decrements_and_starves() {
        let mut b = Bench::small();
        let id = b.spawn(Species::JellyfishLarva, 3, 3);
        b.world.get_mut(id).unwrap().energy = 0.5;
        let alive = b.run(|w, ctx| metabolise(w, ctx, id, 1.0, true)).unwrap();
        assert!(!alive);
        assert!(!b.world.contains(id));
        assert_eq!(b.stats.starvation_deaths[Species::JellyfishLarva.index()], 1);
    }

    #[test]
    fn metabolise_without_starvation_keeps_entity() {
        let mut b = Bench::small();
        let id = b.spawn(Species::SeaTurtle, 3, 3);
        b.world.get_mut(id).unwrap().energy = 0.5;
        let alive = b.run(|w, ctx| metabolise(w, ctx, id, 1.0, false)).unwrap();
        assert!(alive);
        assert_eq!(b.world.get(id).unwrap().energy, -0.5);
    }

    #[test]
    fn step_entity_skips_dead_ids() {
        let mut b = Bench::small();
        b.run(|w, ctx| step_entity(w, ctx, EntityId(1234))).unwrap();
        assert_eq!(b.stats.activations, 0);
    }
}
