//! Random activation grouped by species.

use rand::seq::SliceRandom;
use reef_core::{EntityId, Species};

use crate::context::StepContext;
use crate::lifecycle;
use crate::world::{World, WorldError};

/// Activates every live entity once per tick.
///
/// Species are visited in a fixed order. Within a species, entities are
/// activated in a fresh random permutation each tick. All per-species
/// snapshots are taken before the first activation, so an entity created
/// during tick `T` is first activated in tick `T + 1`, whichever species
/// created it. An entity removed earlier in the tick is skipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivationScheduler {
    order: Vec<Species>,
}

impl Default for ActivationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivationScheduler {
    /// Activate all species in [`Species::ACTIVATION_ORDER`].
    pub fn new() -> Self {
        Self {
            order: Species::ACTIVATION_ORDER.to_vec(),
        }
    }

    /// Activate only the listed species. The relative order stays that of
    /// [`Species::ACTIVATION_ORDER`]; entities of other species stay inert.
    pub fn only(species: &[Species]) -> Self {
        Self {
            order: Species::ACTIVATION_ORDER
                .iter()
                .copied()
                .filter(|s| species.contains(s))
                .collect(),
        }
    }

    /// Species visited, in order.
    pub fn order(&self) -> &[Species] {
        &self.order
    }

    /// Run one activation pass.
    pub fn run(&self, world: &mut World, ctx: &mut StepContext<'_>) -> Result<(), WorldError> {
        let snapshots: Vec<Vec<EntityId>> = self
            .order
            .iter()
            .map(|&s| world.arena().snapshot(s))
            .collect();

        for mut ids in snapshots {
            ids.shuffle(ctx.rng());
            for id in ids {
                if !world.contains(id) {
                    continue;
                }
                ctx.stats().activations += 1;
                lifecycle::step_entity(world, ctx, id)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EcosystemConfig;
    use crate::lifecycle::test_support::Bench;

    #[test]
    fn only_keeps_fixed_order() {
        let s = ActivationScheduler::only(&[Species::Plankton, Species::JellyfishMedusa]);
        assert_eq!(s.order(), &[Species::JellyfishMedusa, Species::Plankton]);
        assert_eq!(ActivationScheduler::default().order().len(), Species::COUNT);
    }

    #[test]
    fn activates_each_live_entity_once() {
        let mut b = Bench::small();
        for x in 0..3 {
            b.spawn(Species::SeaTurtle, x, 0);
        }
        b.spawn(Species::JellyfishPolyp, 6, 6);
        let sched = ActivationScheduler::new();
        b.run(|w, ctx| sched.run(w, ctx)).unwrap();
        assert_eq!(b.stats.activations, 4);
    }

    #[test]
    fn filtered_scheduler_leaves_other_species_inert() {
        let mut b = Bench::small();
        let t = b.spawn(Species::SeaTurtle, 3, 3);
        let l = b.spawn(Species::JellyfishLarva, 0, 0);
        let sched = ActivationScheduler::only(&[Species::JellyfishLarva]);
        b.run(|w, ctx| sched.run(w, ctx)).unwrap();
        assert_eq!(b.world.get(t).unwrap().energy, 1000.0);
        assert_eq!(b.world.get(l).unwrap().energy, 59.0);
        assert_eq!(b.stats.activations, 1);
    }

    #[test]
    fn entities_born_this_tick_wait() {
        let mut b = Bench::small();
        let p = b.spawn(Species::JellyfishPolyp, 3, 3);
        b.world.get_mut(p).unwrap().time_to_grow = 1;
        let sched = ActivationScheduler::new();
        b.run(|w, ctx| sched.run(w, ctx)).unwrap();
        assert_eq!(b.world.type_count(Species::JellyfishMedusa), 1);
        // The medusa pass ran before the polyp pass, and the new medusa was
        // not in its snapshot.
        assert_eq!(b.stats.activations, 1);
        let m = b.world.entities_of(Species::JellyfishMedusa).next().unwrap();
        assert_eq!(m.energy, 100.0);
    }

    #[test]
    fn entities_eaten_earlier_in_the_tick_are_skipped() {
        let mut cfg = EcosystemConfig::default();
        cfg.width = 9;
        cfg.height = 9;
        cfg.jellyfish_medusa.move_radius = 0;
        let mut b = Bench::new(cfg);
        let m = b.spawn(Species::JellyfishMedusa, 4, 4);
        b.world.get_mut(m).unwrap().energy = 40.0;
        let p = b.spawn(Species::Plankton, 5, 4);
        let sched = ActivationScheduler::new();
        b.run(|w, ctx| sched.run(w, ctx)).unwrap();
        assert!(!b.world.contains(p));
        assert_eq!(b.stats.activations, 1);
    }
}
