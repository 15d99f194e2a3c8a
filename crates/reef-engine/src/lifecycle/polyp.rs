//! Jellyfish polyp: sessile grazer that buds off medusae.

use reef_core::{EntityId, Species};
use tracing::trace;

use super::feeding::eat_one;
use super::reproduction::place_offspring;
use super::{gain_energy, metabolise, newborn};
use crate::context::StepContext;
use crate::world::{World, WorldError};

pub(super) fn step(
    world: &mut World,
    ctx: &mut StepContext<'_>,
    id: EntityId,
) -> Result<(), WorldError> {
    let params = &ctx.params().jellyfish_polyp;
    let conn = params.connectivity();

    if !metabolise(world, ctx, id, params.energy_cost, true)? {
        return Ok(());
    }

    if world.get(id).is_some_and(|e| e.is_hungry())
        && eat_one(world, ctx, id, params.sense_radius, conn, &[Species::Plankton], |_| true)?.is_some()
    {
        gain_energy(world, id, params.gain_from_food);
    }

    let Some(pos) = world.get(id).filter(|e| e.is_mature()).map(|e| e.pos) else {
        return Ok(());
    };
    let released = place_offspring(world, ctx, pos, conn, 1, |ctx, at| {
        newborn(ctx.params(), Species::JellyfishMedusa, at, ctx.rng())
    })?;
    if released == 0 {
        return Ok(());
    }
    if let Some(me) = world.get_mut(id) {
        me.energy -= params.strobilation_cost;
        me.time_to_grow = params.strobilation_interval();
    }
    ctx.stats().strobilations += 1;
    trace!(tick = ctx.tick().0, polyp = %id, %pos, "strobilated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EcosystemConfig;
    use crate::lifecycle::test_support::Bench;

    fn bench() -> Bench {
        let mut cfg = EcosystemConfig::default();
        cfg.width = 5;
        cfg.height = 5;
        cfg.jellyfish_polyp.strobilation_interval = Some(7);
        Bench::new(cfg)
    }

    #[test]
    fn immature_polyp_only_counts_down() {
        let mut b = bench();
        let p = b.spawn(Species::JellyfishPolyp, 2, 2);
        b.run(|w, ctx| step(w, ctx, p)).unwrap();
        let e = b.world.get(p).unwrap();
        assert_eq!(e.time_to_grow, 29);
        assert_eq!(e.energy, 50.0);
        assert_eq!(b.world.type_count(Species::JellyfishMedusa), 0);
    }

    #[test]
    fn mature_polyp_strobilates_one_medusa() {
        let mut b = bench();
        let p = b.spawn(Species::JellyfishPolyp, 2, 2);
        b.world.get_mut(p).unwrap().time_to_grow = 1;
        b.run(|w, ctx| step(w, ctx, p)).unwrap();
        assert_eq!(b.world.type_count(Species::JellyfishMedusa), 1);
        let e = b.world.get(p).unwrap();
        assert_eq!(e.energy, 49.0);
        assert_eq!(e.time_to_grow, 7);
        assert_eq!(b.stats.strobilations, 1);
        let m = b.world.entities_of(Species::JellyfishMedusa).next().unwrap();
        let d = (m.pos.x - 2).abs().max((m.pos.y - 2).abs());
        assert_eq!(d, 1);
    }

    #[test]
    fn hungry_polyp_grazes() {
        let mut b = bench();
        let p = b.spawn(Species::JellyfishPolyp, 2, 2);
        b.world.get_mut(p).unwrap().energy = 20.0;
        let food = b.spawn(Species::Plankton, 3, 3);
        b.run(|w, ctx| step(w, ctx, p)).unwrap();
        assert!(!b.world.contains(food));
        assert_eq!(b.world.get(p).unwrap().energy, 25.0);
    }

    #[test]
    fn boxed_in_polyp_waits() {
        let mut cfg = EcosystemConfig::default();
        cfg.width = 1;
        cfg.height = 1;
        let mut b = Bench::new(cfg);
        let p = b.spawn(Species::JellyfishPolyp, 0, 0);
        b.world.get_mut(p).unwrap().time_to_grow = 0;
        b.run(|w, ctx| step(w, ctx, p)).unwrap();
        assert_eq!(b.world.type_count(Species::JellyfishMedusa), 0);
        assert_eq!(b.world.get(p).unwrap().time_to_grow, -1);
    }
}
