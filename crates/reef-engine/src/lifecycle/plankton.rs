//! Plankton: static food that spreads into empty neighbour cells.

use reef_core::{EntityId, Species};
use tracing::trace;

use super::newborn;
use super::reproduction::crowding;
use crate::context::StepContext;
use crate::world::{World, WorldError};

pub(super) fn step(
    world: &mut World,
    ctx: &mut StepContext<'_>,
    id: EntityId,
) -> Result<(), WorldError> {
    let params = &ctx.params().plankton;
    let Some(me) = world.get_mut(id) else {
        return Ok(());
    };
    me.time_to_grow = me.time_to_grow.saturating_sub(1);
    if !me.is_mature() {
        return Ok(());
    }
    let (pos, connectivity) = (me.pos, me.connectivity);

    if !ctx.chance(params.grow_probability) {
        return Ok(());
    }
    if crowding(world, pos, connectivity, true) > params.max_non_empty_neighbour_cells_to_reproduce as usize {
        return Ok(());
    }
    let cells = world
        .grid()
        .neighbourhood_cells(pos, params.growth_radius, connectivity, false);
    let Some(at) = ctx.pick(&cells) else {
        return Ok(());
    };
    if !world.grid().is_empty(at) {
        return Ok(());
    }

    let child = newborn(ctx.params(), Species::Plankton, at, ctx.rng());
    let child_id = world.spawn(child)?;
    ctx.stats().record_birth(Species::Plankton);
    if let Some(me) = world.get_mut(id) {
        me.time_to_grow = params.time_to_grow;
    }
    trace!(tick = ctx.tick().0, parent = %id, child = %child_id, %at, "plankton grew");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EcosystemConfig;
    use crate::lifecycle::test_support::Bench;
    use reef_core::Coord;

    fn always_grow() -> Bench {
        let mut cfg = EcosystemConfig::default();
        cfg.width = 5;
        cfg.height = 5;
        cfg.plankton.grow_probability = 1.0;
        cfg.plankton.time_to_grow = 1;
        cfg.plankton.max_non_empty_neighbour_cells_to_reproduce = 8;
        Bench::new(cfg)
    }

    #[test]
    fn grows_into_empty_neighbour_and_resets_timer() {
        let mut b = always_grow();
        let p = b.spawn(Species::Plankton, 2, 2);
        b.run(|w, ctx| step(w, ctx, p)).unwrap();
        assert_eq!(b.world.type_count(Species::Plankton), 2);
        assert_eq!(b.world.get(p).unwrap().time_to_grow, 1);
        let child = b
            .world
            .entities_of(Species::Plankton)
            .find(|v| v.id != p)
            .unwrap();
        let d = (child.pos.x - 2).abs().max((child.pos.y - 2).abs());
        assert_eq!(d, 1);
    }

    #[test]
    fn immature_plankton_does_not_grow() {
        let mut b = always_grow();
        let p = b.spawn(Species::Plankton, 2, 2);
        b.world.get_mut(p).unwrap().time_to_grow = 3;
        b.run(|w, ctx| step(w, ctx, p)).unwrap();
        assert_eq!(b.world.type_count(Species::Plankton), 1);
        assert_eq!(b.world.get(p).unwrap().time_to_grow, 2);
    }

    #[test]
    fn crowded_plankton_does_not_grow() {
        let mut cfg = EcosystemConfig::default();
        cfg.width = 3;
        cfg.height = 3;
        cfg.plankton.grow_probability = 1.0;
        cfg.plankton.time_to_grow = 0;
        cfg.plankton.max_non_empty_neighbour_cells_to_reproduce = 0;
        let mut b = Bench::new(cfg);
        let p = b.spawn(Species::Plankton, 1, 1);
        b.spawn(Species::Fish, 0, 0);
        b.run(|w, ctx| step(w, ctx, p)).unwrap();
        assert_eq!(b.world.type_count(Species::Plankton), 1);
    }

    #[test]
    fn never_grows_onto_occupied_cell() {
        let mut b = always_grow();
        let p = b.spawn(Species::Plankton, 0, 0);
        b.spawn(Species::Fish, 1, 0);
        b.spawn(Species::Fish, 0, 1);
        b.spawn(Species::Fish, 1, 1);
        for _ in 0..10 {
            b.run(|w, ctx| step(w, ctx, p)).unwrap();
        }
        assert_eq!(b.world.type_count(Species::Plankton), 1);
        assert!(b.world.grid().is_empty(Coord::new(2, 2)));
    }
}
