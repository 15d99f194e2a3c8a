//! Biased random walk.

use reef_core::{EntityId, Species};
use reef_space::Connectivity;

use crate::context::StepContext;
use crate::world::{World, WorldError};

/// Move `id` up to `radius` cells.
///
/// A hungry entity picks uniformly among the cells in range that hold
/// `target`. Otherwise, or when no such cell exists, it picks uniformly
/// among the open cells in range. With no candidate it stays put.
pub(crate) fn random_walk(
    world: &mut World,
    ctx: &mut StepContext<'_>,
    id: EntityId,
    radius: u32,
    connectivity: Connectivity,
    target: Species,
) -> Result<(), WorldError> {
    if radius == 0 {
        return Ok(());
    }
    let Some(entity) = world.get(id) else {
        return Ok(());
    };
    let (pos, hungry) = (entity.pos, entity.is_hungry());

    let mut candidates = if hungry {
        world.cells_with(pos, radius, connectivity, false, target)
    } else {
        Vec::new()
    };
    if candidates.is_empty() {
        candidates = world.open_cells(pos, radius, connectivity, false);
    }
    if let Some(to) = ctx.pick(&candidates) {
        world.relocate(id, to)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::test_support::Bench;
    use reef_core::Coord;

    #[test]
    fn hungry_walker_moves_onto_target() {
        let mut b = Bench::small();
        let larva = b.spawn(Species::JellyfishLarva, 3, 3);
        b.world.get_mut(larva).unwrap().energy = 10.0;
        b.spawn(Species::Plankton, 4, 2);
        b.run(|w, ctx| random_walk(w, ctx, larva, 1, Connectivity::Moore, Species::Plankton))
            .unwrap();
        assert_eq!(b.world.get(larva).unwrap().pos, Coord::new(4, 2));
    }

    #[test]
    fn sated_walker_ignores_target() {
        let mut b = Bench::small();
        let turtle = b.spawn(Species::SeaTurtle, 3, 3);
        for _ in 0..30 {
            b.run(|w, ctx| random_walk(w, ctx, turtle, 1, Connectivity::Moore, Species::Plankton))
                .unwrap();
            let pos = b.world.get(turtle).unwrap().pos;
            assert!(b.world.lattice().contains(pos));
        }
    }

    #[test]
    fn walker_moves_to_open_cell_within_radius() {
        let mut b = Bench::small();
        let fish = b.spawn(Species::Fish, 3, 3);
        b.run(|w, ctx| random_walk(w, ctx, fish, 2, Connectivity::VonNeumann, Species::JellyfishLarva))
            .unwrap();
        let pos = b.world.get(fish).unwrap().pos;
        let d = (pos.x - 3).abs() + (pos.y - 3).abs();
        assert!((1..=2).contains(&d), "moved to {pos}");
        b.world.check_consistency().unwrap();
    }

    #[test]
    fn boxed_in_walker_stays() {
        let mut b = Bench::small();
        let fish = b.spawn(Species::Fish, 0, 0);
        b.spawn(Species::JellyfishPolyp, 1, 0);
        b.spawn(Species::JellyfishPolyp, 0, 1);
        b.spawn(Species::JellyfishPolyp, 1, 1);
        b.run(|w, ctx| random_walk(w, ctx, fish, 1, Connectivity::Moore, Species::JellyfishLarva))
            .unwrap();
        assert_eq!(b.world.get(fish).unwrap().pos, Coord::new(0, 0));
    }

    #[test]
    fn zero_radius_never_moves() {
        let mut b = Bench::small();
        let fish = b.spawn(Species::Fish, 2, 2);
        b.run(|w, ctx| random_walk(w, ctx, fish, 0, Connectivity::Moore, Species::Plankton))
            .unwrap();
        assert_eq!(b.world.get(fish).unwrap().pos, Coord::new(2, 2));
    }
}
