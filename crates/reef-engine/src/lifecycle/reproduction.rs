//! Partner search, crowding, and offspring placement.

use reef_arena::NewEntity;
use reef_core::{Coord, EntityId, Sex, Species};
use reef_space::Connectivity;
use tracing::trace;

use crate::context::StepContext;
use crate::offspring::OffspringDistribution;
use crate::world::{World, WorldError};

/// The sex that looks for partners. Only one side of a pair initiates so
/// that a pair mates at most once per tick.
pub(crate) const INITIATING_SEX: Sex = Sex::Female;

/// Neighbour cells (radius 1, centre excluded) counted as crowded.
///
/// Animals count cells holding at least one non-food entity; plankton
/// (`count_food`) counts every occupied cell.
pub(crate) fn crowding(
    world: &World,
    center: Coord,
    connectivity: Connectivity,
    count_food: bool,
) -> usize {
    let grid = world.grid();
    grid.neighbourhood_cells(center, 1, connectivity, false)
        .into_iter()
        .filter(|&c| {
            if count_food {
                !grid.is_empty(c)
            } else {
                grid.has_non_food(c)
            }
        })
        .count()
}

/// A mature conspecific of the opposite sex within `radius` of `id`
/// (own cell included), chosen uniformly.
pub(crate) fn find_partner(
    world: &World,
    ctx: &mut StepContext<'_>,
    id: EntityId,
    radius: u32,
) -> Option<EntityId> {
    let me = world.get(id)?;
    let sex = me.sex()?;
    let partners: Vec<EntityId> = world
        .neighbours_of_species(me.pos, radius, me.connectivity, true, me.species())
        .into_iter()
        .filter(|&other| other != id)
        .filter(|&other| {
            world
                .get(other)
                .is_some_and(|e| e.is_mature() && e.sex() == Some(sex.opposite()))
        })
        .collect();
    ctx.pick(&partners)
}

/// Place up to `count` offspring on open cells around `parent_pos`
/// (radius 1, centre included). Openness is re-checked before each
/// placement; placement stops when no open cell is left.
///
/// Returns how many were placed.
pub(crate) fn place_offspring(
    world: &mut World,
    ctx: &mut StepContext<'_>,
    parent_pos: Coord,
    connectivity: Connectivity,
    count: u32,
    make: impl Fn(&mut StepContext<'_>, Coord) -> NewEntity,
) -> Result<u32, WorldError> {
    let mut placed = 0;
    for _ in 0..count {
        let open = world.open_cells(parent_pos, 1, connectivity, true);
        let Some(at) = ctx.pick(&open) else {
            break;
        };
        let child = make(ctx, at);
        let species = child.species();
        world.spawn(child)?;
        ctx.stats().record_birth(species);
        placed += 1;
    }
    Ok(placed)
}

/// Parameters of one sexed species' mating rule.
pub(crate) struct MatingRule<'r> {
    pub species: Species,
    pub mate_radius: u32,
    pub probability: f64,
    pub max_crowding: u32,
    pub cooldown: i64,
    pub litter: &'r OffspringDistribution,
}

/// Attempt a mating initiated by `id`.
///
/// Gates, in order: maturity, initiating sex, a partner in range, the
/// Bernoulli draw, local crowding, and at least one open cell. On success
/// both parents' energy is halved, the initiator's timer is reset to the
/// cooldown, and a litter is sampled and placed. `make` receives the
/// context, the cell, and the initiator's halved energy.
///
/// Returns the number of offspring placed.
pub(crate) fn mate(
    world: &mut World,
    ctx: &mut StepContext<'_>,
    id: EntityId,
    rule: &MatingRule<'_>,
    make: impl Fn(&mut StepContext<'_>, Coord, f64) -> NewEntity,
) -> Result<u32, WorldError> {
    let Some(me) = world.get(id) else {
        return Ok(0);
    };
    if me.species() != rule.species || !me.is_mature() || me.sex() != Some(INITIATING_SEX) {
        return Ok(0);
    }
    let (pos, connectivity) = (me.pos, me.connectivity);

    let Some(partner) = find_partner(world, ctx, id, rule.mate_radius) else {
        return Ok(0);
    };
    if !ctx.chance(rule.probability) {
        return Ok(0);
    }
    if crowding(world, pos, connectivity, false) > rule.max_crowding as usize {
        return Ok(0);
    }
    if world.open_cells(pos, 1, connectivity, true).is_empty() {
        return Ok(0);
    }

    let mut parent_energy = 0.0;
    if let Some(me) = world.get_mut(id) {
        me.energy /= 2.0;
        me.time_to_grow = rule.cooldown;
        parent_energy = me.energy;
    }
    if let Some(p) = world.get_mut(partner) {
        p.energy /= 2.0;
    }
    ctx.stats().matings += 1;

    let litter = rule.litter.sample(ctx.rng());
    let placed = place_offspring(world, ctx, pos, connectivity, litter, |ctx, at| {
        make(ctx, at, parent_energy)
    })?;
    trace!(
        tick = ctx.tick().0,
        %id,
        %partner,
        species = %rule.species,
        litter,
        placed,
        "mated"
    );
    Ok(placed)
}
