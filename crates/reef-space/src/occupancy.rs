//! Cell occupancy on top of a [`Lattice`].

use crate::connectivity::Connectivity;
use crate::error::SpaceError;
use crate::lattice::Lattice;
use indexmap::IndexMap;
use reef_core::{Coord, EntityId, Species};
use smallvec::SmallVec;

/// Occupants of one cell, in arrival order.
///
/// The species tag is cached beside the id so openness and species
/// filters can be answered without consulting the entity registry.
pub type CellContents = SmallVec<[(EntityId, Species); 4]>;

/// A lattice whose cells hold zero or more entities.
///
/// Every placed entity is listed in exactly one cell, and the grid keeps
/// a reverse index from id to cell rank so that moves and removals only
/// need the id. Misuse (placing twice, removing an absent id, placing out
/// of bounds) is reported as [`SpaceError`] and leaves the grid unchanged.
#[derive(Debug, Clone)]
pub struct SpatialGrid {
    lattice: Lattice,
    cells: Vec<CellContents>,
    /// Reverse index: entity → rank of the cell that lists it.
    locations: IndexMap<EntityId, usize>,
}

impl SpatialGrid {
    /// Create an empty grid over `lattice`.
    pub fn new(lattice: Lattice) -> Self {
        let n = lattice.cell_count();
        Self {
            lattice,
            cells: vec![CellContents::new(); n],
            locations: IndexMap::new(),
        }
    }

    /// The underlying topology.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Number of entities currently placed.
    pub fn placed_count(&self) -> usize {
        self.locations.len()
    }

    fn rank_of(&self, at: Coord) -> Result<usize, SpaceError> {
        self.lattice.check_bounds(at)?;
        Ok(at.y as usize * self.lattice.width() as usize + at.x as usize)
    }

    /// Place a new entity at `at`.
    pub fn place(&mut self, id: EntityId, species: Species, at: Coord) -> Result<(), SpaceError> {
        let rank = self.rank_of(at)?;
        if let Some(&existing) = self.locations.get(&id) {
            return Err(SpaceError::AlreadyPlaced {
                id,
                at: self.lattice.coord_of(existing),
            });
        }
        self.cells[rank].push((id, species));
        self.locations.insert(id, rank);
        Ok(())
    }

    /// Move a placed entity to `to`. Returns the cell it left.
    ///
    /// Moving onto the current cell is allowed and changes nothing.
    pub fn move_to(&mut self, id: EntityId, to: Coord) -> Result<Coord, SpaceError> {
        let dest = self.rank_of(to)?;
        let src = *self.locations.get(&id).ok_or(SpaceError::NotPlaced { id })?;
        if src != dest {
            let entry = self.detach(id, src).ok_or(SpaceError::NotPlaced { id })?;
            self.cells[dest].push(entry);
            self.locations.insert(id, dest);
        }
        Ok(self.lattice.coord_of(src))
    }

    /// Remove a placed entity. Returns the cell it occupied.
    pub fn remove(&mut self, id: EntityId) -> Result<Coord, SpaceError> {
        let src = self
            .locations
            .swap_remove(&id)
            .ok_or(SpaceError::NotPlaced { id })?;
        self.detach(id, src);
        Ok(self.lattice.coord_of(src))
    }

    fn detach(&mut self, id: EntityId, rank: usize) -> Option<(EntityId, Species)> {
        let cell = &mut self.cells[rank];
        let idx = cell.iter().position(|&(e, _)| e == id)?;
        Some(cell.remove(idx))
    }

    /// Where `id` is placed, if anywhere.
    pub fn position_of(&self, id: EntityId) -> Option<Coord> {
        self.locations.get(&id).map(|&r| self.lattice.coord_of(r))
    }

    /// Occupants of `at`. Empty for out-of-bounds coordinates.
    pub fn cell_contents(&self, at: Coord) -> &[(EntityId, Species)] {
        match self.lattice.rank(at) {
            Some(r) => self.cells[r].as_slice(),
            None => &[],
        }
    }

    /// Whether `at` holds no entities at all.
    pub fn is_empty(&self, at: Coord) -> bool {
        self.cell_contents(at).is_empty()
    }

    /// Whether `at` is empty or holds only food sources.
    ///
    /// Animals may move onto and coexist with plankton, so an open cell
    /// is a valid destination for movement and offspring placement.
    pub fn is_open(&self, at: Coord) -> bool {
        self.lattice.contains(at)
            && self
                .cell_contents(at)
                .iter()
                .all(|&(_, s)| s.is_food_source())
    }

    /// Whether `at` holds at least one entity that is not a food source.
    pub fn has_non_food(&self, at: Coord) -> bool {
        self.cell_contents(at)
            .iter()
            .any(|&(_, s)| !s.is_food_source())
    }

    /// Whether `at` holds at least one entity of `species`.
    pub fn has_species(&self, at: Coord, species: Species) -> bool {
        self.cell_contents(at).iter().any(|&(_, s)| s == species)
    }

    /// Cells within `radius` of `center`. See [`Lattice::neighbourhood`].
    pub fn neighbourhood_cells(
        &self,
        center: Coord,
        radius: u32,
        connectivity: Connectivity,
        include_center: bool,
    ) -> Vec<Coord> {
        self.lattice
            .neighbourhood(center, radius, connectivity, include_center)
    }

    /// All occupants of the cells within `radius` of `center`.
    ///
    /// Ordered by neighbourhood cell order, then arrival order within a
    /// cell.
    pub fn neighbours(
        &self,
        center: Coord,
        radius: u32,
        connectivity: Connectivity,
        include_center: bool,
    ) -> Vec<(EntityId, Species)> {
        self.lattice
            .neighbourhood(center, radius, connectivity, include_center)
            .into_iter()
            .flat_map(|c| self.cell_contents(c).iter().copied())
            .collect()
    }

    /// Iterate non-empty cells in row-major order.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (Coord, &[(EntityId, Species)])> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.is_empty())
            .map(|(r, cell)| (self.lattice.coord_of(r), cell.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::EdgeBehavior;
    use proptest::prelude::*;

    fn grid(w: u32, h: u32) -> SpatialGrid {
        SpatialGrid::new(Lattice::new(w, h, EdgeBehavior::Absorb).unwrap())
    }

    fn c(x: i32, y: i32) -> Coord {
        Coord::new(x, y)
    }

    // ── Placement tests ─────────────────────────────────────────

    #[test]
    fn place_and_query() {
        let mut g = grid(4, 4);
        g.place(EntityId(1), Species::Fish, c(1, 2)).unwrap();
        assert_eq!(g.cell_contents(c(1, 2)), &[(EntityId(1), Species::Fish)]);
        assert_eq!(g.position_of(EntityId(1)), Some(c(1, 2)));
        assert!(!g.is_empty(c(1, 2)));
        assert!(g.is_empty(c(0, 0)));
        assert_eq!(g.placed_count(), 1);
    }

    #[test]
    fn place_twice_is_rejected() {
        let mut g = grid(4, 4);
        g.place(EntityId(1), Species::Fish, c(0, 0)).unwrap();
        match g.place(EntityId(1), Species::Fish, c(3, 3)) {
            Err(SpaceError::AlreadyPlaced { id, at }) => {
                assert_eq!(id, EntityId(1));
                assert_eq!(at, c(0, 0));
            }
            other => panic!("expected AlreadyPlaced, got {other:?}"),
        }
        assert!(g.is_empty(c(3, 3)));
    }

    #[test]
    fn place_out_of_bounds_is_rejected() {
        let mut g = grid(4, 4);
        assert!(matches!(
            g.place(EntityId(1), Species::Plankton, c(4, 0)),
            Err(SpaceError::CoordOutOfBounds { .. })
        ));
        assert_eq!(g.placed_count(), 0);
    }

    #[test]
    fn multiple_occupants_coexist() {
        let mut g = grid(3, 3);
        g.place(EntityId(1), Species::Plankton, c(1, 1)).unwrap();
        g.place(EntityId(2), Species::Plankton, c(1, 1)).unwrap();
        g.place(EntityId(3), Species::SeaTurtle, c(1, 1)).unwrap();
        assert_eq!(g.cell_contents(c(1, 1)).len(), 3);
    }

    // ── Move / remove tests ─────────────────────────────────────

    #[test]
    fn move_updates_both_cells() {
        let mut g = grid(4, 4);
        g.place(EntityId(7), Species::JellyfishLarva, c(0, 0)).unwrap();
        let from = g.move_to(EntityId(7), c(2, 3)).unwrap();
        assert_eq!(from, c(0, 0));
        assert!(g.is_empty(c(0, 0)));
        assert_eq!(g.position_of(EntityId(7)), Some(c(2, 3)));
    }

    #[test]
    fn move_in_place_is_noop() {
        let mut g = grid(4, 4);
        g.place(EntityId(7), Species::Fish, c(1, 1)).unwrap();
        g.place(EntityId(8), Species::Fish, c(1, 1)).unwrap();
        g.move_to(EntityId(7), c(1, 1)).unwrap();
        assert_eq!(
            g.cell_contents(c(1, 1)),
            &[(EntityId(7), Species::Fish), (EntityId(8), Species::Fish)]
        );
    }

    #[test]
    fn move_unplaced_is_rejected() {
        let mut g = grid(4, 4);
        assert_eq!(
            g.move_to(EntityId(9), c(1, 1)),
            Err(SpaceError::NotPlaced { id: EntityId(9) })
        );
    }

    #[test]
    fn remove_clears_membership() {
        let mut g = grid(4, 4);
        g.place(EntityId(1), Species::Fish, c(1, 1)).unwrap();
        g.place(EntityId(2), Species::Plankton, c(1, 1)).unwrap();
        assert_eq!(g.remove(EntityId(1)).unwrap(), c(1, 1));
        assert_eq!(g.cell_contents(c(1, 1)), &[(EntityId(2), Species::Plankton)]);
        assert_eq!(g.position_of(EntityId(1)), None);
        assert!(matches!(
            g.remove(EntityId(1)),
            Err(SpaceError::NotPlaced { .. })
        ));
    }

    // ── Openness tests ──────────────────────────────────────────

    #[test]
    fn plankton_only_cell_is_open() {
        let mut g = grid(3, 3);
        g.place(EntityId(1), Species::Plankton, c(0, 0)).unwrap();
        assert!(g.is_open(c(0, 0)));
        assert!(!g.is_empty(c(0, 0)));
        assert!(!g.has_non_food(c(0, 0)));
        g.place(EntityId(2), Species::JellyfishPolyp, c(0, 0)).unwrap();
        assert!(!g.is_open(c(0, 0)));
        assert!(g.has_non_food(c(0, 0)));
    }

    #[test]
    fn out_of_bounds_is_never_open() {
        let g = grid(3, 3);
        assert!(!g.is_open(c(-1, 0)));
        assert!(g.cell_contents(c(5, 5)).is_empty());
    }

    #[test]
    fn neighbours_collects_occupants_of_ball() {
        let mut g = grid(5, 5);
        g.place(EntityId(1), Species::Plankton, c(2, 2)).unwrap();
        g.place(EntityId(2), Species::Fish, c(3, 3)).unwrap();
        g.place(EntityId(3), Species::Fish, c(4, 4)).unwrap();
        let n = g.neighbours(c(2, 2), 1, Connectivity::Moore, false);
        assert_eq!(n, vec![(EntityId(2), Species::Fish)]);
        let n = g.neighbours(c(2, 2), 1, Connectivity::Moore, true);
        assert_eq!(n.len(), 2);
        let n = g.neighbours(c(2, 2), 1, Connectivity::VonNeumann, false);
        assert!(n.is_empty());
        assert!(g.has_species(c(4, 4), Species::Fish));
    }

    #[test]
    fn occupied_cells_skips_empty() {
        let mut g = grid(3, 3);
        g.place(EntityId(1), Species::Plankton, c(2, 0)).unwrap();
        g.place(EntityId(2), Species::Plankton, c(0, 2)).unwrap();
        let cells: Vec<Coord> = g.occupied_cells().map(|(c, _)| c).collect();
        assert_eq!(cells, vec![c(2, 0), c(0, 2)]);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn every_placed_entity_listed_exactly_once(
            ops in prop::collection::vec((0u64..12, 0i32..6, 0i32..6, 0u8..3), 1..60),
        ) {
            let mut g = grid(6, 6);
            for (id, x, y, op) in ops {
                let id = EntityId(id);
                let _ = match op {
                    0 => g.place(id, Species::Fish, c(x, y)),
                    1 => g.move_to(id, c(x, y)).map(|_| ()),
                    _ => g.remove(id).map(|_| ()),
                };
            }
            let mut listed = 0;
            for (at, cell) in g.occupied_cells() {
                for &(id, _) in cell {
                    listed += 1;
                    prop_assert_eq!(g.position_of(id), Some(at));
                }
            }
            prop_assert_eq!(listed, g.placed_count());
        }
    }
}
