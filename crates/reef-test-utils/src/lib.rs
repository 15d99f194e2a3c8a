//! Test utilities and scenario builders for Reef development.
//!
//! Provides [`ReefBuilder`] for placing hand-picked entities on an
//! otherwise empty reef, plus configuration fixtures in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use reef_arena::{EntityKind, NewEntity};
use reef_core::{Coord, EntityId, Sex, Species};
use reef_engine::lifecycle::newborn;
use reef_engine::{EcosystemClock, EcosystemConfig};
use reef_space::EdgeBehavior;

pub use fixtures::{layout_hash, quiet_config, small_reef, STOCK_DOCUMENT};

/// One entity to place when the scenario is built.
#[derive(Clone, Debug)]
pub struct Placement {
    pub species: Species,
    pub pos: Coord,
    pub energy: Option<f64>,
    pub time_to_grow: Option<i64>,
    pub sex: Option<Sex>,
}

impl Placement {
    pub fn new(species: Species, x: i32, y: i32) -> Self {
        Self {
            species,
            pos: Coord::new(x, y),
            energy: None,
            time_to_grow: None,
            sex: None,
        }
    }

    pub fn energy(mut self, energy: f64) -> Self {
        self.energy = Some(energy);
        self
    }

    /// Set the maturity timer; `0` makes the entity mature now.
    pub fn time_to_grow(mut self, ttg: i64) -> Self {
        self.time_to_grow = Some(ttg);
        self
    }

    pub fn sex(mut self, sex: Sex) -> Self {
        self.sex = Some(sex);
        self
    }

    fn into_new_entity(self, config: &EcosystemConfig, rng: &mut ChaCha8Rng) -> NewEntity {
        let mut e = newborn(config, self.species, self.pos, rng);
        if let Some(energy) = self.energy {
            e.energy = energy;
        }
        if let Some(ttg) = self.time_to_grow {
            e.time_to_grow = ttg;
        }
        if let Some(want) = self.sex {
            if let EntityKind::Medusa { sex, .. } | EntityKind::Fish { sex, .. } = &mut e.kind {
                *sex = want;
            }
        }
        e
    }
}

/// Builder for a reef with hand-placed entities.
///
/// Starts from [`quiet_config`]: nothing is seeded and the plankton
/// top-up is off unless re-enabled through [`configure`](Self::configure).
pub struct ReefBuilder {
    config: EcosystemConfig,
    placements: Vec<Placement>,
}

impl ReefBuilder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            config: quiet_config(width, height),
            placements: Vec::new(),
        }
    }

    pub fn edges(mut self, edge: EdgeBehavior) -> Self {
        self.config.torus = edge == EdgeBehavior::Wrap;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Edit the configuration in place.
    pub fn configure(mut self, f: impl FnOnce(&mut EcosystemConfig)) -> Self {
        f(&mut self.config);
        self
    }

    pub fn place(mut self, placement: Placement) -> Self {
        self.placements.push(placement);
        self
    }

    pub fn config(&self) -> &EcosystemConfig {
        &self.config
    }

    /// Build the clock and the ids of the placed entities, in placement
    /// order.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid or a placement is out of
    /// bounds.
    pub fn build(self) -> (EcosystemClock, Vec<EntityId>) {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed ^ 0x5eed);
        let mut clock = match EcosystemClock::empty(self.config.clone()) {
            Ok(c) => c,
            Err(e) => panic!("invalid scenario config: {e}"),
        };
        let mut ids = Vec::with_capacity(self.placements.len());
        for p in self.placements {
            let pos = p.pos;
            let entity = p.into_new_entity(&self.config, &mut rng);
            match clock.world_mut().spawn(entity) {
                Ok(id) => ids.push(id),
                Err(e) => panic!("cannot place entity at {pos}: {e}"),
            }
        }
        (clock, ids)
    }
}
