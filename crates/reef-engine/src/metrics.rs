//! Per-tick counters and timings.
//!
//! [`StepMetrics`] is filled in while a tick runs and handed back by
//! [`EcosystemClock::step()`](crate::EcosystemClock::step). Per-species
//! arrays are indexed by [`Species::index`].

use reef_core::Species;
use serde::Serialize;

/// Timing and event counts collected during a single tick.
///
/// Durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct StepMetrics {
    /// Wall-clock time for the entire tick.
    pub total_us: u64,
    /// Time spent activating entities.
    pub scheduler_us: u64,
    /// Time spent on temperature forcing and plankton top-up.
    pub environment_us: u64,
    /// Entities whose step function ran.
    pub activations: u64,
    /// Entities created this tick, by species. Includes strobilated
    /// medusae, settled polyps, and top-up plankton.
    pub births: [u64; Species::COUNT],
    /// Entities removed for energy below zero, by species.
    pub starvation_deaths: [u64; Species::COUNT],
    /// Entities eaten, by species.
    pub predation_deaths: [u64; Species::COUNT],
    /// Larvae that settled into polyps.
    pub transformations: u64,
    /// Medusae released by polyps.
    pub strobilations: u64,
    /// Successful matings (one per pair).
    pub matings: u64,
    /// Plankton placed by the per-tick top-up.
    pub plankton_seeded: u64,
    /// Live entities after the tick, by species.
    pub population: [usize; Species::COUNT],
    /// Species whose population fell to zero during this tick and had not
    /// been reported extinct before.
    pub extinctions: Vec<Species>,
}

impl StepMetrics {
    pub(crate) fn record_birth(&mut self, species: Species) {
        self.births[species.index()] += 1;
    }

    pub(crate) fn record_starvation(&mut self, species: Species) {
        self.starvation_deaths[species.index()] += 1;
    }

    pub(crate) fn record_predation(&mut self, species: Species) {
        self.predation_deaths[species.index()] += 1;
    }

    /// Births across all species.
    pub fn total_births(&self) -> u64 {
        self.births.iter().sum()
    }

    /// Deaths (starvation plus predation) across all species.
    ///
    /// A larva that settles is not counted; see
    /// [`transformations`](Self::transformations).
    pub fn total_deaths(&self) -> u64 {
        self.starvation_deaths.iter().sum::<u64>() + self.predation_deaths.iter().sum::<u64>()
    }

    /// Live entities across all species after the tick.
    pub fn total_population(&self) -> usize {
        self.population.iter().sum()
    }
}
