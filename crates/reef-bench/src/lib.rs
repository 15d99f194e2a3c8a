//! Benchmark profiles for the Reef food-web simulation.
//!
//! Provides pre-built [`EcosystemConfig`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 100x100 grid (10K cells) with the stock population
//! - [`stress_profile`]: 316x316 grid (~100K cells) with a proportionally larger population
//! - [`warmed_clock`]: a clock already advanced past its initial transient

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use reef_engine::{EcosystemClock, EcosystemConfig};

/// Build the reference benchmark profile: 100x100 bounded grid.
///
/// Stock species parameters with four times the default population, so
/// density matches the 50x50 default.
pub fn reference_profile(seed: u64) -> EcosystemConfig {
    scaled(100, 4, seed)
}

/// Build the stress benchmark profile: 316x316 bounded grid.
///
/// Same density as [`reference_profile`] at 10x the cell count.
pub fn stress_profile(seed: u64) -> EcosystemConfig {
    scaled(316, 40, seed)
}

fn scaled(side: u32, factor: u32, seed: u64) -> EcosystemConfig {
    let mut cfg = EcosystemConfig::default();
    cfg.width = side;
    cfg.height = side;
    cfg.seed = seed;
    let pop = &mut cfg.initial_population;
    pop.jellyfish_medusa *= factor;
    pop.jellyfish_polyp *= factor;
    pop.jellyfish_larva *= factor;
    pop.sea_turtle *= factor;
    pop.fish *= factor;
    pop.plankton *= factor;
    cfg.plankton_seeding_attempts *= factor;
    cfg
}

/// Build a clock from `config` and run `ticks` ticks.
///
/// # Panics
///
/// Panics if `config` is invalid.
pub fn warmed_clock(config: EcosystemConfig, ticks: u64) -> EcosystemClock {
    let mut clock = match EcosystemClock::new(config) {
        Ok(c) => c,
        Err(e) => panic!("benchmark profile rejected: {e}"),
    };
    clock.run(ticks);
    clock
}
