//! Reusable configuration fixtures.
//!
//! - [`STOCK_DOCUMENT`]: a complete JSON parameter document.
//! - [`quiet_config`]: a valid configuration with no initial population
//!   and no plankton top-up, for hand-built scenarios.
//! - [`layout_hash`]: a digest of a clock's entity layout, for
//!   determinism checks.

use reef_engine::{EcosystemClock, EcosystemConfig};

/// A complete parameter document using only the required keys.
pub const STOCK_DOCUMENT: &str = r#"{
  "width": 100, "height": 100, "seed": 7, "torus": false,
  "jellyfish_larva":  { "time_to_grow": 10 },
  "jellyfish_polyp":  { "time_to_grow": 30, "gain_from_food": 5 },
  "jellyfish_medusa": { "time_to_grow": 20, "reproduce_probability": 0.3,
                        "reproduce_rate": 4.0, "gain_from_food": 10,
                        "max_non_empty_neighbour_cells_to_reproduce": 4 },
  "plankton":         { "time_to_grow": 5, "grow_probability": 0.3,
                        "max_non_empty_neighbour_cells_to_reproduce": 4 },
  "fish":             { "time_to_grow": 25, "gain_from_food": 8,
                        "reproduction_probability": 0.2 },
  "sea_turtle":       { },
  "max_allowed_temperature": 40, "min_allowed_temperature": -10,
  "max_used_temperature": 25, "min_used_temperature": 5,
  "initial_population": { "jellyfish_medusa": 20, "jellyfish_polyp": 10,
                          "jellyfish_larva": 10, "sea_turtle": 2,
                          "fish": 30, "plankton": 400 }
}"#;

/// Stock parameters on a `width` × `height` bounded grid with nothing
/// seeded and no per-tick plankton top-up.
pub fn quiet_config(width: u32, height: u32) -> EcosystemConfig {
    let mut cfg = EcosystemConfig::default();
    cfg.width = width;
    cfg.height = height;
    cfg.plankton_seeding_attempts = 0;
    cfg.initial_population = Default::default();
    cfg
}

/// Stock parameters scaled down to a `side` × `side` grid with a
/// proportionate initial population.
pub fn small_reef(side: u32, seed: u64) -> EcosystemConfig {
    let mut cfg = EcosystemConfig::default();
    cfg.width = side;
    cfg.height = side;
    cfg.seed = seed;
    let area = (side * side) as f64 / 2500.0;
    let scale = |n: u32| ((n as f64 * area).round() as u32).max(1);
    let pop = &mut cfg.initial_population;
    pop.jellyfish_medusa = scale(pop.jellyfish_medusa);
    pop.jellyfish_polyp = scale(pop.jellyfish_polyp);
    pop.jellyfish_larva = scale(pop.jellyfish_larva);
    pop.sea_turtle = scale(pop.sea_turtle);
    pop.fish = scale(pop.fish);
    pop.plankton = scale(pop.plankton);
    cfg
}

const FNV_OFFSET: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x100000001B3;

fn fnv1a(hash: &mut u64, bytes: &[u8]) {
    for &b in bytes {
        *hash ^= b as u64;
        *hash = hash.wrapping_mul(FNV_PRIME);
    }
}

/// FNV-1a digest of every live entity's id, species, cell, and energy,
/// in registry order.
pub fn layout_hash(clock: &EcosystemClock) -> u64 {
    let mut hash = FNV_OFFSET;
    for e in clock.entities() {
        fnv1a(&mut hash, &e.id.0.to_le_bytes());
        fnv1a(&mut hash, &(e.species.index() as u32).to_le_bytes());
        fnv1a(&mut hash, &e.pos.x.to_le_bytes());
        fnv1a(&mut hash, &e.pos.y.to_le_bytes());
        fnv1a(&mut hash, &e.energy.to_bits().to_le_bytes());
    }
    hash
}
