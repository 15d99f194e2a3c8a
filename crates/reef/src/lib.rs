//! Reef: an agent-based marine food-web simulation.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Reef sub-crates. For most users, adding `reef` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use reef::prelude::*;
//!
//! let mut config = EcosystemConfig::default();
//! config.width = 30;
//! config.height = 30;
//! config.seed = 42;
//!
//! let mut clock = EcosystemClock::new(config).unwrap();
//! let ended = clock.run_until(500, |c| c.get_type_count(Species::JellyfishMedusa) == 0);
//! assert!(ended <= 500);
//!
//! for view in clock.entities().take(3) {
//!     let _ = (view.pos, view.species);
//! }
//! let counts = clock.series().by_label();
//! assert_eq!(counts["Plankton"].len() as u64, ended);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `reef-core` | IDs, coordinates, species, invariant errors |
//! | [`space`] | `reef-space` | Lattice topology and cell occupancy |
//! | [`arena`] | `reef-arena` | Entity records and the entity registry |
//! | [`engine`] | `reef-engine` | Configuration, lifecycle rules, and the clock |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and IDs (`reef-core`).
///
/// Contains [`types::EntityId`], [`types::TickId`], [`types::Coord`],
/// [`types::Species`], [`types::Sex`], and [`types::InvariantViolation`].
pub use reef_core as types;

/// Lattice topology and cell occupancy (`reef-space`).
///
/// Provides [`space::Lattice`] for neighbourhood enumeration and
/// [`space::SpatialGrid`] for tracking which entities sit in which cell.
pub use reef_space as space;

/// Entity records and the registry (`reef-arena`).
pub use reef_arena as arena;

/// The simulation engine (`reef-engine`).
///
/// [`engine::EcosystemClock`] drives ticks; [`engine::EcosystemConfig`]
/// parses and validates the JSON parameter document.
pub use reef_engine as engine;

/// Common imports for typical Reef usage.
///
/// ```rust
/// use reef::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use reef_core::{Coord, EntityId, Sex, Species, TickId};

    // Space
    pub use reef_space::{Connectivity, EdgeBehavior};

    // Entities
    pub use reef_arena::{Entity, EntityKind};

    // Engine
    pub use reef_engine::{
        ConfigError, EcosystemClock, EcosystemConfig, EntityView, PopulationSeries, StepMetrics,
    };
}
