//! Simulation engine for Reef food-web worlds.
//!
//! Provides [`EcosystemClock`], which owns a [`World`] (entity registry
//! plus spatial grid), runs the per-species lifecycle rules once per tick
//! in randomised species-grouped order, applies seasonal temperature
//! forcing to plankton regrowth, and records a population time series.
//!
//! Configuration is a JSON document parsed into [`EcosystemConfig`]; all
//! randomness comes from a single seeded `ChaCha8Rng`, so a run is
//! reproducible from its configuration.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod clock;
pub mod config;
pub mod context;
pub mod forcing;
pub mod lifecycle;
pub mod metrics;
pub mod offspring;
pub mod rules;
pub mod scheduler;
pub mod series;
pub mod world;

pub use clock::EcosystemClock;
pub use config::{ConfigError, EcosystemConfig};
pub use context::StepContext;
pub use forcing::TemperatureForcing;
pub use metrics::StepMetrics;
pub use offspring::OffspringDistribution;
pub use rules::Rules;
pub use scheduler::ActivationScheduler;
pub use series::{PopulationSample, PopulationSeries};
pub use world::{EntityView, World, WorldError};
