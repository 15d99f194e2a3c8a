//! Validated, ready-to-run rule set.

use crate::config::{ConfigError, EcosystemConfig};
use crate::offspring::OffspringDistribution;

/// Configuration plus the samplers derived from it.
///
/// Built once per clock by [`compile`](Rules::compile) so that per-tick
/// code never re-validates parameters or rebuilds distributions.
#[derive(Clone, Debug)]
pub struct Rules {
    config: EcosystemConfig,
    medusa_offspring: OffspringDistribution,
    fish_offspring: OffspringDistribution,
}

impl Rules {
    /// Validate `config` and build the litter-size samplers.
    pub fn compile(config: EcosystemConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let medusa_offspring = OffspringDistribution::truncated_normal(
            config.jellyfish_medusa.reproduce_rate,
            config.jellyfish_medusa.offspring_std_dev,
        );
        let fish_offspring =
            OffspringDistribution::weighted("fish.offspring_weights", &config.fish.offspring_weights)?;
        Ok(Self {
            config,
            medusa_offspring,
            fish_offspring,
        })
    }

    /// The validated configuration.
    pub fn config(&self) -> &EcosystemConfig {
        &self.config
    }

    /// Larvae per medusa mating.
    pub fn medusa_offspring(&self) -> &OffspringDistribution {
        &self.medusa_offspring
    }

    /// Fry per fish mating.
    pub fn fish_offspring(&self) -> &OffspringDistribution {
        &self.fish_offspring
    }
}
