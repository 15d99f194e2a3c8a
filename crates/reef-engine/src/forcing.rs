//! Seasonal temperature forcing of plankton regrowth.

use reef_core::TickId;

use crate::config::EcosystemConfig;

/// Deterministic temperature cycle and the plankton regrowth chance it
/// implies.
///
/// Temperature follows a sine wave between the configured used-range
/// bounds with period `temperature_period`. The regrowth chance rises with
/// temperature relative to the allowed range.
#[derive(Clone, Debug, PartialEq)]
pub struct TemperatureForcing {
    amplitude: f64,
    midpoint: f64,
    period: f64,
    allowed_span: f64,
}

impl TemperatureForcing {
    /// Build from a validated configuration.
    pub fn new(config: &EcosystemConfig) -> Self {
        Self {
            amplitude: (config.max_used_temperature - config.min_used_temperature) / 2.0,
            midpoint: (config.max_used_temperature + config.min_used_temperature) / 2.0,
            period: config.temperature_period,
            allowed_span: config.max_allowed_temperature - config.min_allowed_temperature,
        }
    }

    /// Temperature at `tick`.
    pub fn temperature(&self, tick: TickId) -> f64 {
        let phase = 2.0 * std::f64::consts::PI * tick.0 as f64 / self.period;
        self.amplitude * phase.sin() + self.midpoint
    }

    /// Chance that one top-up attempt places a plankton, in `[0, 1]`.
    ///
    /// Non-finite results (zero span) map to `0`.
    pub fn plankton_probability(&self, temperature: f64) -> f64 {
        let p = (std::f64::consts::FRAC_PI_2 * temperature / self.allowed_span).sin();
        if p.is_finite() {
            p.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}
