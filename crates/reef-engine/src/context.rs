//! Per-tick context threaded through every lifecycle call.

use rand::seq::IndexedRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use reef_core::TickId;

use crate::config::EcosystemConfig;
use crate::metrics::StepMetrics;
use crate::rules::Rules;

/// Everything a step function may read or consume besides the world.
///
/// The RNG is the single random source of the run; lifecycle code draws
/// from it in activation order, which is what makes a seeded run
/// reproducible.
pub struct StepContext<'a> {
    rules: &'a Rules,
    rng: &'a mut ChaCha8Rng,
    tick: TickId,
    stats: &'a mut StepMetrics,
}

impl<'a> StepContext<'a> {
    /// Bundle the pieces for one tick.
    pub fn new(
        rules: &'a Rules,
        rng: &'a mut ChaCha8Rng,
        tick: TickId,
        stats: &'a mut StepMetrics,
    ) -> Self {
        Self {
            rules,
            rng,
            tick,
            stats,
        }
    }

    /// Parameters of the run.
    pub fn params(&self) -> &'a EcosystemConfig {
        self.rules.config()
    }

    /// Compiled rules.
    pub fn rules(&self) -> &'a Rules {
        self.rules
    }

    /// The shared random source.
    pub fn rng(&mut self) -> &mut ChaCha8Rng {
        &mut *self.rng
    }

    /// Tick being executed.
    pub fn tick(&self) -> TickId {
        self.tick
    }

    /// Counters for this tick.
    pub fn stats(&mut self) -> &mut StepMetrics {
        &mut *self.stats
    }

    /// Bernoulli draw. Always false for `p <= 0` or NaN, always true for
    /// `p >= 1`; only draws from the RNG in between.
    pub fn chance(&mut self, p: f64) -> bool {
        if p.is_nan() || p <= 0.0 {
            false
        } else if p >= 1.0 {
            true
        } else {
            self.rng.random_bool(p)
        }
    }

    /// Uniform pick from `items`, `None` when empty.
    pub fn pick<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        items.choose(&mut *self.rng).copied()
    }

    /// Uniform draw from `0..n`. `n` must be non-zero.
    pub fn below(&mut self, n: u32) -> u32 {
        self.rng.random_range(0..n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn with_ctx<R>(f: impl FnOnce(&mut StepContext<'_>) -> R) -> R {
        let rules = Rules::compile(EcosystemConfig::default()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut stats = StepMetrics::default();
        let mut ctx = StepContext::new(&rules, &mut rng, TickId(3), &mut stats);
        f(&mut ctx)
    }

    #[test]
    fn chance_edges_are_certain() {
        with_ctx(|ctx| {
            assert!(!ctx.chance(0.0));
            assert!(!ctx.chance(-1.0));
            assert!(!ctx.chance(f64::NAN));
            assert!(ctx.chance(1.0));
            assert!(ctx.chance(2.0));
        });
    }

    #[test]
    fn pick_from_empty_is_none() {
        with_ctx(|ctx| {
            let empty: [u32; 0] = [];
            assert_eq!(ctx.pick(&empty), None);
            assert_eq!(ctx.pick(&[7u32]), Some(7));
        });
    }

    #[test]
    fn accessors_expose_tick_and_params() {
        with_ctx(|ctx| {
            assert_eq!(ctx.tick(), TickId(3));
            assert_eq!(ctx.params().width, 50);
            ctx.stats().matings += 1;
            assert_eq!(ctx.stats().matings, 1);
            assert!(ctx.below(4) < 4);
        });
    }
}
