//! The simulation loop.
//!
//! [`EcosystemClock`] owns a [`World`], the compiled [`Rules`], and the
//! run's single random source. Each [`step()`](EcosystemClock::step)
//! advances one tick:
//!
//! 1. increment the tick counter,
//! 2. activate every entity through the [`ActivationScheduler`],
//! 3. recompute the seasonal temperature,
//! 4. run the plankton top-up,
//! 5. record per-species counts into the [`PopulationSeries`].
//!
//! # Ownership model
//!
//! `EcosystemClock` is [`Send`] but all methods take `&mut self`; there
//! is no shared state and no background thread. A tick either completes
//! or panics on an engine defect; there is no partial tick to observe.

use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use reef_core::{Coord, Species, TickId};
use tracing::{debug, info, warn};

use crate::config::{ConfigError, EcosystemConfig};
use crate::context::StepContext;
use crate::forcing::TemperatureForcing;
use crate::lifecycle::newborn;
use crate::metrics::StepMetrics;
use crate::rules::Rules;
use crate::scheduler::ActivationScheduler;
use crate::series::PopulationSeries;
use crate::world::{EntityView, World, WorldError};

// Compile-time assertion: EcosystemClock is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<EcosystemClock>();
    }
};

/// A running food-web simulation.
///
/// # Example
///
/// ```
/// use reef_engine::{EcosystemClock, EcosystemConfig};
/// use reef_core::Species;
///
/// let mut clock = EcosystemClock::new(EcosystemConfig::default()).unwrap();
/// clock.run(10);
/// assert_eq!(clock.series().len(), 10);
/// let fish = clock.get_type_count(Species::Fish);
/// # let _ = fish;
/// ```
pub struct EcosystemClock {
    rules: Rules,
    world: World,
    scheduler: ActivationScheduler,
    forcing: TemperatureForcing,
    rng: ChaCha8Rng,
    tick: TickId,
    temperature: f64,
    series: PopulationSeries,
    last_metrics: StepMetrics,
    /// Species already reported extinct, or absent when the first tick
    /// began.
    extinct: [bool; Species::COUNT],
}

impl EcosystemClock {
    /// Validate `config` and seed the initial population.
    ///
    /// Species are seeded in [`Species::ACTIVATION_ORDER`], each entity on
    /// a uniformly random cell (several may share one).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration is invalid.
    ///
    /// # Panics
    ///
    /// Panics if seeding leaves the grid and registry inconsistent, which
    /// indicates an engine defect.
    pub fn new(config: EcosystemConfig) -> Result<Self, ConfigError> {
        let mut clock = Self::empty(config)?;
        if let Err(e) = clock.seed_population() {
            panic!("reef invariant violated while seeding: {e}");
        }
        let cfg = clock.rules.config();
        info!(
            width = cfg.width,
            height = cfg.height,
            torus = cfg.torus,
            seed = cfg.seed,
            population = clock.world.total_count(),
            "reef initialised"
        );
        Ok(clock)
    }

    /// Validate `config` and build a clock with an empty world.
    ///
    /// The initial population section is ignored; use
    /// [`world_mut()`](Self::world_mut) to set up a scenario.
    pub fn empty(config: EcosystemConfig) -> Result<Self, ConfigError> {
        let rules = Rules::compile(config)?;
        let lattice = rules.config().lattice()?;
        let forcing = TemperatureForcing::new(rules.config());
        let rng = ChaCha8Rng::seed_from_u64(rules.config().seed);
        let temperature = forcing.temperature(TickId(0));
        Ok(Self {
            rules,
            world: World::new(lattice),
            scheduler: ActivationScheduler::new(),
            forcing,
            rng,
            tick: TickId(0),
            temperature,
            series: PopulationSeries::new(),
            last_metrics: StepMetrics::default(),
            extinct: [false; Species::COUNT],
        })
    }

    /// Replace the activation scheduler.
    pub fn with_scheduler(mut self, scheduler: ActivationScheduler) -> Self {
        self.scheduler = scheduler;
        self
    }

    fn seed_population(&mut self) -> Result<(), WorldError> {
        let config = self.rules.config();
        for species in Species::ACTIVATION_ORDER {
            for _ in 0..config.initial_population.of(species) {
                let x = self.rng.random_range(0..config.width) as i32;
                let y = self.rng.random_range(0..config.height) as i32;
                let entity = newborn(config, species, Coord::new(x, y), &mut self.rng);
                self.world.spawn(entity)?;
            }
        }
        Ok(())
    }

    /// Advance one tick and return its metrics.
    ///
    /// # Panics
    ///
    /// Panics if a lifecycle rule misuses the grid or the registry, or
    /// (in debug builds) if they disagree after the tick. Both indicate an
    /// engine defect.
    pub fn step(&mut self) -> &StepMetrics {
        let tick_start = Instant::now();
        if self.tick == TickId(0) {
            // Scenario clocks are populated after construction.
            self.extinct = Species::ALL.map(|s| self.world.type_count(s) == 0);
        }
        self.tick = TickId(self.tick.0 + 1);
        let mut stats = StepMetrics::default();

        let sched_start = Instant::now();
        {
            let mut ctx = StepContext::new(&self.rules, &mut self.rng, self.tick, &mut stats);
            if let Err(e) = self.scheduler.run(&mut self.world, &mut ctx) {
                panic!("reef invariant violated at tick {}: {e}", self.tick.0);
            }
        }
        stats.scheduler_us = sched_start.elapsed().as_micros() as u64;

        let env_start = Instant::now();
        self.temperature = self.forcing.temperature(self.tick);
        let p = self.forcing.plankton_probability(self.temperature);
        {
            let mut ctx = StepContext::new(&self.rules, &mut self.rng, self.tick, &mut stats);
            if let Err(e) = top_up_plankton(&mut self.world, &mut ctx, p) {
                panic!("reef invariant violated at tick {}: {e}", self.tick.0);
            }
        }
        stats.environment_us = env_start.elapsed().as_micros() as u64;

        #[cfg(debug_assertions)]
        if let Err(v) = self.world.check_consistency() {
            panic!("reef invariant violated at tick {}: {v}", self.tick.0);
        }

        let counts = Species::ALL.map(|s| self.world.type_count(s));
        stats.population = counts;
        self.series.record(self.tick, counts);
        stats.extinctions = self.report_extinctions(&counts);

        stats.total_us = tick_start.elapsed().as_micros() as u64;
        debug!(
            tick = self.tick.0,
            population = stats.total_population(),
            births = stats.total_births(),
            deaths = stats.total_deaths(),
            temperature = self.temperature,
            "tick complete"
        );
        self.last_metrics = stats;
        &self.last_metrics
    }

    fn report_extinctions(&mut self, counts: &[usize; Species::COUNT]) -> Vec<Species> {
        let mut newly = Vec::new();
        for species in Species::ALL {
            let i = species.index();
            if counts[i] == 0 && !self.extinct[i] {
                self.extinct[i] = true;
                warn!(tick = self.tick.0, species = species.label(), "population extinct");
                newly.push(species);
            }
        }
        newly
    }

    /// Run `ticks` ticks.
    pub fn run(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.step();
        }
    }

    /// Run until `stop` returns true (checked after each tick) or
    /// `max_ticks` ticks have run. Returns the number of ticks run.
    pub fn run_until(&mut self, max_ticks: u64, mut stop: impl FnMut(&Self) -> bool) -> u64 {
        for n in 1..=max_ticks {
            self.step();
            if stop(self) {
                return n;
            }
        }
        max_ticks
    }

    // ── Accessors ───────────────────────────────────────────────────

    /// Live entities of `species`.
    pub fn get_type_count(&self, species: Species) -> usize {
        self.world.type_count(species)
    }

    /// Views of all live entities, for rendering.
    pub fn entities(&self) -> impl Iterator<Item = EntityView> + '_ {
        self.world.entities()
    }

    /// Counts recorded after every completed tick.
    pub fn series(&self) -> &PopulationSeries {
        &self.series
    }

    /// Metrics of the most recent tick (zeroed before the first).
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// Temperature computed for the current tick.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Ticks completed so far.
    pub fn current_tick(&self) -> TickId {
        self.tick
    }

    /// The run's parameters.
    pub fn config(&self) -> &EcosystemConfig {
        self.rules.config()
    }

    /// Compiled rules.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// The activation scheduler in use.
    pub fn scheduler(&self) -> &ActivationScheduler {
        &self.scheduler
    }

    /// The world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for scenario setup between ticks.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}

/// Random plankton placement attempts for one tick.
fn top_up_plankton(
    world: &mut World,
    ctx: &mut StepContext<'_>,
    probability: f64,
) -> Result<(), WorldError> {
    let (width, height) = (world.lattice().width(), world.lattice().height());
    for _ in 0..ctx.params().plankton_seeding_attempts {
        if !ctx.chance(probability) {
            continue;
        }
        let x = ctx.below(width) as i32;
        let y = ctx.below(height) as i32;
        let plankton = newborn(ctx.params(), Species::Plankton, Coord::new(x, y), ctx.rng());
        world.spawn(plankton)?;
        ctx.stats().record_birth(Species::Plankton);
        ctx.stats().plankton_seeded += 1;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> EcosystemConfig {
        let mut cfg = EcosystemConfig::default();
        cfg.width = 20;
        cfg.height = 20;
        cfg.initial_population.plankton = 60;
        cfg
    }

    #[test]
    fn new_seeds_initial_population() {
        let clock = EcosystemClock::new(small_config()).unwrap();
        let cfg = clock.config().clone();
        for s in Species::ALL {
            assert_eq!(clock.get_type_count(s), cfg.initial_population.of(s) as usize);
        }
        assert_eq!(clock.current_tick(), TickId(0));
        assert!(clock.series().is_empty());
        clock.world().check_consistency().unwrap();
    }

    #[test]
    fn empty_clock_has_no_entities() {
        let clock = EcosystemClock::empty(small_config()).unwrap();
        assert_eq!(clock.entities().count(), 0);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut cfg = small_config();
        cfg.height = 0;
        assert!(matches!(
            EcosystemClock::new(cfg),
            Err(ConfigError::Space(_))
        ));
    }

    #[test]
    fn step_advances_tick_and_records_series() {
        let mut clock = EcosystemClock::new(small_config()).unwrap();
        let m = clock.step().clone();
        assert_eq!(clock.current_tick(), TickId(1));
        assert_eq!(clock.series().len(), 1);
        assert_eq!(clock.series().latest().unwrap().tick, TickId(1));
        assert_eq!(m.total_population(), clock.world().total_count());
        assert!(m.activations > 0);
        assert_eq!(clock.last_metrics(), &m);
    }

    #[test]
    fn temperature_follows_tick() {
        let mut clock = EcosystemClock::empty(small_config()).unwrap();
        clock.run(3);
        let expected = TemperatureForcing::new(clock.config()).temperature(TickId(3));
        assert_eq!(clock.temperature(), expected);
    }

    #[test]
    fn top_up_seeds_plankton_on_empty_world() {
        let mut cfg = small_config();
        // Warm enough that every attempt succeeds.
        cfg.min_used_temperature = 50.0;
        cfg.max_used_temperature = 50.0;
        cfg.max_allowed_temperature = 25.0;
        cfg.min_allowed_temperature = -25.0;
        let mut clock = EcosystemClock::empty(cfg).unwrap();
        let m = clock.step().clone();
        assert_eq!(m.plankton_seeded, 5);
        assert_eq!(clock.get_type_count(Species::Plankton), 5);
    }

    #[test]
    fn cold_water_seeds_nothing() {
        let mut cfg = small_config();
        cfg.min_used_temperature = -10.0;
        cfg.max_used_temperature = -10.0;
        let mut clock = EcosystemClock::empty(cfg).unwrap();
        clock.run(5);
        assert_eq!(clock.get_type_count(Species::Plankton), 0);
    }

    #[test]
    fn run_until_stops_on_predicate() {
        let mut clock = EcosystemClock::new(small_config()).unwrap();
        let ran = clock.run_until(50, |c| c.current_tick().0 >= 4);
        assert_eq!(ran, 4);
        assert_eq!(clock.series().len(), 4);
        let ran = clock.run_until(3, |_| false);
        assert_eq!(ran, 3);
        assert_eq!(clock.current_tick(), TickId(7));
    }

    #[test]
    fn filtered_scheduler_is_used() {
        let clock = EcosystemClock::new(small_config())
            .unwrap()
            .with_scheduler(ActivationScheduler::only(&[Species::Plankton]));
        assert_eq!(clock.scheduler().order(), &[Species::Plankton]);
    }
}
