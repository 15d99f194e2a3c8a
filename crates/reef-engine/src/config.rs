//! Ecosystem configuration, validation, and error types.
//!
//! [`EcosystemConfig`] mirrors the JSON parameter document: one section
//! per species, grid extents, temperature bounds, and initial population
//! sizes. Keys the model cannot run without have no serde default, so a
//! missing or wrong-typed key fails at parse time with the key named in
//! the message. Tuning knobs (radii, energy caps, costs) are optional.
//!
//! [`validate()`](EcosystemConfig::validate) checks value ranges after
//! parsing; [`from_json_str`](EcosystemConfig::from_json_str) and
//! [`from_json_path`](EcosystemConfig::from_json_path) run both steps.

use std::error::Error;
use std::fmt;
use std::path::Path;

use reef_core::Species;
use reef_space::{Connectivity, EdgeBehavior, Lattice, SpaceError};
use serde::{Deserialize, Serialize};

/// Largest movement/sensing radius accepted.
pub const MAX_RADIUS: u32 = 64;

/// Largest `width * height` accepted. The grid allocates one slot per cell
/// up front.
pub const MAX_CELLS: u64 = 1 << 24;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while loading or validating an [`EcosystemConfig`].
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// The document is not valid JSON, or a required key is missing or
    /// has the wrong type.
    Parse {
        /// Parser message, naming the key and position.
        reason: String,
    },
    /// The configuration file could not be read.
    Io {
        /// Path that was read.
        path: String,
        /// OS error description.
        reason: String,
    },
    /// Grid extents are unusable.
    Space(SpaceError),
    /// A parameter is out of range.
    InvalidParameter {
        /// Dotted key path, e.g. `fish.reproduction_probability`.
        key: String,
        /// What is wrong with it.
        reason: String,
    },
}

impl ConfigError {
    fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { reason } => write!(f, "malformed configuration: {reason}"),
            Self::Io { path, reason } => write!(f, "cannot read {path}: {reason}"),
            Self::Space(e) => write!(f, "grid: {e}"),
            Self::InvalidParameter { key, reason } => {
                write!(f, "invalid parameter {key}: {reason}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse {
            reason: e.to_string(),
        }
    }
}

// ── Defaults ───────────────────────────────────────────────────────

fn one() -> f64 {
    1.0
}

fn yes() -> bool {
    true
}

fn radius_1() -> u32 {
    1
}

fn default_plankton_seeding_attempts() -> u32 {
    5
}

fn default_temperature_period() -> f64 {
    365.0
}

fn connectivity_of(moore: bool) -> Connectivity {
    if moore {
        Connectivity::Moore
    } else {
        Connectivity::VonNeumann
    }
}

// ── Species sections ───────────────────────────────────────────────

/// Plankton parameters (`plankton` section).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanktonParams {
    /// Ticks until a new plankton can first grow.
    pub time_to_grow: i64,
    /// Chance per tick that a mature plankton attempts to grow.
    pub grow_probability: f64,
    /// Growth is suppressed when more neighbour cells than this are occupied.
    pub max_non_empty_neighbour_cells_to_reproduce: u32,
    /// Nutritional density; grazers gain `gain_from_food * density`.
    #[serde(default = "PlanktonParams::default_density")]
    pub density: f64,
    /// Radius of the neighbourhood grown into.
    #[serde(default = "radius_1")]
    pub growth_radius: u32,
    /// 8-connected when set, 4-connected otherwise.
    #[serde(default = "yes")]
    pub moore: bool,
}

impl PlanktonParams {
    fn default_density() -> f64 {
        0.5
    }

    /// Neighbourhood shape.
    pub fn connectivity(&self) -> Connectivity {
        connectivity_of(self.moore)
    }
}

/// Jellyfish larva parameters (`jellyfish_larva` section).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LarvaParams {
    /// Ticks until the larva settles into a polyp.
    pub time_to_grow: i64,
    /// Energy at birth.
    #[serde(default = "LarvaParams::default_energy")]
    pub initial_energy: f64,
    /// Energy cap.
    #[serde(default = "LarvaParams::default_energy")]
    pub max_energy: f64,
    /// Energy spent per tick.
    #[serde(default = "one")]
    pub energy_cost: f64,
    /// Energy gained per plankton eaten.
    #[serde(default = "LarvaParams::default_gain")]
    pub gain_from_food: f64,
    /// How far the larva moves per tick.
    #[serde(default = "radius_1")]
    pub move_radius: u32,
    /// How far the larva can reach food.
    #[serde(default = "radius_1")]
    pub sense_radius: u32,
    /// 8-connected when set.
    #[serde(default = "yes")]
    pub moore: bool,
}

impl LarvaParams {
    fn default_energy() -> f64 {
        60.0
    }

    fn default_gain() -> f64 {
        5.0
    }

    /// Neighbourhood shape.
    pub fn connectivity(&self) -> Connectivity {
        connectivity_of(self.moore)
    }
}

/// Jellyfish polyp parameters (`jellyfish_polyp` section).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolypParams {
    /// Ticks until the first strobilation.
    pub time_to_grow: i64,
    /// Energy gained per plankton eaten.
    pub gain_from_food: f64,
    /// Energy at settlement.
    #[serde(default = "PolypParams::default_energy")]
    pub initial_energy: f64,
    /// Energy cap.
    #[serde(default = "PolypParams::default_energy")]
    pub max_energy: f64,
    /// Energy spent per tick.
    #[serde(default)]
    pub energy_cost: f64,
    /// How far the polyp can reach food.
    #[serde(default = "radius_1")]
    pub sense_radius: u32,
    /// Energy spent per medusa released.
    #[serde(default = "one")]
    pub strobilation_cost: f64,
    /// Ticks between strobilations. Defaults to `time_to_grow`.
    #[serde(default)]
    pub strobilation_interval: Option<i64>,
    /// 8-connected when set.
    #[serde(default = "yes")]
    pub moore: bool,
}

impl PolypParams {
    fn default_energy() -> f64 {
        50.0
    }

    /// Ticks between strobilations.
    pub fn strobilation_interval(&self) -> i64 {
        self.strobilation_interval.unwrap_or(self.time_to_grow)
    }

    /// Neighbourhood shape.
    pub fn connectivity(&self) -> Connectivity {
        connectivity_of(self.moore)
    }
}

/// Jellyfish medusa parameters (`jellyfish_medusa` section).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MedusaParams {
    /// Ticks until a new medusa can reproduce.
    pub time_to_grow: i64,
    /// Chance that a mating attempt with a partner in range succeeds.
    pub reproduce_probability: f64,
    /// Mean larvae per successful mating.
    pub reproduce_rate: f64,
    /// Energy per food item (scaled by density for plankton).
    pub gain_from_food: f64,
    /// Mating is suppressed when more neighbour cells than this hold animals.
    pub max_non_empty_neighbour_cells_to_reproduce: u32,
    /// Energy at birth.
    #[serde(default = "MedusaParams::default_energy")]
    pub initial_energy: f64,
    /// Energy cap.
    #[serde(default = "MedusaParams::default_energy")]
    pub max_energy: f64,
    /// Energy spent per tick.
    #[serde(default = "one")]
    pub energy_cost: f64,
    /// Spread of the larvae-per-mating distribution.
    #[serde(default = "MedusaParams::default_std_dev")]
    pub offspring_std_dev: f64,
    /// Maturity counter after a successful mating.
    #[serde(default = "MedusaParams::default_cooldown")]
    pub reproduction_cooldown: i64,
    /// How far the medusa moves per tick.
    #[serde(default = "MedusaParams::default_radius")]
    pub move_radius: u32,
    /// How far the medusa can reach food.
    #[serde(default = "MedusaParams::default_radius")]
    pub sense_radius: u32,
    /// How far the medusa looks for a partner.
    #[serde(default = "radius_1")]
    pub mate_radius: u32,
    /// 8-connected when set.
    #[serde(default = "yes")]
    pub moore: bool,
}

impl MedusaParams {
    fn default_energy() -> f64 {
        100.0
    }

    fn default_std_dev() -> f64 {
        0.8
    }

    fn default_cooldown() -> i64 {
        20
    }

    fn default_radius() -> u32 {
        3
    }

    /// Neighbourhood shape.
    pub fn connectivity(&self) -> Connectivity {
        connectivity_of(self.moore)
    }
}

/// Fish parameters (`fish` section).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FishParams {
    /// Ticks until a new fish can reproduce and hunt larvae.
    pub time_to_grow: i64,
    /// Energy per food item.
    pub gain_from_food: f64,
    /// Chance that a mating attempt with a partner in range succeeds.
    pub reproduction_probability: f64,
    /// Energy at birth (initial population only; offspring inherit).
    #[serde(default = "FishParams::default_energy")]
    pub initial_energy: f64,
    /// Energy cap.
    #[serde(default = "FishParams::default_energy")]
    pub max_energy: f64,
    /// Energy spent per tick.
    #[serde(default = "one")]
    pub energy_cost: f64,
    /// Relative weights of producing 1, 2, 3, ... offspring.
    #[serde(default = "FishParams::default_offspring_weights")]
    pub offspring_weights: Vec<f64>,
    /// Mating is suppressed when more neighbour cells than this hold animals.
    #[serde(default = "FishParams::default_crowding")]
    pub max_non_empty_neighbour_cells_to_reproduce: u32,
    /// Maturity counter after a successful mating.
    #[serde(default)]
    pub reproduction_cooldown: i64,
    /// How far the fish moves per tick.
    #[serde(default = "FishParams::default_radius")]
    pub move_radius: u32,
    /// How far the fish can reach food.
    #[serde(default = "FishParams::default_radius")]
    pub sense_radius: u32,
    /// How far the fish looks for a partner.
    #[serde(default = "radius_1")]
    pub mate_radius: u32,
    /// 8-connected when set.
    #[serde(default = "yes")]
    pub moore: bool,
}

impl FishParams {
    fn default_energy() -> f64 {
        200.0
    }

    fn default_offspring_weights() -> Vec<f64> {
        vec![0.4, 0.3, 0.2, 0.075, 0.025]
    }

    fn default_crowding() -> u32 {
        8
    }

    fn default_radius() -> u32 {
        4
    }

    /// Neighbourhood shape.
    pub fn connectivity(&self) -> Connectivity {
        connectivity_of(self.moore)
    }
}

/// Sea turtle parameters (`sea_turtle` section, optional).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleParams {
    /// Energy at birth.
    #[serde(default = "TurtleParams::default_energy")]
    pub initial_energy: f64,
    /// Energy cap.
    #[serde(default = "TurtleParams::default_energy")]
    pub max_energy: f64,
    /// Energy spent per tick.
    #[serde(default = "one")]
    pub energy_cost: f64,
    /// How far the turtle moves per tick.
    #[serde(default = "TurtleParams::default_radius")]
    pub move_radius: u32,
    /// How far the turtle can reach prey.
    #[serde(default = "TurtleParams::default_radius")]
    pub sense_radius: u32,
    /// 8-connected when set.
    #[serde(default = "yes")]
    pub moore: bool,
}

impl TurtleParams {
    fn default_energy() -> f64 {
        1000.0
    }

    fn default_radius() -> u32 {
        5
    }

    /// Neighbourhood shape.
    pub fn connectivity(&self) -> Connectivity {
        connectivity_of(self.moore)
    }
}

impl Default for TurtleParams {
    fn default() -> Self {
        Self {
            initial_energy: Self::default_energy(),
            max_energy: Self::default_energy(),
            energy_cost: 1.0,
            move_radius: Self::default_radius(),
            sense_radius: Self::default_radius(),
            moore: true,
        }
    }
}

/// Initial population sizes (`initial_population` section).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InitialPopulation {
    /// Medusae seeded at tick 0.
    pub jellyfish_medusa: u32,
    /// Polyps seeded at tick 0.
    pub jellyfish_polyp: u32,
    /// Larvae seeded at tick 0.
    pub jellyfish_larva: u32,
    /// Turtles seeded at tick 0.
    pub sea_turtle: u32,
    /// Fish seeded at tick 0.
    pub fish: u32,
    /// Plankton seeded at tick 0.
    pub plankton: u32,
}

impl InitialPopulation {
    /// Seed count for one species.
    pub fn of(&self, species: Species) -> u32 {
        match species {
            Species::Plankton => self.plankton,
            Species::JellyfishLarva => self.jellyfish_larva,
            Species::JellyfishPolyp => self.jellyfish_polyp,
            Species::JellyfishMedusa => self.jellyfish_medusa,
            Species::Fish => self.fish,
            Species::SeaTurtle => self.sea_turtle,
        }
    }

    /// Total seeded entities.
    pub fn total(&self) -> u64 {
        Species::ALL.iter().map(|&s| self.of(s) as u64).sum()
    }
}

// ── EcosystemConfig ────────────────────────────────────────────────

/// Complete parameter set for one simulation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EcosystemConfig {
    /// Grid columns.
    pub width: u32,
    /// Grid rows.
    pub height: u32,
    /// RNG seed. Same seed and parameters give the same run.
    #[serde(default)]
    pub seed: u64,
    /// Wrap neighbourhoods around the edges.
    #[serde(default)]
    pub torus: bool,
    /// Larva section.
    pub jellyfish_larva: LarvaParams,
    /// Polyp section.
    pub jellyfish_polyp: PolypParams,
    /// Medusa section.
    pub jellyfish_medusa: MedusaParams,
    /// Plankton section.
    pub plankton: PlanktonParams,
    /// Fish section.
    pub fish: FishParams,
    /// Turtle section.
    #[serde(default)]
    pub sea_turtle: TurtleParams,
    /// Upper end of the survivable temperature range.
    pub max_allowed_temperature: f64,
    /// Lower end of the survivable temperature range.
    pub min_allowed_temperature: f64,
    /// Peak of the seasonal temperature cycle.
    pub max_used_temperature: f64,
    /// Trough of the seasonal temperature cycle.
    pub min_used_temperature: f64,
    /// Random plankton placement attempts per tick.
    #[serde(default = "default_plankton_seeding_attempts")]
    pub plankton_seeding_attempts: u32,
    /// Length of the seasonal cycle in ticks.
    #[serde(default = "default_temperature_period")]
    pub temperature_period: f64,
    /// Population at tick 0.
    pub initial_population: InitialPopulation,
}

impl Default for EcosystemConfig {
    fn default() -> Self {
        Self {
            width: 50,
            height: 50,
            seed: 0,
            torus: false,
            jellyfish_larva: LarvaParams {
                time_to_grow: 10,
                initial_energy: LarvaParams::default_energy(),
                max_energy: LarvaParams::default_energy(),
                energy_cost: 1.0,
                gain_from_food: LarvaParams::default_gain(),
                move_radius: 1,
                sense_radius: 1,
                moore: true,
            },
            jellyfish_polyp: PolypParams {
                time_to_grow: 30,
                gain_from_food: 5.0,
                initial_energy: PolypParams::default_energy(),
                max_energy: PolypParams::default_energy(),
                energy_cost: 0.0,
                sense_radius: 1,
                strobilation_cost: 1.0,
                strobilation_interval: None,
                moore: true,
            },
            jellyfish_medusa: MedusaParams {
                time_to_grow: 20,
                reproduce_probability: 0.3,
                reproduce_rate: 4.0,
                gain_from_food: 10.0,
                max_non_empty_neighbour_cells_to_reproduce: 4,
                initial_energy: MedusaParams::default_energy(),
                max_energy: MedusaParams::default_energy(),
                energy_cost: 1.0,
                offspring_std_dev: MedusaParams::default_std_dev(),
                reproduction_cooldown: MedusaParams::default_cooldown(),
                move_radius: MedusaParams::default_radius(),
                sense_radius: MedusaParams::default_radius(),
                mate_radius: 1,
                moore: true,
            },
            plankton: PlanktonParams {
                time_to_grow: 5,
                grow_probability: 0.3,
                max_non_empty_neighbour_cells_to_reproduce: 4,
                density: PlanktonParams::default_density(),
                growth_radius: 1,
                moore: true,
            },
            fish: FishParams {
                time_to_grow: 25,
                gain_from_food: 8.0,
                reproduction_probability: 0.2,
                initial_energy: FishParams::default_energy(),
                max_energy: FishParams::default_energy(),
                energy_cost: 1.0,
                offspring_weights: FishParams::default_offspring_weights(),
                max_non_empty_neighbour_cells_to_reproduce: FishParams::default_crowding(),
                reproduction_cooldown: 0,
                move_radius: FishParams::default_radius(),
                sense_radius: FishParams::default_radius(),
                mate_radius: 1,
                moore: true,
            },
            sea_turtle: TurtleParams::default(),
            max_allowed_temperature: 40.0,
            min_allowed_temperature: -10.0,
            max_used_temperature: 25.0,
            min_used_temperature: 5.0,
            plankton_seeding_attempts: default_plankton_seeding_attempts(),
            temperature_period: default_temperature_period(),
            initial_population: InitialPopulation {
                jellyfish_medusa: 20,
                jellyfish_polyp: 10,
                jellyfish_larva: 10,
                sea_turtle: 2,
                fish: 30,
                plankton: 400,
            },
        }
    }
}

fn check_probability(key: &str, p: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(ConfigError::invalid(key, format!("{p} is not in [0, 1]")));
    }
    Ok(())
}

fn check_non_negative(key: &str, v: f64) -> Result<(), ConfigError> {
    if !v.is_finite() || v < 0.0 {
        return Err(ConfigError::invalid(
            key,
            format!("{v} must be finite and non-negative"),
        ));
    }
    Ok(())
}

fn check_positive(key: &str, v: f64) -> Result<(), ConfigError> {
    if !v.is_finite() || v <= 0.0 {
        return Err(ConfigError::invalid(
            key,
            format!("{v} must be finite and positive"),
        ));
    }
    Ok(())
}

fn check_radius(key: &str, r: u32) -> Result<(), ConfigError> {
    if r > MAX_RADIUS {
        return Err(ConfigError::invalid(
            key,
            format!("{r} exceeds maximum radius {MAX_RADIUS}"),
        ));
    }
    Ok(())
}

fn check_energy(section: &str, initial: f64, max: f64, cost: f64) -> Result<(), ConfigError> {
    check_non_negative(&format!("{section}.initial_energy"), initial)?;
    check_positive(&format!("{section}.max_energy"), max)?;
    check_non_negative(&format!("{section}.energy_cost"), cost)
}

impl EcosystemConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a JSON file.
    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json_str(&text)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Edge behavior selected by `torus`.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        EdgeBehavior::from_torus(self.torus)
    }

    /// Build the lattice described by `width`, `height`, and `torus`.
    pub fn lattice(&self) -> Result<Lattice, ConfigError> {
        Ok(Lattice::new(self.width, self.height, self.edge_behavior())?)
    }

    /// Check value ranges. Does not re-check anything serde already
    /// enforced (presence and type of keys).
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Grid extents.
        self.lattice()?;
        let cells = u64::from(self.width) * u64::from(self.height);
        if cells > MAX_CELLS {
            return Err(ConfigError::invalid(
                "width",
                format!(
                    "{}x{} = {cells} cells exceeds maximum {MAX_CELLS}",
                    self.width, self.height
                ),
            ));
        }

        // 2. Probabilities.
        check_probability(
            "jellyfish_medusa.reproduce_probability",
            self.jellyfish_medusa.reproduce_probability,
        )?;
        check_probability("plankton.grow_probability", self.plankton.grow_probability)?;
        check_probability(
            "fish.reproduction_probability",
            self.fish.reproduction_probability,
        )?;
        check_probability("plankton.density", self.plankton.density)?;

        // 3. Energy budgets and gains.
        let l = &self.jellyfish_larva;
        check_energy("jellyfish_larva", l.initial_energy, l.max_energy, l.energy_cost)?;
        check_non_negative("jellyfish_larva.gain_from_food", l.gain_from_food)?;
        let p = &self.jellyfish_polyp;
        check_energy("jellyfish_polyp", p.initial_energy, p.max_energy, p.energy_cost)?;
        check_non_negative("jellyfish_polyp.gain_from_food", p.gain_from_food)?;
        check_non_negative("jellyfish_polyp.strobilation_cost", p.strobilation_cost)?;
        let m = &self.jellyfish_medusa;
        check_energy("jellyfish_medusa", m.initial_energy, m.max_energy, m.energy_cost)?;
        check_non_negative("jellyfish_medusa.gain_from_food", m.gain_from_food)?;
        let f = &self.fish;
        check_energy("fish", f.initial_energy, f.max_energy, f.energy_cost)?;
        check_non_negative("fish.gain_from_food", f.gain_from_food)?;
        let t = &self.sea_turtle;
        check_energy("sea_turtle", t.initial_energy, t.max_energy, t.energy_cost)?;

        // 4. Offspring distributions.
        check_non_negative("jellyfish_medusa.reproduce_rate", m.reproduce_rate)?;
        check_non_negative("jellyfish_medusa.offspring_std_dev", m.offspring_std_dev)?;
        if f.offspring_weights.is_empty() {
            return Err(ConfigError::invalid(
                "fish.offspring_weights",
                "at least one weight is required",
            ));
        }
        for (i, &w) in f.offspring_weights.iter().enumerate() {
            check_non_negative(&format!("fish.offspring_weights[{i}]"), w)?;
        }
        if f.offspring_weights.iter().sum::<f64>() <= 0.0 {
            return Err(ConfigError::invalid(
                "fish.offspring_weights",
                "weights must not all be zero",
            ));
        }

        // 5. Counters.
        if p.strobilation_interval() < 0 {
            return Err(ConfigError::invalid(
                "jellyfish_polyp.strobilation_interval",
                "must not be negative",
            ));
        }
        if m.reproduction_cooldown < 0 || f.reproduction_cooldown < 0 {
            return Err(ConfigError::invalid(
                "reproduction_cooldown",
                "must not be negative",
            ));
        }

        // 6. Radii.
        check_radius("jellyfish_larva.move_radius", l.move_radius)?;
        check_radius("jellyfish_larva.sense_radius", l.sense_radius)?;
        check_radius("jellyfish_polyp.sense_radius", p.sense_radius)?;
        check_radius("jellyfish_medusa.move_radius", m.move_radius)?;
        check_radius("jellyfish_medusa.sense_radius", m.sense_radius)?;
        check_radius("jellyfish_medusa.mate_radius", m.mate_radius)?;
        check_radius("plankton.growth_radius", self.plankton.growth_radius)?;
        check_radius("fish.move_radius", f.move_radius)?;
        check_radius("fish.sense_radius", f.sense_radius)?;
        check_radius("fish.mate_radius", f.mate_radius)?;
        check_radius("sea_turtle.move_radius", t.move_radius)?;
        check_radius("sea_turtle.sense_radius", t.sense_radius)?;

        // 7. Temperature forcing.
        for (key, v) in [
            ("max_allowed_temperature", self.max_allowed_temperature),
            ("min_allowed_temperature", self.min_allowed_temperature),
            ("max_used_temperature", self.max_used_temperature),
            ("min_used_temperature", self.min_used_temperature),
        ] {
            if !v.is_finite() {
                return Err(ConfigError::invalid(key, format!("{v} is not finite")));
            }
        }
        if self.max_allowed_temperature <= self.min_allowed_temperature {
            return Err(ConfigError::invalid(
                "max_allowed_temperature",
                "must exceed min_allowed_temperature",
            ));
        }
        if self.max_used_temperature < self.min_used_temperature {
            return Err(ConfigError::invalid(
                "max_used_temperature",
                "must not be below min_used_temperature",
            ));
        }
        check_positive("temperature_period", self.temperature_period)?;

        Ok(())
    }
}
