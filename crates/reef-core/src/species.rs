//! The closed set of species and their static classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every kind of entity that can live on the reef.
///
/// The jellyfish life cycle is split into three species because each
/// stage has a different capability set: larvae and medusae move, only
/// medusae carry a sex, only polyps strobilate. A stage change is
/// modelled as despawning one entity and spawning another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    /// Passive food source. Grows into neighbouring cells.
    Plankton,
    /// Free-swimming jellyfish larva.
    JellyfishLarva,
    /// Sessile jellyfish polyp. Strobilates medusae.
    JellyfishPolyp,
    /// Adult jellyfish. Reproduces sexually into larvae.
    JellyfishMedusa,
    /// Fish. Hunts larvae, reproduces sexually.
    Fish,
    /// Sea turtle. Apex predator of medusae.
    SeaTurtle,
}

impl Species {
    /// Number of species.
    pub const COUNT: usize = 6;

    /// All species, in [`index`](Self::index) order.
    pub const ALL: [Species; Self::COUNT] = [
        Species::Plankton,
        Species::JellyfishLarva,
        Species::JellyfishPolyp,
        Species::JellyfishMedusa,
        Species::Fish,
        Species::SeaTurtle,
    ];

    /// The fixed order in which species are activated within a tick.
    ///
    /// This is also the order in which the initial population is seeded.
    pub const ACTIVATION_ORDER: [Species; Self::COUNT] = [
        Species::JellyfishMedusa,
        Species::JellyfishPolyp,
        Species::JellyfishLarva,
        Species::SeaTurtle,
        Species::Fish,
        Species::Plankton,
    ];

    /// Dense index in `0..COUNT`, usable for per-species arrays.
    pub const fn index(self) -> usize {
        match self {
            Species::Plankton => 0,
            Species::JellyfishLarva => 1,
            Species::JellyfishPolyp => 2,
            Species::JellyfishMedusa => 3,
            Species::Fish => 4,
            Species::SeaTurtle => 5,
        }
    }

    /// Whether this species is a passive food source.
    ///
    /// Food sources never block movement or placement: a cell holding only
    /// food sources counts as open.
    pub const fn is_food_source(self) -> bool {
        matches!(self, Species::Plankton)
    }

    /// Whether individuals of this species carry a [`Sex`].
    pub const fn is_sexed(self) -> bool {
        matches!(self, Species::JellyfishMedusa | Species::Fish)
    }

    /// Human-readable plural label used for population series.
    pub const fn label(self) -> &'static str {
        match self {
            Species::Plankton => "Plankton",
            Species::JellyfishLarva => "Jellyfish Larvae",
            Species::JellyfishPolyp => "Jellyfish Polyps",
            Species::JellyfishMedusa => "Jellyfish Medusae",
            Species::Fish => "Fish",
            Species::SeaTurtle => "Sea Turtles",
        }
    }

    /// Key of this species' section in the JSON configuration document.
    pub const fn config_key(self) -> &'static str {
        match self {
            Species::Plankton => "plankton",
            Species::JellyfishLarva => "jellyfish_larva",
            Species::JellyfishPolyp => "jellyfish_polyp",
            Species::JellyfishMedusa => "jellyfish_medusa",
            Species::Fish => "fish",
            Species::SeaTurtle => "sea_turtle",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_key())
    }
}

/// Biological sex of a medusa or fish.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male. Waits to be found by a female.
    Male,
    /// Female. Initiates mating.
    Female,
}

impl Sex {
    /// The other sex.
    pub const fn opposite(self) -> Sex {
        match self {
            Sex::Male => Sex::Female,
            Sex::Female => Sex::Male,
        }
    }

    /// Draw a sex from a uniform sample in `[0, 1)`.
    ///
    /// Samples below one half are male.
    pub fn from_unit_sample(u: f64) -> Sex {
        if u < 0.5 {
            Sex::Male
        } else {
            Sex::Female
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => f.write_str("male"),
            Sex::Female => f.write_str("female"),
        }
    }
}
