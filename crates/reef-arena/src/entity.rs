//! Entity records.

use reef_core::{Coord, EntityId, Sex, Species};
use reef_space::Connectivity;

/// Species-specific payload of an [`Entity`].
///
/// A closed set: lifecycle dispatch is a `match` on this tag. A jellyfish
/// stage change replaces the whole entity rather than mutating the tag.
#[derive(Clone, Debug, PartialEq)]
pub enum EntityKind {
    /// Passive food. `density` scales the energy a grazer gains from it.
    Plankton {
        /// Nutritional density in `[0, 1]`.
        density: f64,
    },
    /// Jellyfish larva.
    Larva {
        /// Energy cap; below it the larva forages.
        max_energy: f64,
    },
    /// Jellyfish polyp.
    Polyp {
        /// Energy cap; below it the polyp feeds.
        max_energy: f64,
    },
    /// Jellyfish medusa.
    Medusa {
        /// Sex, fixed at birth.
        sex: Sex,
        /// Energy cap.
        max_energy: f64,
    },
    /// Fish.
    Fish {
        /// Sex, fixed at birth.
        sex: Sex,
        /// Energy cap.
        max_energy: f64,
    },
    /// Sea turtle.
    Turtle {
        /// Energy cap.
        max_energy: f64,
    },
}

impl EntityKind {
    /// The species this payload belongs to.
    pub fn species(&self) -> Species {
        match self {
            EntityKind::Plankton { .. } => Species::Plankton,
            EntityKind::Larva { .. } => Species::JellyfishLarva,
            EntityKind::Polyp { .. } => Species::JellyfishPolyp,
            EntityKind::Medusa { .. } => Species::JellyfishMedusa,
            EntityKind::Fish { .. } => Species::Fish,
            EntityKind::Turtle { .. } => Species::SeaTurtle,
        }
    }
}

/// A live inhabitant of the reef.
///
/// `energy` is signed: it may dip below zero after the per-tick cost, and
/// the lifecycle removes the entity before it acts again. `time_to_grow`
/// counts down once per tick and keeps counting past zero; the entity is
/// mature while it is at or below zero.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    /// Stable identifier.
    pub id: EntityId,
    /// Current cell. Mirrors the grid's record.
    pub pos: Coord,
    /// Current energy.
    pub energy: f64,
    /// Maturity countdown.
    pub time_to_grow: i64,
    /// Neighbourhood shape this entity senses and moves with.
    pub connectivity: Connectivity,
    /// Species payload.
    pub kind: EntityKind,
}

impl Entity {
    /// Species of this entity.
    pub fn species(&self) -> Species {
        self.kind.species()
    }

    /// Sex, for medusae and fish.
    pub fn sex(&self) -> Option<Sex> {
        match self.kind {
            EntityKind::Medusa { sex, .. } | EntityKind::Fish { sex, .. } => Some(sex),
            _ => None,
        }
    }

    /// Energy cap. Plankton has none.
    pub fn max_energy(&self) -> Option<f64> {
        match self.kind {
            EntityKind::Plankton { .. } => None,
            EntityKind::Larva { max_energy }
            | EntityKind::Polyp { max_energy }
            | EntityKind::Medusa { max_energy, .. }
            | EntityKind::Fish { max_energy, .. }
            | EntityKind::Turtle { max_energy } => Some(max_energy),
        }
    }

    /// Plankton density, for plankton.
    pub fn density(&self) -> Option<f64> {
        match self.kind {
            EntityKind::Plankton { density } => Some(density),
            _ => None,
        }
    }

    /// Below the energy cap.
    pub fn is_hungry(&self) -> bool {
        self.max_energy().is_some_and(|cap| self.energy < cap)
    }

    /// Maturity countdown has reached zero.
    pub fn is_mature(&self) -> bool {
        self.time_to_grow <= 0
    }
}

/// Everything needed to bring an entity into the world except its id.
///
/// The world allocates the id and places the entity on the grid in one
/// step, so callers never hold an id for an entity that does not exist.
#[derive(Clone, Debug, PartialEq)]
pub struct NewEntity {
    /// Cell to place the entity in.
    pub pos: Coord,
    /// Starting energy.
    pub energy: f64,
    /// Starting maturity countdown.
    pub time_to_grow: i64,
    /// Neighbourhood shape.
    pub connectivity: Connectivity,
    /// Species payload.
    pub kind: EntityKind,
}

impl NewEntity {
    /// Attach an allocated id.
    pub fn with_id(self, id: EntityId) -> Entity {
        Entity {
            id,
            pos: self.pos,
            energy: self.energy,
            time_to_grow: self.time_to_grow,
            connectivity: self.connectivity,
            kind: self.kind,
        }
    }

    /// Species of the entity to be created.
    pub fn species(&self) -> Species {
        self.kind.species()
    }
}
