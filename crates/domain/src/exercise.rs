use std::slice::Iter;

use derive_more::{AsRef, Deref, Display};

use crate::catalog;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: String,
    pub target_muscle: BodyArea,
    pub secondary_muscles: Vec<BodyArea>,
    pub movement: Movement,
    pub station: Station,
    pub description: String,
    pub tips: Vec<String>,
}

impl From<&catalog::Exercise> for Exercise {
    fn from(value: &catalog::Exercise) -> Self {
        Self {
            id: value.id.into(),
            name: value.name.to_string(),
            target_muscle: value.target_muscle,
            secondary_muscles: value.secondary_muscles.to_vec(),
            movement: value.movement,
            station: value.station,
            description: value.description.to_string(),
            tips: value.tips.iter().map(ToString::to_string).collect(),
        }
    }
}

#[derive(AsRef, Deref, Display, Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(String);

impl From<&str> for ExerciseID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ExerciseID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum BodyArea {
    Chest,
    Back,
    Legs,
    Shoulders,
    Arms,
    Abs,
    Corrective,
}

impl Property for BodyArea {
    fn iter() -> Iter<'static, BodyArea> {
        static BODY_AREAS: [BodyArea; 7] = [
            BodyArea::Chest,
            BodyArea::Back,
            BodyArea::Legs,
            BodyArea::Shoulders,
            BodyArea::Arms,
            BodyArea::Abs,
            BodyArea::Corrective,
        ];
        BODY_AREAS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            BodyArea::Chest => "Chest",
            BodyArea::Back => "Back",
            BodyArea::Legs => "Legs",
            BodyArea::Shoulders => "Shoulders",
            BodyArea::Arms => "Arms",
            BodyArea::Abs => "Abs",
            BodyArea::Corrective => "Corrective",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Movement {
    Push,
    Pull,
    Legs,
    Core,
    Corrective,
    Other,
}

impl Movement {
    /// Movement type an antagonist superset partner must have.
    ///
    /// Only push and pull have a true opposite. Every other type pairs with itself.
    #[must_use]
    pub fn antagonist(self) -> Movement {
        match self {
            Movement::Push => Movement::Pull,
            Movement::Pull => Movement::Push,
            Movement::Legs | Movement::Core | Movement::Corrective | Movement::Other => self,
        }
    }
}

impl Property for Movement {
    fn iter() -> Iter<'static, Movement> {
        static MOVEMENTS: [Movement; 6] = [
            Movement::Push,
            Movement::Pull,
            Movement::Legs,
            Movement::Core,
            Movement::Corrective,
            Movement::Other,
        ];
        MOVEMENTS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Movement::Push => "Push",
            Movement::Pull => "Pull",
            Movement::Legs => "Legs",
            Movement::Core => "Core",
            Movement::Corrective => "Corrective",
            Movement::Other => "Other",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Station {
    FreeWeights,
    Cable,
    Bodyweight,
    Machine,
}

impl Property for Station {
    fn iter() -> Iter<'static, Station> {
        static STATIONS: [Station; 4] = [
            Station::FreeWeights,
            Station::Cable,
            Station::Bodyweight,
            Station::Machine,
        ];
        STATIONS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Station::FreeWeights => "Free Weights",
            Station::Cable => "Cable",
            Station::Bodyweight => "Bodyweight",
            Station::Machine => "Machine",
        }
    }
}

/// Browse filter over the catalog. No body area means all exercises.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct ExerciseFilter {
    pub body_area: Option<BodyArea>,
}

impl ExerciseFilter {
    #[must_use]
    pub fn exercises<'a>(
        &self,
        exercises: impl Iterator<Item = &'a Exercise>,
    ) -> Vec<&'a Exercise> {
        exercises
            .filter(|e| self.body_area.is_none_or(|area| e.target_muscle == area))
            .collect()
    }

    #[must_use]
    pub fn body_area_list(&self) -> Vec<(BodyArea, bool)> {
        BodyArea::iter()
            .map(|a| (*a, self.body_area == Some(*a)))
            .collect::<Vec<_>>()
    }

    pub fn select_body_area(&mut self, body_area: Option<BodyArea>) {
        self.body_area = body_area;
    }
}

pub trait Property: Clone + Copy + Sized + 'static {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;

    #[must_use]
    fn from_name(name: &str) -> Option<Self> {
        Self::iter().copied().find(|p| p.name() == name)
    }
}
