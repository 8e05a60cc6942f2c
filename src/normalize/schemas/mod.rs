//! Per-entity alias tables, enum vocabularies and record mappers.

use std::fmt;
use std::str::FromStr;

use crate::error::NormalizerError;

pub mod admission;
pub mod common;
pub mod dashboard;
pub mod doctor_visit;
pub mod nurse_visit;
pub mod room_capacity;
pub mod vitals;

pub use admission::AdmissionSchema;
pub use dashboard::DashboardSchema;
pub use doctor_visit::DoctorVisitSchema;
pub use lab_test::LabTestSchema;
pub use nurse_visit::NurseVisitSchema;
pub use room_capacity::RoomCapacitySchema;
pub use vitals::VitalsSchema;

/// Every entity the engine knows how to normalize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Entity {
    Admission,
    LabTest,
    DoctorVisit,
    NurseVisit,
    Vitals,
    RoomCapacity,
    Dashboard,
}

impl Entity {
    pub const ALL: [Entity; 7] = [
        Entity::Admission,
        Entity::LabTest,
        Entity::DoctorVisit,
        Entity::NurseVisit,
        Entity::Vitals,
        Entity::RoomCapacity,
        Entity::Dashboard,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Entity::Admission => "admission",
            Entity::LabTest => "lab-test",
            Entity::DoctorVisit => "doctor-visit",
            Entity::NurseVisit => "nurse-visit",
            Entity::Vitals => "vitals",
            Entity::RoomCapacity => "room-capacity",
            Entity::Dashboard => "dashboard",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Entity {
    type Err = NormalizerError;

    /// Accepts the kebab-case name as well as snake_case and compact spellings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();
        Entity::ALL
            .into_iter()
            .find(|entity| entity.name().replace('-', "") == wanted)
            .ok_or_else(|| NormalizerError::UnknownEntity(s.to_string()))
    }
}
