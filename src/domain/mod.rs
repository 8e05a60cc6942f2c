// Canonical record shapes handed to the UI and transport layers

pub mod enums;
pub mod records;

pub use enums::{AdmissionStatus, CanonicalEnum, LabPriority, LabTestStatus, RoomType, VisitStatus};
pub use records::{
    Admission, DashboardMetrics, DoctorVisit, LabTest, NurseVisit, RecordId, RoomCapacity,
    VisitVitals,
};
