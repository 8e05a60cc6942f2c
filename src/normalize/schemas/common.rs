// Entries and vocabularies shared by several entities

use crate::domain::VisitStatus;
use crate::normalize::alias::AliasEntry;
use crate::normalize::enums::{EnumSpec, EnumVariantSet, KeywordRule};

/// Marker for placeholder ids; read back so canonical output maps onto itself
pub const ID_SYNTHETIC: AliasEntry = AliasEntry::new("idSynthetic", "", &["idSynthetic"]);

/// Reference from a child record to its room admission
pub const ADMISSION_REF: AliasEntry = AliasEntry::new(
    "admissionId",
    "RoomAdmissionId",
    &[
        "roomAdmissionId",
        "RoomAdmissionId",
        "room_admission_id",
        "Room_Admission_Id",
        "admissionId",
        "AdmissionId",
        "admission_id",
        "Admission_Id",
        "RoomAdmission.RoomAdmissionId",
    ],
);

pub const PATIENT_NAME: AliasEntry = AliasEntry::new(
    "patientName",
    "PatientName",
    &[
        "patientName",
        "PatientName",
        "patient_name",
        "Patient_Name",
        "fullName",
        "FullName",
        "full_name",
        "Patient.PatientName",
        "Patient.Name",
        "RoomAdmission.PatientName",
    ],
);

pub const VISIT_DATE: AliasEntry = AliasEntry::new(
    "visitDate",
    "VisitDate",
    &[
        "visitDate",
        "VisitDate",
        "visit_date",
        "Visit_Date",
        "visitDateTime",
        "VisitDateTime",
        "visitedOn",
        "VisitedOn",
    ],
);

pub const VISIT_STATUS_FIELD: AliasEntry = AliasEntry::new(
    "status",
    "Status",
    &["status", "Status", "visitStatus", "VisitStatus", "visit_status", "Visit_Status"],
);

pub const VISIT_STATUS: EnumSpec<VisitStatus> = EnumSpec {
    field: "status",
    sets: &[
        EnumVariantSet {
            value: VisitStatus::Cancelled,
            variants: &["cancelled", "canceled", "cancel", "missed", "no show", "no-show", "noshow"],
            keywords: &[KeywordRule::new(&["cancel"]), KeywordRule::new(&["miss"])],
        },
        EnumVariantSet {
            value: VisitStatus::Scheduled,
            variants: &["scheduled", "planned", "pending", "upcoming", "booked", "due"],
            keywords: &[KeywordRule::new(&["schedul"]), KeywordRule::new(&["plan"])],
        },
        EnumVariantSet {
            value: VisitStatus::Completed,
            variants: &["completed", "complete", "done", "visited", "finished", "attended", "seen"],
            keywords: &[KeywordRule::new(&["complet"]), KeywordRule::new(&["visited"])],
        },
    ],
    fallback: VisitStatus::Scheduled,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::Diagnostics;
    use serde_json::json;

    #[test]
    fn test_cancellation_wins_in_compound_visit_status() {
        let mut diagnostics = Diagnostics::new();
        let status = |raw: &str, d: &mut Diagnostics| VISIT_STATUS.normalize(Some(&json!(raw)), d);

        assert_eq!(status("Visit cancelled, not completed", &mut diagnostics), VisitStatus::Cancelled);
        assert_eq!(status("missed scheduled round", &mut diagnostics), VisitStatus::Cancelled);
        assert_eq!(status("Completed", &mut diagnostics), VisitStatus::Completed);
        assert!(diagnostics.is_empty());
    }
}
