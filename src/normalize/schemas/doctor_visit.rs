use super::common::{ADMISSION_REF, ID_SYNTHETIC, PATIENT_NAME, VISIT_DATE, VISIT_STATUS, VISIT_STATUS_FIELD};
use super::Entity;
use crate::domain::{DoctorVisit, RecordId};
use crate::normalize::alias::{AliasEntry, AliasTable};
use crate::normalize::reader::FieldReader;
use crate::normalize::EntitySchema;

pub const ID: AliasEntry = AliasEntry::new(
    "id",
    "PatientDoctorVisitId",
    &[
        "patientDoctorVisitId",
        "PatientDoctorVisitId",
        "patient_doctor_visit_id",
        "doctorVisitId",
        "DoctorVisitId",
        "doctor_visit_id",
        "Doctor_Visit_Id",
        "visitId",
        "VisitId",
        "visit_id",
        "id",
        "Id",
        "ID",
    ],
);

pub const DOCTOR_NAME: AliasEntry = AliasEntry::new(
    "doctorName",
    "DoctorName",
    &[
        "doctorName",
        "DoctorName",
        "doctor_name",
        "Doctor_Name",
        "physicianName",
        "PhysicianName",
        "Doctor.DoctorName",
        "Doctor.Name",
    ],
);

pub const FINDINGS: AliasEntry = AliasEntry::new(
    "findings",
    "Findings",
    &["findings", "Findings", "observations", "Observations", "doctorNotes", "DoctorNotes", "doctor_notes"],
);

pub const PRESCRIPTION: AliasEntry = AliasEntry::new(
    "prescription",
    "Prescription",
    &["prescription", "Prescription", "medications", "Medications", "medicines", "Medicines"],
);

pub const NEEDS_FOLLOW_UP: AliasEntry = AliasEntry::new(
    "needsFollowUp",
    "NeedsFollowUp",
    &[
        "needsFollowUp",
        "NeedsFollowUp",
        "needs_follow_up",
        "followUpRequired",
        "FollowUpRequired",
        "follow_up_required",
        "Follow_Up_Required",
    ],
);

pub const FOLLOW_UP_DATE: AliasEntry = AliasEntry::new(
    "followUpDate",
    "FollowUpDate",
    &["followUpDate", "FollowUpDate", "follow_up_date", "Follow_Up_Date", "reviewDate", "ReviewDate"],
);

pub const FIELDS: AliasTable = &[
    ID,
    ID_SYNTHETIC,
    ADMISSION_REF,
    PATIENT_NAME,
    DOCTOR_NAME,
    VISIT_DATE,
    VISIT_STATUS_FIELD,
    FINDINGS,
    PRESCRIPTION,
    NEEDS_FOLLOW_UP,
    FOLLOW_UP_DATE,
];

pub struct DoctorVisitSchema;

impl EntitySchema for DoctorVisitSchema {
    type Record = DoctorVisit;

    const ENTITY: Entity = Entity::DoctorVisit;

    fn fields() -> AliasTable {
        FIELDS
    }

    fn map(reader: &mut FieldReader<'_>) -> DoctorVisit {
        DoctorVisit {
            id: reader.record_id(&ID, &ID_SYNTHETIC),
            admission_id: reader.optional_integer(&ADMISSION_REF),
            patient_name: reader.text(&PATIENT_NAME),
            doctor_name: reader.text(&DOCTOR_NAME),
            visit_date: reader.text(&VISIT_DATE),
            status: reader.choice(&VISIT_STATUS_FIELD, &VISIT_STATUS),
            findings: reader.text(&FINDINGS),
            prescription: reader.text(&PRESCRIPTION),
            needs_follow_up: reader.flag(&NEEDS_FOLLOW_UP),
            follow_up_date: reader.optional_text(&FOLLOW_UP_DATE),
        }
    }

    fn record_id(record: &mut DoctorVisit) -> Option<&mut RecordId> {
        Some(&mut record.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VisitStatus;
    use crate::normalize::SchemaNormalizer;
    use serde_json::json;

    #[test]
    fn test_doctor_visit_snake_case_payload() {
        let payload = json!({
            "doctorVisits": [
                {
                    "visit_id": "88",
                    "admission_id": 31,
                    "Doctor": {"Name": "Dr. Rao"},
                    "visit_date": "2024-03-02T10:00:00Z",
                    "visit_status": "No-Show",
                    "follow_up_required": "Y",
                    "follow_up_date": null
                }
            ]
        });
        let result = SchemaNormalizer::default().normalize_list::<DoctorVisitSchema>(&payload);
        let visit = &result.records[0];

        assert_eq!(visit.id, RecordId::real(88));
        assert_eq!(visit.admission_id, Some(31));
        assert_eq!(visit.doctor_name, "Dr. Rao");
        assert_eq!(visit.visit_date, "2024-03-02T10:00:00Z");
        assert_eq!(visit.status, VisitStatus::Cancelled);
        assert!(visit.needs_follow_up);
        assert_eq!(visit.follow_up_date, None);
        assert!(result.diagnostics.is_empty());
    }
}
