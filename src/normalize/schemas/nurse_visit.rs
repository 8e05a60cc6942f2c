use super::common::{ADMISSION_REF, ID_SYNTHETIC, PATIENT_NAME, VISIT_DATE, VISIT_STATUS, VISIT_STATUS_FIELD};
use super::Entity;
use crate::domain::{NurseVisit, RecordId};
use crate::normalize::alias::{AliasEntry, AliasTable};
use crate::normalize::reader::FieldReader;
use crate::normalize::EntitySchema;

pub const ID: AliasEntry = AliasEntry::new(
    "id",
    "PatientNurseVisitId",
    &[
        "patientNurseVisitId",
        "PatientNurseVisitId",
        "patient_nurse_visit_id",
        "nurseVisitId",
        "NurseVisitId",
        "nurse_visit_id",
        "Nurse_Visit_Id",
        "visitId",
        "VisitId",
        "visit_id",
        "id",
        "Id",
        "ID",
    ],
);

pub const NURSE_NAME: AliasEntry = AliasEntry::new(
    "nurseName",
    "NurseName",
    &[
        "nurseName",
        "NurseName",
        "nurse_name",
        "Nurse_Name",
        "attendedBy",
        "AttendedBy",
        "Nurse.NurseName",
        "Nurse.Name",
    ],
);

pub const CARE_PROVIDED: AliasEntry = AliasEntry::new(
    "careProvided",
    "CareProvided",
    &[
        "careProvided",
        "CareProvided",
        "care_provided",
        "Care_Provided",
        "procedure",
        "Procedure",
        "activity",
        "Activity",
    ],
);

pub const MEDICATION_GIVEN: AliasEntry = AliasEntry::new(
    "medicationGiven",
    "MedicationGiven",
    &[
        "medicationGiven",
        "MedicationGiven",
        "medication_given",
        "Medication_Given",
        "medicationAdministered",
        "MedicationAdministered",
    ],
);

pub const NOTES: AliasEntry = AliasEntry::new(
    "notes",
    "Notes",
    &["notes", "Notes", "nurseNotes", "NurseNotes", "nurse_notes", "remarks", "Remarks"],
);

pub const FIELDS: AliasTable = &[
    ID,
    ID_SYNTHETIC,
    ADMISSION_REF,
    PATIENT_NAME,
    NURSE_NAME,
    VISIT_DATE,
    VISIT_STATUS_FIELD,
    CARE_PROVIDED,
    MEDICATION_GIVEN,
    NOTES,
];

pub struct NurseVisitSchema;

impl EntitySchema for NurseVisitSchema {
    type Record = NurseVisit;

    const ENTITY: Entity = Entity::NurseVisit;

    fn fields() -> AliasTable {
        FIELDS
    }

    fn map(reader: &mut FieldReader<'_>) -> NurseVisit {
        NurseVisit {
            id: reader.record_id(&ID, &ID_SYNTHETIC),
            admission_id: reader.optional_integer(&ADMISSION_REF),
            patient_name: reader.text(&PATIENT_NAME),
            nurse_name: reader.text(&NURSE_NAME),
            visit_date: reader.text(&VISIT_DATE),
            status: reader.choice(&VISIT_STATUS_FIELD, &VISIT_STATUS),
            care_provided: reader.text(&CARE_PROVIDED),
            medication_given: reader.flag(&MEDICATION_GIVEN),
            notes: reader.optional_text(&NOTES),
        }
    }

    fn record_id(record: &mut NurseVisit) -> Option<&mut RecordId> {
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
    fn test_nurse_visit_defaults() {
        let payload = json!({"data": {"nurseVisits": [{"NurseName": "Anu", "MedicationGiven": 1, "Status": "done"}]}});
        let result = SchemaNormalizer::default().normalize_list::<NurseVisitSchema>(&payload);
        let visit = &result.records[0];

        assert_eq!(visit.id, RecordId::synthetic(1_000_000));
        assert_eq!(visit.admission_id, None);
        assert_eq!(visit.nurse_name, "Anu");
        assert_eq!(visit.status, VisitStatus::Completed);
        assert!(visit.medication_given);
        assert_eq!(visit.care_provided, "");
        assert_eq!(visit.notes, None);
    }

    #[test]
    fn test_unknown_visit_status_falls_back_to_scheduled() {
        let payload = json!([{"NurseName": "Anu", "Status": "in the garden"}]);
        let result = SchemaNormalizer::default().normalize_list::<NurseVisitSchema>(&payload);

        assert_eq!(result.records[0].status, VisitStatus::Scheduled);
        assert_eq!(result.diagnostics.len(), 1);
    }
}
