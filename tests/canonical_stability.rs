use serde::Serialize;
use serde_json::{json, Value};
use std::fmt::Debug;

use ward_normalizer::domain::RecordId;
use ward_normalizer::normalize::alias::table_conflicts;
use ward_normalizer::normalize::outbound::outbound_for;
use ward_normalizer::normalize::schemas::{
    AdmissionSchema, DashboardSchema, DoctorVisitSchema, LabTestSchema, NurseVisitSchema, RoomCapacitySchema,
    VitalsSchema,
};
use ward_normalizer::normalize::{EntitySchema, REGISTRY};
use ward_normalizer::{Entity, SchemaNormalizer};

/// Canonical output fed back through the same mapper must come out unchanged
fn assert_stable<S>(payload: Value)
where
    S: EntitySchema,
    S::Record: PartialEq + Debug + Serialize,
{
    let normalizer = SchemaNormalizer::default();
    let first = normalizer.normalize_list::<S>(&payload).records;
    assert!(!first.is_empty(), "fixture produced no records");

    let canonical = serde_json::to_value(&first).unwrap();
    let second = normalizer.normalize_list::<S>(&canonical);
    assert_eq!(second.records, first);
    assert!(second.diagnostics.is_empty(), "{:?}", second.diagnostics);

    for (record, value) in first.iter().zip(canonical.as_array().unwrap()) {
        let single = normalizer.normalize_one::<S>(value).records;
        assert_eq!(single.as_ref(), Some(record));
    }
}

#[test]
fn admissions_are_stable() {
    assert_stable::<AdmissionSchema>(json!({"data": [
        {"Room_Type": "special shared room", "Bed_No": "12B", "Age": "47", "Status": "ADMITTED"},
        {
            "RoomAdmissionId": 5,
            "Patient": {"PatientId": "P-5", "Name": "Asha", "Gender": "F"},
            "RoomNo": 301,
            "RoomCategory": "private",
            "DischargeDate": "2024-04-02",
            "AdmissionStatus": "Discharged Home",
            "DoctorName": "Dr. Iyer",
            "PhoneNumber": "98450 00000",
            "IsIsolated": true,
            "Remarks": "diabetic"
        },
        {"status": "transfer requested", "roomType": "icu"}
    ]}));
}

#[test]
fn lab_tests_are_stable() {
    assert_stable::<LabTestSchema>(json!({"labTests": [
        {
            "LabTestId": 77,
            "AdmissionId": 5,
            "LabTest": {"TestName": "Lipid Panel", "Category": "Biochemistry"},
            "Status": "in-progress",
            "Urgency": "urgent",
            "RequestedBy": "Dr. Iyer",
            "OrderDate": "2024-04-01",
            "ResultDate": "2024-04-02",
            "TestResult": 180,
            "ReferenceRange": "<200",
            "AbnormalFlag": "Y"
        },
        {"test_name": "CRP", "status": "cancelled by ward"}
    ]}));
}

#[test]
fn doctor_visits_are_stable() {
    assert_stable::<DoctorVisitSchema>(json!([
        {
            "PatientDoctorVisitId": 12,
            "RoomAdmissionId": 5,
            "PatientName": "Asha",
            "DoctorName": "Dr. Iyer",
            "VisitDate": "2024-04-01T08:00:00Z",
            "VisitStatus": "seen",
            "Observations": "stable",
            "Medications": "metformin",
            "FollowUpRequired": "yes",
            "ReviewDate": "2024-04-08"
        },
        {"doctor_name": "Dr. Rao"}
    ]));
}

#[test]
fn nurse_visits_are_stable() {
    assert_stable::<NurseVisitSchema>(json!({"nurseVisits": [
        {
            "NurseVisitId": 40,
            "admissionId": 5,
            "NurseName": "Anu",
            "VisitDate": "2024-04-01T21:00:00Z",
            "Status": "missed",
            "Procedure": "dressing change",
            "MedicationGiven": "on",
            "NurseNotes": "patient asleep"
        },
        {}
    ]}));
}

#[test]
fn vitals_are_stable() {
    assert_stable::<VitalsSchema>(json!({"data": {"visitVitals": [
        {"VitalId": 3, "Temperature": "98.6", "Pulse": 72, "BP": "120/80", "SpO2": 97, "WeightKg": "61.5"},
        {"BloodPressure": {"Systolic": 130, "Diastolic": 85}, "RecordedBy": "Anu"},
        {"RecordedAt": "2024-04-01T06:00:00Z"}
    ]}}));
}

#[test]
fn room_capacities_are_stable() {
    assert_stable::<RoomCapacitySchema>(json!({"roomCapacities": [
        {"RoomType": "General Ward", "TotalBeds": 30, "OccupiedBeds": 27},
        {"room_category": "ICU", "capacity": "8", "occupied": 8, "available": 0}
    ]}));
}

#[test]
fn dashboard_is_stable() {
    assert_stable::<DashboardSchema>(json!([
        {"TotalPatients": 42, "ICU_Occupied": 5, "ICU_Capacity": 8, "FreeBeds": 11, "OccupancyRate": 78.5}
    ]));
}

#[test]
fn alias_tables_are_unambiguous() {
    for entity in Entity::ALL {
        let fields = REGISTRY.require(entity).unwrap().fields();
        let problems = table_conflicts(fields, 3);
        assert!(problems.is_empty(), "{}: {:?}", entity, problems);
    }
}

#[test]
fn synthetic_ids_never_collide_with_real_ids() {
    let normalizer = SchemaNormalizer::default();
    let cases = [
        json!([{}, {"id": 3}, {}]),
        json!([{}, {"id": 1_000_000}, {}, {"id": 1_000_002}]),
        json!([{"id": 999_999}, {}, {}]),
        json!([{"id": i64::MAX}, {}]),
    ];

    for payload in cases {
        let records = normalizer.normalize_list::<AdmissionSchema>(&payload).records;
        let mut ids: Vec<i64> = records.iter().filter_map(|r| r.id.value).collect();
        assert_eq!(ids.len(), records.len(), "every list record gets an id");
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), records.len(), "duplicate id in {payload}");
    }
}

#[test]
fn outbound_uses_pascal_case_and_drops_synthetic_ids() {
    let normalizer = SchemaNormalizer::default();
    let payload = json!([
        {"room_admission_id": 8, "patient_name": "Ravi", "room_type": "special"},
        {"patient_name": "Lena"}
    ]);
    let records = normalizer.normalize_list::<AdmissionSchema>(&payload).records;
    assert_eq!(records[1].id, RecordId::synthetic(1_000_001));

    let real = outbound_for::<AdmissionSchema>(&records[0]).unwrap();
    assert_eq!(real.get("RoomAdmissionId"), Some(&json!(8)));
    assert_eq!(real.get("PatientName"), Some(&json!("Ravi")));
    assert_eq!(real.get("RoomType"), Some(&json!("Special Room")));
    assert!(real.keys().all(|k| k.starts_with(|c: char| c.is_ascii_uppercase())));

    let synthetic = outbound_for::<AdmissionSchema>(&records[1]).unwrap();
    assert!(!synthetic.contains_key("RoomAdmissionId"));
    assert!(!synthetic.contains_key("idSynthetic"));
    assert!(!synthetic.contains_key("DischargeDate"));
}
