use super::common::{ID_SYNTHETIC, PATIENT_NAME};
use super::Entity;
use crate::domain::{Admission, AdmissionStatus, RecordId, RoomType};
use crate::normalize::alias::{AliasEntry, AliasTable};
use crate::normalize::enums::{EnumSpec, EnumVariantSet, KeywordRule};
use crate::normalize::reader::FieldReader;
use crate::normalize::EntitySchema;

pub const ID: AliasEntry = AliasEntry::new(
    "id",
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
        "id",
        "Id",
        "ID",
    ],
);

pub const PATIENT_ID: AliasEntry = AliasEntry::new(
    "patientId",
    "PatientId",
    &["patientId", "PatientId", "patient_id", "Patient_Id", "Patient.PatientId", "Patient.Id"],
);

pub const AGE: AliasEntry = AliasEntry::new(
    "age",
    "Age",
    &["age", "Age", "patientAge", "PatientAge", "patient_age", "Patient_Age", "Patient.Age"],
);

pub const GENDER: AliasEntry = AliasEntry::new(
    "gender",
    "Gender",
    &["gender", "Gender", "sex", "Sex", "Patient.Gender"],
);

pub const DIAGNOSIS: AliasEntry = AliasEntry::new(
    "diagnosis",
    "Diagnosis",
    &[
        "diagnosis",
        "Diagnosis",
        "reasonForAdmission",
        "ReasonForAdmission",
        "reason_for_admission",
        "Reason_For_Admission",
    ],
);

pub const ROOM_NUMBER: AliasEntry = AliasEntry::new(
    "roomNumber",
    "RoomNumber",
    &[
        "roomNumber",
        "RoomNumber",
        "room_number",
        "Room_Number",
        "roomNo",
        "RoomNo",
        "room_no",
        "Room_No",
        "Room.RoomNumber",
    ],
);

pub const ROOM_TYPE_FIELD: AliasEntry = AliasEntry::new(
    "roomType",
    "RoomType",
    &[
        "roomType",
        "RoomType",
        "room_type",
        "Room_Type",
        "roomCategory",
        "RoomCategory",
        "room_category",
        "Room.RoomType",
    ],
);

pub const BED_NUMBER: AliasEntry = AliasEntry::new(
    "bedNumber",
    "BedNumber",
    &[
        "bedNumber",
        "BedNumber",
        "bed_number",
        "Bed_Number",
        "bedNo",
        "BedNo",
        "bed_no",
        "Bed_No",
        "Bed.BedNumber",
    ],
);

pub const ADMISSION_DATE: AliasEntry = AliasEntry::new(
    "admissionDate",
    "AdmissionDate",
    &[
        "admissionDate",
        "AdmissionDate",
        "admission_date",
        "Admission_Date",
        "admittedOn",
        "AdmittedOn",
        "admitted_on",
        "dateOfAdmission",
        "DateOfAdmission",
    ],
);

pub const DISCHARGE_DATE: AliasEntry = AliasEntry::new(
    "dischargeDate",
    "DischargeDate",
    &[
        "dischargeDate",
        "DischargeDate",
        "discharge_date",
        "Discharge_Date",
        "dischargedOn",
        "DischargedOn",
        "discharged_on",
    ],
);

pub const STATUS: AliasEntry = AliasEntry::new(
    "status",
    "Status",
    &["status", "Status", "admissionStatus", "AdmissionStatus", "admission_status", "Admission_Status"],
);

pub const ATTENDING_DOCTOR: AliasEntry = AliasEntry::new(
    "attendingDoctor",
    "AttendingDoctor",
    &[
        "attendingDoctor",
        "AttendingDoctor",
        "attending_doctor",
        "Attending_Doctor",
        "doctorName",
        "DoctorName",
        "doctor_name",
        "Doctor.DoctorName",
        "Doctor.Name",
    ],
);

pub const CONTACT_NUMBER: AliasEntry = AliasEntry::new(
    "contactNumber",
    "ContactNumber",
    &[
        "contactNumber",
        "ContactNumber",
        "contact_number",
        "Contact_Number",
        "phoneNumber",
        "PhoneNumber",
        "phone_number",
        "Patient.Phone",
    ],
);

pub const ISOLATION_REQUIRED: AliasEntry = AliasEntry::new(
    "isolationRequired",
    "IsolationRequired",
    &[
        "isolationRequired",
        "IsolationRequired",
        "isolation_required",
        "Isolation_Required",
        "isIsolated",
        "IsIsolated",
        "is_isolated",
    ],
);

pub const NOTES: AliasEntry = AliasEntry::new(
    "notes",
    "Notes",
    &["notes", "Notes", "remarks", "Remarks", "comments", "Comments"],
);

pub const FIELDS: AliasTable = &[
    ID,
    ID_SYNTHETIC,
    PATIENT_ID,
    PATIENT_NAME,
    AGE,
    GENDER,
    DIAGNOSIS,
    ROOM_NUMBER,
    ROOM_TYPE_FIELD,
    BED_NUMBER,
    ADMISSION_DATE,
    DISCHARGE_DATE,
    STATUS,
    ATTENDING_DOCTOR,
    CONTACT_NUMBER,
    ISOLATION_REQUIRED,
    NOTES,
];

pub const ADMISSION_STATUS: EnumSpec<AdmissionStatus> = EnumSpec {
    field: "status",
    sets: &[
        EnumVariantSet {
            value: AdmissionStatus::MovedToIcu,
            variants: &[
                "moved to icu",
                "movedtoicu",
                "moved_to_icu",
                "moved-to-icu",
                "icu",
                "in icu",
                "intensive care",
                "shifted to icu",
            ],
            keywords: &[KeywordRule::new(&["icu"]), KeywordRule::new(&["intensive"])],
        },
        EnumVariantSet {
            value: AdmissionStatus::Transferred,
            variants: &["transferred", "transfer", "moved", "shifted", "referred"],
            keywords: &[KeywordRule::new(&["transfer"]), KeywordRule::new(&["referr"])],
        },
        EnumVariantSet {
            value: AdmissionStatus::Discharged,
            variants: &["discharged", "discharge", "released", "left", "closed"],
            keywords: &[KeywordRule::new(&["discharg"]), KeywordRule::new(&["release"])],
        },
        EnumVariantSet {
            value: AdmissionStatus::Active,
            variants: &[
                "active",
                "admitted",
                "admit",
                "inpatient",
                "in patient",
                "in-patient",
                "in_patient",
                "ongoing",
                "current",
                "occupied",
            ],
            keywords: &[
                KeywordRule::new(&["admit"]),
                KeywordRule::without(&["active"], &["inactive"]),
                KeywordRule::new(&["inpatient"]),
            ],
        },
    ],
    fallback: AdmissionStatus::Active,
};

// ICU and the special rooms come first so "ICU ward" or "special ward"
// are not taken by the general "ward" keyword.
pub const ROOM_TYPE: EnumSpec<RoomType> = EnumSpec {
    field: "roomType",
    sets: &[
        EnumVariantSet {
            value: RoomType::Icu,
            variants: &["icu", "intensive care", "intensive care unit", "icu room", "critical care"],
            keywords: &[KeywordRule::new(&["icu"]), KeywordRule::new(&["intensive"])],
        },
        EnumVariantSet {
            value: RoomType::SpecialSharedRoom,
            variants: &[
                "special shared room",
                "special shared",
                "special_shared",
                "special-shared",
                "specialshared",
                "specialsharedroom",
                "shared special",
                "semi special",
                "semi-special",
            ],
            keywords: &[KeywordRule::new(&["special", "shared"])],
        },
        EnumVariantSet {
            value: RoomType::SpecialRoom,
            variants: &[
                "special room",
                "special",
                "special_room",
                "special-room",
                "specialroom",
                "private",
                "private room",
                "deluxe",
            ],
            keywords: &[
                KeywordRule::without(&["special"], &["shared"]),
                KeywordRule::new(&["private"]),
            ],
        },
        EnumVariantSet {
            value: RoomType::GeneralWard,
            variants: &[
                "general ward",
                "general",
                "ward",
                "general_ward",
                "general-ward",
                "generalward",
                "regular",
                "standard",
                "common ward",
            ],
            keywords: &[KeywordRule::new(&["general"]), KeywordRule::new(&["ward"])],
        },
    ],
    fallback: RoomType::GeneralWard,
};

pub struct AdmissionSchema;

impl EntitySchema for AdmissionSchema {
    type Record = Admission;

    const ENTITY: Entity = Entity::Admission;

    fn fields() -> AliasTable {
        FIELDS
    }

    fn map(reader: &mut FieldReader<'_>) -> Admission {
        Admission {
            id: reader.record_id(&ID, &ID_SYNTHETIC),
            patient_id: reader.text(&PATIENT_ID),
            patient_name: reader.text(&PATIENT_NAME),
            age: reader.integer(&AGE),
            gender: reader.text(&GENDER),
            diagnosis: reader.text(&DIAGNOSIS),
            room_number: reader.text(&ROOM_NUMBER),
            room_type: reader.choice(&ROOM_TYPE_FIELD, &ROOM_TYPE),
            bed_number: reader.text(&BED_NUMBER),
            admission_date: reader.text(&ADMISSION_DATE),
            discharge_date: reader.optional_text(&DISCHARGE_DATE),
            status: reader.choice(&STATUS, &ADMISSION_STATUS),
            attending_doctor: reader.text(&ATTENDING_DOCTOR),
            contact_number: reader.text(&CONTACT_NUMBER),
            isolation_required: reader.flag(&ISOLATION_REQUIRED),
            notes: reader.optional_text(&NOTES),
        }
    }

    fn record_id(record: &mut Admission) -> Option<&mut RecordId> {
        Some(&mut record.id)
    }
}
