use super::common::{ADMISSION_REF, ID_SYNTHETIC};
use super::Entity;
use crate::domain::{RecordId, VisitVitals};
use crate::normalize::alias::{AliasEntry, AliasTable};
use crate::normalize::reader::FieldReader;
use crate::normalize::EntitySchema;

pub const ID: AliasEntry = AliasEntry::new(
    "id",
    "VitalId",
    &[
        "vitalId",
        "VitalId",
        "vital_id",
        "visitVitalsId",
        "VisitVitalsId",
        "visit_vitals_id",
        "vitalsId",
        "VitalsId",
        "id",
        "Id",
        "ID",
    ],
);

pub const RECORDED_AT: AliasEntry = AliasEntry::new(
    "recordedAt",
    "RecordedAt",
    &[
        "recordedAt",
        "RecordedAt",
        "recorded_at",
        "Recorded_At",
        "recordedOn",
        "RecordedOn",
        "measuredAt",
        "MeasuredAt",
        "timestamp",
        "Timestamp",
    ],
);

pub const RECORDED_BY: AliasEntry = AliasEntry::new(
    "recordedBy",
    "RecordedBy",
    &[
        "recordedBy",
        "RecordedBy",
        "recorded_by",
        "Recorded_By",
        "takenBy",
        "TakenBy",
        "nurseName",
        "NurseName",
        "Nurse.Name",
    ],
);

pub const TEMPERATURE: AliasEntry = AliasEntry::new(
    "temperature",
    "Temperature",
    &["temperature", "Temperature", "bodyTemperature", "BodyTemperature", "temp", "Temp"],
);

pub const HEART_RATE: AliasEntry = AliasEntry::new(
    "heartRate",
    "HeartRate",
    &["heartRate", "HeartRate", "heart_rate", "Heart_Rate", "pulseRate", "PulseRate", "pulse", "Pulse"],
);

pub const RESPIRATORY_RATE: AliasEntry = AliasEntry::new(
    "respiratoryRate",
    "RespiratoryRate",
    &[
        "respiratoryRate",
        "RespiratoryRate",
        "respiratory_rate",
        "Respiratory_Rate",
        "respirationRate",
        "RespirationRate",
        "breathingRate",
    ],
);

pub const BLOOD_PRESSURE: AliasEntry = AliasEntry::new(
    "bloodPressure",
    "BloodPressure",
    &["bloodPressure", "BloodPressure", "blood_pressure", "Blood_Pressure", "bp", "BP"],
);

pub const SYSTOLIC: AliasEntry = AliasEntry::new(
    "systolic",
    "Systolic",
    &["systolic", "Systolic", "systolicBP", "SystolicBP", "systolic_bp", "bpSystolic", "BPSystolic"],
);

pub const DIASTOLIC: AliasEntry = AliasEntry::new(
    "diastolic",
    "Diastolic",
    &["diastolic", "Diastolic", "diastolicBP", "DiastolicBP", "diastolic_bp", "bpDiastolic", "BPDiastolic"],
);

pub const OXYGEN_SATURATION: AliasEntry = AliasEntry::new(
    "oxygenSaturation",
    "OxygenSaturation",
    &[
        "oxygenSaturation",
        "OxygenSaturation",
        "oxygen_saturation",
        "Oxygen_Saturation",
        "spo2",
        "SpO2",
        "SPO2",
    ],
);

pub const WEIGHT: AliasEntry = AliasEntry::new(
    "weight",
    "Weight",
    &["weight", "Weight", "weightKg", "WeightKg", "weight_kg"],
);

pub const FIELDS: AliasTable = &[
    ID,
    ID_SYNTHETIC,
    ADMISSION_REF,
    RECORDED_AT,
    RECORDED_BY,
    TEMPERATURE,
    HEART_RATE,
    RESPIRATORY_RATE,
    BLOOD_PRESSURE,
    SYSTOLIC,
    DIASTOLIC,
    OXYGEN_SATURATION,
    WEIGHT,
];

pub struct VitalsSchema;

impl EntitySchema for VitalsSchema {
    type Record = VisitVitals;

    const ENTITY: Entity = Entity::Vitals;

    fn fields() -> AliasTable {
        FIELDS
    }

    fn map(reader: &mut FieldReader<'_>) -> VisitVitals {
        let blood_pressure = reader.text(&BLOOD_PRESSURE);
        let (split_systolic, split_diastolic) = split_blood_pressure(&blood_pressure);
        let systolic = reader.optional_number(&SYSTOLIC).or(split_systolic);
        let diastolic = reader.optional_number(&DIASTOLIC).or(split_diastolic);

        let blood_pressure = match (blood_pressure.is_empty(), systolic, diastolic) {
            (true, Some(sys), Some(dia)) => format!("{}/{}", sys, dia),
            _ => blood_pressure,
        };

        VisitVitals {
            id: reader.record_id(&ID, &ID_SYNTHETIC),
            admission_id: reader.optional_integer(&ADMISSION_REF),
            recorded_at: reader.text(&RECORDED_AT),
            recorded_by: reader.text(&RECORDED_BY),
            temperature: reader.optional_number(&TEMPERATURE),
            heart_rate: reader.optional_number(&HEART_RATE),
            respiratory_rate: reader.optional_number(&RESPIRATORY_RATE),
            blood_pressure,
            systolic,
            diastolic,
            oxygen_saturation: reader.optional_number(&OXYGEN_SATURATION),
            weight: reader.optional_number(&WEIGHT),
        }
    }

    fn record_id(record: &mut VisitVitals) -> Option<&mut RecordId> {
        Some(&mut record.id)
    }
}

/// Reads "120/80" style readings; anything else yields nothing
fn split_blood_pressure(reading: &str) -> (Option<f64>, Option<f64>) {
    let Some((sys, dia)) = reading.split_once('/') else {
        return (None, None);
    };
    let parse = |part: &str| part.trim().parse::<f64>().ok().filter(|n| n.is_finite());
    (parse(sys), parse(dia))
}
