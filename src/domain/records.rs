use serde::{Deserialize, Serialize};

use super::enums::{AdmissionStatus, LabPriority, LabTestStatus, RoomType, VisitStatus};

/// Identifier of a canonical record.
///
/// `synthetic` marks placeholder ids handed out in list context when the
/// backend omitted one; such ids are never sent back to the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordId {
    #[serde(rename = "id")]
    pub value: Option<i64>,
    #[serde(rename = "idSynthetic", default)]
    pub synthetic: bool,
}

impl RecordId {
    pub fn real(value: i64) -> Self {
        Self {
            value: Some(value),
            synthetic: false,
        }
    }

    pub fn synthetic(value: i64) -> Self {
        Self {
            value: Some(value),
            synthetic: true,
        }
    }
}

/// A room admission
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admission {
    #[serde(flatten)]
    pub id: RecordId,
    pub patient_id: String,
    pub patient_name: String,
    pub age: i64,
    pub gender: String,
    pub diagnosis: String,
    pub room_number: String,
    pub room_type: RoomType,
    pub bed_number: String,
    pub admission_date: String,
    pub discharge_date: Option<String>,
    pub status: AdmissionStatus,
    pub attending_doctor: String,
    pub contact_number: String,
    pub isolation_required: bool,
    pub notes: Option<String>,
}

/// A lab test ordered for an admitted patient
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabTest {
    #[serde(flatten)]
    pub id: RecordId,
    pub admission_id: Option<i64>,
    pub patient_name: String,
    pub test_name: String,
    pub test_category: String,
    pub status: LabTestStatus,
    pub priority: LabPriority,
    pub ordered_by: String,
    pub ordered_date: String,
    pub reported_date: Option<String>,
    pub result_value: Option<String>,
    pub normal_range: String,
    pub is_abnormal: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorVisit {
    #[serde(flatten)]
    pub id: RecordId,
    pub admission_id: Option<i64>,
    pub patient_name: String,
    pub doctor_name: String,
    pub visit_date: String,
    pub status: VisitStatus,
    pub findings: String,
    pub prescription: String,
    pub needs_follow_up: bool,
    pub follow_up_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NurseVisit {
    #[serde(flatten)]
    pub id: RecordId,
    pub admission_id: Option<i64>,
    pub patient_name: String,
    pub nurse_name: String,
    pub visit_date: String,
    pub status: VisitStatus,
    pub care_provided: String,
    pub medication_given: bool,
    pub notes: Option<String>,
}

/// One vitals reading. Measurements stay `None` when the backend sent
/// nothing usable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitVitals {
    #[serde(flatten)]
    pub id: RecordId,
    pub admission_id: Option<i64>,
    pub recorded_at: String,
    pub recorded_by: String,
    pub temperature: Option<f64>,
    pub heart_rate: Option<f64>,
    pub respiratory_rate: Option<f64>,
    pub blood_pressure: String,
    pub systolic: Option<f64>,
    pub diastolic: Option<f64>,
    pub oxygen_saturation: Option<f64>,
    pub weight: Option<f64>,
}

/// Bed capacity of one room category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomCapacity {
    pub room_type: RoomType,
    pub total_beds: i64,
    pub occupied_beds: i64,
    pub available_beds: i64,
}

impl RoomCapacity {
    /// Occupied share of total beds in `0.0..=1.0`; zero when the room has no beds
    pub fn occupancy_rate(&self) -> f64 {
        if self.total_beds <= 0 {
            return 0.0;
        }
        (self.occupied_beds as f64 / self.total_beds as f64).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_patients: i64,
    pub active_admissions: i64,
    pub discharged_today: i64,
    pub icu_occupied: i64,
    pub icu_capacity: i64,
    pub pending_lab_tests: i64,
    pub available_beds: i64,
    pub bed_occupancy_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_id_flattens_into_record() {
        let admission = Admission {
            id: RecordId::synthetic(1_000_002),
            ..Admission::default()
        };
        let value = serde_json::to_value(&admission).unwrap();
        assert_eq!(value["id"], json!(1_000_002));
        assert_eq!(value["idSynthetic"], json!(true));
        assert_eq!(value["roomType"], json!("General Ward"));
    }

    #[test]
    fn test_occupancy_rate() {
        let room = RoomCapacity {
            room_type: RoomType::Icu,
            total_beds: 8,
            occupied_beds: 6,
            available_beds: 2,
        };
        assert!((room.occupancy_rate() - 0.75).abs() < f64::EPSILON);
        assert_eq!(RoomCapacity::default().occupancy_rate(), 0.0);
    }
}
