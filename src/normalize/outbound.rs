//! Canonical records back into the backend's PascalCase request shape.

use serde::Serialize;
use serde_json::Value;

use super::alias::AliasTable;
use super::{EntitySchema, RawRecord};
use crate::error::Result;

const ID_KEY: &str = "id";
const SYNTHETIC_KEY: &str = "idSynthetic";

/// Rename a canonical record's fields to their outbound names.
///
/// `null` fields are omitted. A synthetic id is dropped so the backend
/// assigns a real one. Fields without an outbound name are never sent.
pub fn to_outbound<R: Serialize>(record: &R, fields: AliasTable) -> Result<RawRecord> {
    let canonical = match serde_json::to_value(record)? {
        Value::Object(map) => map,
        _ => return Ok(RawRecord::new()),
    };
    let synthetic = canonical.get(SYNTHETIC_KEY).and_then(Value::as_bool).unwrap_or(false);

    let mut outbound = RawRecord::new();
    for entry in fields.iter().filter(|e| e.is_outbound()) {
        if synthetic && entry.canonical == ID_KEY {
            continue;
        }
        match canonical.get(entry.canonical) {
            None | Some(Value::Null) => {}
            Some(value) => {
                outbound.insert(entry.outbound.to_string(), value.clone());
            }
        }
    }
    Ok(outbound)
}

/// [`to_outbound`] with the schema's own alias table
pub fn outbound_for<S: EntitySchema>(record: &S::Record) -> Result<RawRecord> {
    to_outbound(record, S::fields())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Admission, AdmissionStatus, LabTest, RecordId};
    use crate::normalize::schemas::{AdmissionSchema, LabTestSchema};
    use serde_json::json;

    #[test]
    fn test_admission_outbound_names() {
        let admission = Admission {
            id: RecordId::real(31),
            patient_name: "Meera Nair".to_string(),
            age: 47,
            status: AdmissionStatus::MovedToIcu,
            ..Admission::default()
        };
        let outbound = outbound_for::<AdmissionSchema>(&admission).unwrap();

        assert_eq!(outbound.get("RoomAdmissionId"), Some(&json!(31)));
        assert_eq!(outbound.get("PatientName"), Some(&json!("Meera Nair")));
        assert_eq!(outbound.get("Age"), Some(&json!(47)));
        assert_eq!(outbound.get("Status"), Some(&json!("Moved to ICU")));
        assert!(!outbound.contains_key("DischargeDate"));
        assert!(!outbound.contains_key("idSynthetic"));
        assert!(!outbound.contains_key("id"));
    }

    #[test]
    fn test_synthetic_id_is_dropped() {
        let test = LabTest {
            id: RecordId::synthetic(1_000_003),
            admission_id: Some(31),
            ..LabTest::default()
        };
        let outbound = outbound_for::<LabTestSchema>(&test).unwrap();

        assert!(!outbound.contains_key("PatientLabTestId"));
        assert_eq!(outbound.get("RoomAdmissionId"), Some(&json!(31)));
    }

    #[test]
    fn test_non_object_serializes_to_empty() {
        assert!(to_outbound(&42, &[]).unwrap().is_empty());
    }
}
