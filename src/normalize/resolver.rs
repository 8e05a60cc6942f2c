use serde_json::Value;
use tracing::trace;

use super::alias::AliasEntry;
use super::RawRecord;
use crate::config::ResolverConfig;
use crate::constants::{DEFAULT_MAX_RESOLVE_DEPTH, DEFAULT_MIN_SUBSTRING_LEN};

/// Finds the raw value of one logical field in an arbitrarily shaped record.
///
/// For each candidate spelling, in priority order:
/// 1. exact key lookup
/// 2. case-insensitive key match
/// 3. substring match in either direction (scalar values only)
/// 4. the same three steps inside nested objects, down to `max_depth`
/// 5. a literal walk of dotted candidates from the root
///
/// The first candidate that yields a value wins. `null` and `""` never count
/// as a value. The matched value is returned untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldResolver {
    max_depth: usize,
    min_substring_len: usize,
}

impl Default for FieldResolver {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RESOLVE_DEPTH, DEFAULT_MIN_SUBSTRING_LEN)
    }
}

impl FieldResolver {
    pub fn new(max_depth: usize, min_substring_len: usize) -> Self {
        Self {
            max_depth,
            min_substring_len,
        }
    }

    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(config.max_depth, config.min_substring_len)
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Resolve `entry` in `record`, falling back to `default`
    pub fn resolve<'a>(&self, record: &'a RawRecord, entry: &AliasEntry, default: &'a Value) -> &'a Value {
        self.find(record, entry).unwrap_or(default)
    }

    /// Resolve `entry` in `record`, or `None` when no candidate matches
    pub fn find<'a>(&self, record: &'a RawRecord, entry: &AliasEntry) -> Option<&'a Value> {
        entry.candidates.iter().find_map(|candidate| {
            let found = self.find_candidate(record, candidate);
            if found.is_some() {
                trace!(field = entry.canonical, candidate = *candidate, "resolved field");
            }
            found
        })
    }

    fn find_candidate<'a>(&self, record: &'a RawRecord, candidate: &str) -> Option<&'a Value> {
        let lower = candidate.to_lowercase();
        self.search(record, candidate, &lower, 0).or_else(|| {
            if candidate.contains('.') {
                walk_path(record, candidate)
            } else {
                None
            }
        })
    }

    fn search<'a>(&self, object: &'a RawRecord, candidate: &str, lower: &str, depth: usize) -> Option<&'a Value> {
        if let Some(value) = object.get(candidate).filter(|v| is_present(v)) {
            return Some(value);
        }

        let case_insensitive = object
            .iter()
            .find(|(key, value)| key.to_lowercase() == lower && is_present(value));
        if let Some((_, value)) = case_insensitive {
            return Some(value);
        }

        let substring = object.iter().find(|(key, value)| {
            is_scalar(value) && is_present(value) && self.substring_related(&key.to_lowercase(), lower)
        });
        if let Some((_, value)) = substring {
            return Some(value);
        }

        if depth >= self.max_depth {
            return None;
        }

        object.values().find_map(|value| match value {
            Value::Object(child) => self.search(child, candidate, lower, depth + 1),
            _ => None,
        })
    }

    fn substring_related(&self, key: &str, candidate: &str) -> bool {
        (key.len() >= self.min_substring_len && candidate.contains(key))
            || (candidate.len() >= self.min_substring_len && key.contains(candidate))
    }
}

/// `null` and the empty string count as absent
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Bool(_) | Value::Number(_) | Value::Array(_) | Value::Object(_) => true,
    }
}

fn is_scalar(value: &Value) -> bool {
    matches!(value, Value::Bool(_) | Value::Number(_) | Value::String(_))
}

fn walk_path<'a>(record: &'a RawRecord, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let first = segments.next()?;
    let mut current = record.get(first)?;
    for segment in segments {
        current = match current {
            Value::Object(object) => object.get(segment)?,
            _ => return None,
        };
    }
    Some(current).filter(|v| is_present(v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PATIENT_NAME: AliasEntry = AliasEntry::new(
        "patientName",
        "PatientName",
        &["patientName", "PatientName", "patient_name", "Patient_Name", "Patient.FullName"],
    );

    const PATIENT_ID: AliasEntry = AliasEntry::new(
        "patientId",
        "PatientId",
        &["patientId", "PatientId", "patient_id", "Patient.Id"],
    );

    fn record(value: Value) -> RawRecord {
        match value {
            Value::Object(map) => map,
            other => panic!("fixture must be an object, got {other}"),
        }
    }

    #[test]
    fn test_exact_match() {
        let r = record(json!({"patient_name": "Asha"}));
        assert_eq!(FieldResolver::default().find(&r, &PATIENT_NAME), Some(&json!("Asha")));
    }

    #[test]
    fn test_case_insensitive_match() {
        let r = record(json!({"PATIENTNAME": "X"}));
        let default = json!("");
        assert_eq!(FieldResolver::default().resolve(&r, &PATIENT_NAME, &default), &json!("X"));
    }

    #[test]
    fn test_substring_match_both_directions() {
        let resolver = FieldResolver::default();

        let key_contains_candidate = record(json!({"registeredPatientNameText": "Lena"}));
        assert_eq!(resolver.find(&key_contains_candidate, &PATIENT_NAME), Some(&json!("Lena")));

        let candidate_contains_key = record(json!({"tientNa": "Omar"}));
        assert_eq!(resolver.find(&candidate_contains_key, &PATIENT_NAME), Some(&json!("Omar")));
    }

    #[test]
    fn test_substring_ignores_short_keys_and_containers() {
        let resolver = FieldResolver::default();
        let r = record(json!({"id": 7, "Patient": {"Ward": "B"}}));
        assert_eq!(resolver.find(&r, &PATIENT_ID), None);
    }

    #[test]
    fn test_empty_and_null_are_skipped() {
        let r = record(json!({"patientName": "", "PatientName": null, "patient_name": "Ravi"}));
        assert_eq!(FieldResolver::default().find(&r, &PATIENT_NAME), Some(&json!("Ravi")));
    }

    #[test]
    fn test_first_candidate_wins_over_earlier_step() {
        // "patientName" only matches case-insensitively, yet beats the exact "patient_name"
        let r = record(json!({"patient_name": "second", "PATIENTNAME": "first"}));
        assert_eq!(FieldResolver::default().find(&r, &PATIENT_NAME), Some(&json!("first")));
    }

    #[test]
    fn test_nested_objects_are_searched() {
        let r = record(json!({"payload": {"patient": {"PatientId": 42}}}));
        assert_eq!(FieldResolver::default().find(&r, &PATIENT_ID), Some(&json!(42)));
    }

    #[test]
    fn test_arrays_are_not_searched() {
        let r = record(json!({"entries": [{"patientId": 42}]}));
        assert_eq!(FieldResolver::default().find(&r, &PATIENT_ID), None);
    }

    #[test]
    fn test_depth_bound() {
        let resolver = FieldResolver::default();
        let at_three = record(json!({"level1": {"level2": {"level3": {"patientName": "deep"}}}}));
        assert_eq!(resolver.find(&at_three, &PATIENT_NAME), Some(&json!("deep")));

        let at_four = record(json!({"level1": {"level2": {"level3": {"level4": {"patientName": "deep"}}}}}));
        assert_eq!(resolver.find(&at_four, &PATIENT_NAME), None);
    }

    #[test]
    fn test_dotted_path_is_walked_from_root() {
        let r = record(json!({"Patient": {"Id": "P-100"}}));
        assert_eq!(FieldResolver::default().find(&r, &PATIENT_ID), Some(&json!("P-100")));
    }

    #[test]
    fn test_dotted_path_through_scalar_is_absent() {
        let entry = AliasEntry::new("code", "Code", &["code", "Pt.Ix.Code"]);
        let r = record(json!({"Pt": {"Ix": "B"}}));
        assert_eq!(FieldResolver::default().find(&r, &entry), None);
    }

    #[test]
    fn test_default_when_nothing_matches() {
        let r = record(json!({"ward": "B", "bed": 4}));
        let default = json!("unknown");
        assert_eq!(FieldResolver::default().resolve(&r, &PATIENT_NAME, &default), &default);
    }

    #[test]
    fn test_raw_value_is_returned_untouched() {
        let r = record(json!({"patientName": {"first": "A", "last": "B"}}));
        assert_eq!(
            FieldResolver::default().find(&r, &PATIENT_NAME),
            Some(&json!({"first": "A", "last": "B"}))
        );
    }
}
