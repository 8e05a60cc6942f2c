use serde_json::Value;
use tracing::debug;

use super::diagnostics::{Diagnostic, Diagnostics};
use super::RawRecord;
use crate::constants::{COLLECTION_KEYS, DATA_WRAPPER_KEY, MAX_DATA_WRAPPER_DEPTH};

/// What the unwrapper found inside a response payload
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Envelope<'a> {
    /// A list of raw records
    Collection(&'a [Value]),
    /// A single object with no recognizable collection inside
    Record(&'a RawRecord),
    /// `null`, a bare scalar, or a `data` wrapper holding neither
    Missing,
}

/// Locate the real payload inside the backend's wrapper.
///
/// Arrays are returned as-is. Objects are searched through up to two `data`
/// wrappers and then for the first known collection property that holds an
/// array. An object with neither is treated as a single record, unless it
/// carries a `data` key, in which case it is only the wrapper and the payload
/// is missing.
pub fn unwrap(payload: &Value) -> Envelope<'_> {
    unwrap_at(payload, 0)
}

fn unwrap_at(payload: &Value, data_depth: usize) -> Envelope<'_> {
    match payload {
        Value::Array(items) => Envelope::Collection(items),
        Value::Object(map) => {
            let inner = if data_depth < MAX_DATA_WRAPPER_DEPTH {
                map.get(DATA_WRAPPER_KEY)
                    .map(|data| unwrap_at(data, data_depth + 1))
                    .unwrap_or(Envelope::Missing)
            } else {
                Envelope::Missing
            };

            if let Envelope::Collection(_) = inner {
                return inner;
            }

            let named = COLLECTION_KEYS
                .iter()
                .find_map(|key| map.get(*key).and_then(Value::as_array).map(|items| (*key, items)));
            if let Some((key, items)) = named {
                debug!(key, count = items.len(), "found named collection");
                return Envelope::Collection(items);
            }

            match inner {
                Envelope::Record(record) => Envelope::Record(record),
                _ if map.contains_key(DATA_WRAPPER_KEY) => Envelope::Missing,
                _ => Envelope::Record(map),
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Envelope::Missing,
    }
}

/// Records of a list endpoint. Anything without a collection yields an empty
/// slice and an unrecognized-envelope diagnostic.
pub fn unwrap_list<'a>(payload: &'a Value, diagnostics: &mut Diagnostics) -> &'a [Value] {
    match unwrap(payload) {
        Envelope::Collection(items) => items,
        Envelope::Record(_) | Envelope::Missing => {
            diagnostics.push(Diagnostic::unrecognized_envelope(payload));
            &[]
        }
    }
}

/// Record of a single-object endpoint: the unwrapped object, or the first
/// object of a collection. Empty objects and scalars yield `None`.
pub fn unwrap_object(payload: &Value) -> Option<&RawRecord> {
    match unwrap(payload) {
        Envelope::Record(record) if !record.is_empty() => Some(record),
        Envelope::Collection(items) => items.iter().find_map(Value::as_object),
        Envelope::Record(_) | Envelope::Missing => None,
    }
}
