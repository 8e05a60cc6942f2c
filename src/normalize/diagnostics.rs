use serde::Serialize;
use serde_json::Value;
use std::fmt;
use tracing::warn;

use crate::observability::metrics;

/// A non-fatal finding made while normalizing a payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// An enum field held a value outside every variant set
    UnrecognizedEnum {
        field: &'static str,
        raw: String,
        fallback: &'static str,
    },
    /// The payload's wrapper shape held no recognizable collection
    UnrecognizedEnvelope { shape: &'static str },
    /// A list element was not an object and was left out
    NonObjectRecord { index: usize, shape: &'static str },
}

impl Diagnostic {
    pub fn unrecognized_enum(field: &'static str, raw: String, fallback: &'static str) -> Self {
        Diagnostic::UnrecognizedEnum { field, raw, fallback }
    }

    pub fn unrecognized_envelope(payload: &Value) -> Self {
        Diagnostic::UnrecognizedEnvelope {
            shape: shape_of(payload),
        }
    }

    pub fn non_object_record(index: usize, element: &Value) -> Self {
        Diagnostic::NonObjectRecord {
            index,
            shape: shape_of(element),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnrecognizedEnum { field, raw, fallback } => write!(
                f,
                "unrecognized value {} for field '{}', using '{}'",
                raw, field, fallback
            ),
            Diagnostic::UnrecognizedEnvelope { shape } => {
                write!(f, "unrecognized response envelope ({}), using empty list", shape)
            }
            Diagnostic::NonObjectRecord { index, shape } => {
                write!(f, "list element {} is {}, not an object; skipped", index, shape)
            }
        }
    }
}

/// Collector passed explicitly through one normalization call.
///
/// Every pushed diagnostic is also logged at `warn` level and counted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        warn!("{}", diagnostic);
        match &diagnostic {
            Diagnostic::UnrecognizedEnum { field, .. } => metrics::normalize::enum_fallback(*field),
            Diagnostic::UnrecognizedEnvelope { .. } => metrics::normalize::envelope_unrecognized(),
            Diagnostic::NonObjectRecord { .. } => {}
        }
        self.entries.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

/// Short name of a JSON value's kind
pub fn shape_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(map) if map.is_empty() => "empty object",
        Value::Object(_) => "object",
    }
}
