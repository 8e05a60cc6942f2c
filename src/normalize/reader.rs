use serde_json::Value;

use super::alias::AliasEntry;
use super::coerce;
use super::diagnostics::Diagnostics;
use super::enums::EnumSpec;
use super::resolver::FieldResolver;
use super::RawRecord;
use crate::domain::{CanonicalEnum, RecordId};

/// Typed access to one raw record's fields.
///
/// Every accessor resolves through the alias entry first and then coerces.
/// Nothing here fails: unreadable values become the documented default.
pub struct FieldReader<'a> {
    record: &'a RawRecord,
    resolver: &'a FieldResolver,
    diagnostics: &'a mut Diagnostics,
}

impl<'a> FieldReader<'a> {
    pub fn new(record: &'a RawRecord, resolver: &'a FieldResolver, diagnostics: &'a mut Diagnostics) -> Self {
        Self {
            record,
            resolver,
            diagnostics,
        }
    }

    /// The matched raw value, untouched
    pub fn raw(&self, entry: &AliasEntry) -> Option<&'a Value> {
        self.resolver.find(self.record, entry)
    }

    /// Text field; `""` when absent or not a scalar
    pub fn text(&self, entry: &AliasEntry) -> String {
        self.optional_text(entry).unwrap_or_default()
    }

    pub fn optional_text(&self, entry: &AliasEntry) -> Option<String> {
        self.raw(entry).and_then(coerce::to_text)
    }

    /// Integer field; `0` when absent or not numeric
    pub fn integer(&self, entry: &AliasEntry) -> i64 {
        self.optional_integer(entry).unwrap_or(0)
    }

    pub fn optional_integer(&self, entry: &AliasEntry) -> Option<i64> {
        self.raw(entry).and_then(coerce::to_integer)
    }

    /// Numeric field; `0.0` when absent or not numeric
    pub fn number(&self, entry: &AliasEntry) -> f64 {
        self.optional_number(entry).unwrap_or(0.0)
    }

    pub fn optional_number(&self, entry: &AliasEntry) -> Option<f64> {
        self.raw(entry).and_then(coerce::to_number)
    }

    pub fn flag(&self, entry: &AliasEntry) -> bool {
        self.raw(entry).map(coerce::to_flag).unwrap_or(false)
    }

    /// Closed-vocabulary field
    pub fn choice<T: CanonicalEnum>(&mut self, entry: &AliasEntry, spec: &EnumSpec<T>) -> T {
        let raw = self.raw(entry);
        spec.normalize(raw, self.diagnostics)
    }

    /// Identifier plus its synthetic marker. Only list mapping assigns
    /// placeholder ids; here a missing id stays `None`.
    pub fn record_id(&self, id: &AliasEntry, synthetic: &AliasEntry) -> RecordId {
        RecordId {
            value: self.optional_integer(id),
            synthetic: self.flag(synthetic),
        }
    }
}
