use serde_json::Value;

use super::diagnostics::{Diagnostic, Diagnostics};
use super::resolver::is_present;
use crate::domain::CanonicalEnum;

/// Keyword test for compound or free-text categories.
///
/// Matches when the normalized value contains every `require` keyword and
/// none of the `forbid` keywords. A rule with a single required keyword also
/// matches a value that is itself contained in that keyword ("disch" for
/// "discharg") when the value covers at least half of the keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
    pub require: &'static [&'static str],
    pub forbid: &'static [&'static str],
}

impl KeywordRule {
    pub const fn new(require: &'static [&'static str]) -> Self {
        Self { require, forbid: &[] }
    }

    pub const fn without(require: &'static [&'static str], forbid: &'static [&'static str]) -> Self {
        Self { require, forbid }
    }

    fn matches(&self, value: &str) -> bool {
        if self.require.is_empty() || self.forbid.iter().any(|k| value.contains(k)) {
            return false;
        }
        if self.require.iter().all(|k| value.contains(k)) {
            return true;
        }
        match self.require {
            [single] => {
                value.len() >= MIN_REVERSE_MATCH_LEN && value.len() * 2 >= single.len() && single.contains(value)
            }
            _ => false,
        }
    }
}

/// Shortest value allowed to match by being contained in a keyword
const MIN_REVERSE_MATCH_LEN: usize = 3;

/// Raw spellings that map onto one canonical value. Variants are lower-case.
#[derive(Debug, Clone, Copy)]
pub struct EnumVariantSet<T: 'static> {
    pub value: T,
    pub variants: &'static [&'static str],
    pub keywords: &'static [KeywordRule],
}

/// Ordered variant sets of one enum field plus the fallback for misses
#[derive(Debug, Clone, Copy)]
pub struct EnumSpec<T: 'static> {
    pub field: &'static str,
    pub sets: &'static [EnumVariantSet<T>],
    pub fallback: T,
}

/// How a raw value was classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumMatch<T> {
    Exact(T),
    Keyword(T),
    /// Value was absent, `null` or empty
    Absent(T),
    /// Value was present but matched nothing
    Unrecognized(T),
}

impl<T: Copy> EnumMatch<T> {
    pub fn value(&self) -> T {
        match self {
            EnumMatch::Exact(v) | EnumMatch::Keyword(v) | EnumMatch::Absent(v) | EnumMatch::Unrecognized(v) => *v,
        }
    }
}

impl<T: CanonicalEnum> EnumSpec<T> {
    /// Classify a raw value without side effects
    pub fn classify(&self, raw: Option<&Value>) -> EnumMatch<T> {
        let text = match raw.filter(|v| is_present(v)) {
            None => return EnumMatch::Absent(self.fallback),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            // A container never names a category
            Some(Value::Array(_) | Value::Object(_) | Value::Null) => {
                return EnumMatch::Unrecognized(self.fallback)
            }
        };
        let normalized = text.trim().to_lowercase();
        if normalized.is_empty() {
            return EnumMatch::Absent(self.fallback);
        }

        if let Some(set) = self.sets.iter().find(|s| s.variants.contains(&normalized.as_str())) {
            return EnumMatch::Exact(set.value);
        }

        if let Some(set) = self
            .sets
            .iter()
            .find(|s| s.keywords.iter().any(|rule| rule.matches(&normalized)))
        {
            return EnumMatch::Keyword(set.value);
        }

        EnumMatch::Unrecognized(self.fallback)
    }

    /// Map a raw value onto the closed set, recording a diagnostic when a
    /// present value is not recognized
    pub fn normalize(&self, raw: Option<&Value>, diagnostics: &mut Diagnostics) -> T {
        let classified = self.classify(raw);
        if let EnumMatch::Unrecognized(fallback) = classified {
            let raw_text = raw.map(|v| v.to_string()).unwrap_or_default();
            diagnostics.push(Diagnostic::unrecognized_enum(self.field, raw_text, fallback.label()));
        }
        classified.value()
    }
}
