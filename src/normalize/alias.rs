/// One logical field and the raw key spellings accepted for it.
///
/// `candidates` are exact strings, never patterns, listed in priority order.
/// A candidate containing `.` is also walked as a literal path from the root
/// (`"Patient.PatientId"`). `canonical` is the key used in canonical output and
/// must itself be a candidate so canonical JSON maps back onto itself.
/// `outbound` is the single PascalCase name used when sending the field back
/// to the backend; an empty string means the field is never sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasEntry {
    pub canonical: &'static str,
    pub outbound: &'static str,
    pub candidates: &'static [&'static str],
}

impl AliasEntry {
    pub const fn new(
        canonical: &'static str,
        outbound: &'static str,
        candidates: &'static [&'static str],
    ) -> Self {
        Self {
            canonical,
            outbound,
            candidates,
        }
    }

    pub fn is_outbound(&self) -> bool {
        !self.outbound.is_empty()
    }

    pub fn dotted_paths(&self) -> impl Iterator<Item = &'static str> {
        self.candidates.iter().copied().filter(|c| c.contains('.'))
    }
}

/// Alias entries of one entity, in declaration order
pub type AliasTable = &'static [AliasEntry];

/// Checks an alias table for spellings that would make canonical output
/// ambiguous when fed back through the resolver.
///
/// Returns one message per problem: a missing canonical candidate, a repeated
/// canonical key, or a candidate of one field that is substring-related to
/// another field's canonical key.
pub fn table_conflicts(table: AliasTable, min_substring_len: usize) -> Vec<String> {
    let mut problems = Vec::new();

    for (i, entry) in table.iter().enumerate() {
        if !entry.candidates.contains(&entry.canonical) {
            problems.push(format!("'{}' does not list itself as a candidate", entry.canonical));
        }

        for other in &table[i + 1..] {
            if other.canonical == entry.canonical {
                problems.push(format!("canonical key '{}' is declared twice", entry.canonical));
            }
        }

        for other in table.iter().filter(|o| o.canonical != entry.canonical) {
            let key = other.canonical.to_lowercase();
            for candidate in entry.candidates {
                let candidate_lower = candidate.to_lowercase();
                let related = (key.len() >= min_substring_len && candidate_lower.contains(&key))
                    || (candidate_lower.len() >= min_substring_len && key.contains(&candidate_lower));
                if related {
                    problems.push(format!(
                        "candidate '{}' of '{}' overlaps canonical key '{}'",
                        candidate, entry.canonical, other.canonical
                    ));
                }
            }
        }
    }

    problems
}
