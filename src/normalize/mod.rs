//! Tolerant normalization of backend payloads into canonical records.
//!
//! The flow for a list endpoint is:
//! payload -> [`envelope::unwrap_list`] -> one [`FieldReader`] per object ->
//! [`EntitySchema::map`] -> synthetic id pass. Nothing in this module fails on
//! bad input; problems are reported through [`Diagnostics`].

use serde::Serialize;
use serde_json::Value;
use std::fmt;
use tracing::{debug, info};

use crate::config::NormalizerConfig;
use crate::constants::DEFAULT_SYNTHETIC_ID_OFFSET;
use crate::domain::RecordId;
use crate::observability::metrics;

pub mod alias;
pub mod coerce;
pub mod diagnostics;
pub mod enums;
pub mod envelope;
pub mod outbound;
pub mod reader;
pub mod registry;
pub mod resolver;
pub mod schemas;

pub use alias::{AliasEntry, AliasTable};
pub use diagnostics::{Diagnostic, Diagnostics};
pub use reader::FieldReader;
pub use registry::{EntityNormalizer, EntityRegistry, REGISTRY};
pub use resolver::FieldResolver;
pub use schemas::Entity;

/// A decoded JSON object as received from the backend
pub type RawRecord = serde_json::Map<String, Value>;

/// How one entity's raw records become canonical records
pub trait EntitySchema {
    type Record: Serialize + Clone + fmt::Debug + Send + Sync + 'static;

    const ENTITY: Entity;

    /// Alias entries for every canonical field, in output order
    fn fields() -> AliasTable;

    /// Build one canonical record. Must not fail.
    fn map(reader: &mut FieldReader<'_>) -> Self::Record;

    /// The record's identifier, for entities that carry one
    fn record_id(_record: &mut Self::Record) -> Option<&mut RecordId> {
        None
    }
}

/// Output of one normalization call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Normalized<T> {
    pub records: T,
    pub diagnostics: Diagnostics,
}

/// Entry point of the engine. Holds only immutable settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaNormalizer {
    resolver: FieldResolver,
    synthetic_id_offset: i64,
}

impl Default for SchemaNormalizer {
    fn default() -> Self {
        Self {
            resolver: FieldResolver::default(),
            synthetic_id_offset: DEFAULT_SYNTHETIC_ID_OFFSET,
        }
    }
}

impl SchemaNormalizer {
    pub fn new(config: &NormalizerConfig) -> Self {
        Self {
            resolver: FieldResolver::from_config(&config.resolver),
            synthetic_id_offset: config.ids.synthetic_offset,
        }
    }

    pub fn resolver(&self) -> &FieldResolver {
        &self.resolver
    }

    pub fn synthetic_id_offset(&self) -> i64 {
        self.synthetic_id_offset
    }

    /// Map one raw object. Ids are left as found.
    pub fn map_record<S: EntitySchema>(&self, raw: &RawRecord, diagnostics: &mut Diagnostics) -> S::Record {
        let mut reader = FieldReader::new(raw, &self.resolver, diagnostics);
        let record = S::map(&mut reader);
        metrics::normalize::record_mapped(S::ENTITY.name());
        record
    }

    /// Map already-unwrapped list elements. Non-objects are skipped but keep
    /// their position for synthetic id numbering.
    pub fn map_list<S: EntitySchema>(&self, items: &[Value], diagnostics: &mut Diagnostics) -> Vec<S::Record> {
        let mut mapped = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match item {
                Value::Object(raw) => mapped.push((index, self.map_record::<S>(raw, diagnostics))),
                other => {
                    diagnostics.push(Diagnostic::non_object_record(index, other));
                    metrics::normalize::record_skipped(S::ENTITY.name());
                }
            }
        }

        self.assign_synthetic_ids::<S>(&mut mapped);
        mapped.into_iter().map(|(_, record)| record).collect()
    }

    /// Normalize the payload of a list endpoint
    pub fn normalize_list<S: EntitySchema>(&self, payload: &Value) -> Normalized<Vec<S::Record>> {
        let mut diagnostics = Diagnostics::new();
        let items = envelope::unwrap_list(payload, &mut diagnostics);
        let records = self.map_list::<S>(items, &mut diagnostics);

        metrics::normalize::batch_processed(S::ENTITY.name(), records.len());
        info!(
            entity = S::ENTITY.name(),
            records = records.len(),
            diagnostics = diagnostics.len(),
            "normalized list payload"
        );

        Normalized { records, diagnostics }
    }

    /// Normalize the payload of a single-object endpoint. No synthetic id is
    /// assigned here.
    pub fn normalize_one<S: EntitySchema>(&self, payload: &Value) -> Normalized<Option<S::Record>> {
        let mut diagnostics = Diagnostics::new();
        let records = match envelope::unwrap_object(payload) {
            Some(raw) => Some(self.map_record::<S>(raw, &mut diagnostics)),
            None => {
                debug!(entity = S::ENTITY.name(), "no record in single-object payload");
                None
            }
        };
        Normalized { records, diagnostics }
    }

    /// Placeholder ids are `base + index` with `base = max(offset, max_real + 1)`.
    /// If that range would overflow, ids count down from below the smallest
    /// real id instead.
    fn assign_synthetic_ids<S: EntitySchema>(&self, mapped: &mut [(usize, S::Record)]) {
        let real: Vec<i64> = mapped
            .iter_mut()
            .filter_map(|(_, record)| S::record_id(record).and_then(|id| id.value))
            .collect();
        let offset = self.synthetic_id_offset;
        let base = match real.iter().max() {
            Some(&max) if max >= offset => {
                debug!(max, offset, "real ids reach the synthetic range");
                max.checked_add(1)
            }
            _ => Some(offset),
        };
        let last_index = mapped.last().map(|(index, _)| *index as i64).unwrap_or(0);
        let upward = base.filter(|b| b.checked_add(last_index).is_some());
        let floor = real.iter().copied().min().unwrap_or(offset).min(offset);

        let mut assigned = 0u64;
        for (index, record) in mapped.iter_mut() {
            if let Some(id) = S::record_id(record) {
                if id.value.is_none() {
                    let value = match upward {
                        Some(base) => base + *index as i64,
                        None => floor.saturating_sub(1 + assigned as i64),
                    };
                    *id = RecordId::synthetic(value);
                    assigned += 1;
                }
            }
        }

        metrics::normalize::synthetic_ids_assigned(S::ENTITY.name(), assigned);
    }
}
