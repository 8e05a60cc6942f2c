use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashMap;
use std::marker::PhantomData;

use super::alias::AliasTable;
use super::outbound::outbound_for;
use super::schemas::{
    AdmissionSchema, DashboardSchema, DoctorVisitSchema, Entity, LabTestSchema, NurseVisitSchema,
    RoomCapacitySchema, VitalsSchema,
};
use super::{EntitySchema, Normalized, SchemaNormalizer};
use crate::error::{NormalizerError, Result};

/// Entity normalization with the record type erased to JSON
pub trait EntityNormalizer: Send + Sync {
    fn entity(&self) -> Entity;

    fn fields(&self) -> AliasTable;

    /// Canonical records of a list payload as a JSON array
    fn normalize_list(&self, normalizer: &SchemaNormalizer, payload: &Value) -> Result<Normalized<Value>>;

    /// Canonical record of a single-object payload, `null` when there is none
    fn normalize_one(&self, normalizer: &SchemaNormalizer, payload: &Value) -> Result<Normalized<Value>>;

    /// Outbound shape of a single-object payload, `null` when there is none
    fn outbound(&self, normalizer: &SchemaNormalizer, payload: &Value) -> Result<Normalized<Value>>;
}

struct SchemaAdapter<S>(PhantomData<fn() -> S>);

impl<S> SchemaAdapter<S> {
    fn boxed() -> Box<dyn EntityNormalizer>
    where
        S: EntitySchema + 'static,
    {
        Box::new(Self(PhantomData))
    }
}

impl<S: EntitySchema> EntityNormalizer for SchemaAdapter<S> {
    fn entity(&self) -> Entity {
        S::ENTITY
    }

    fn fields(&self) -> AliasTable {
        S::fields()
    }

    fn normalize_list(&self, normalizer: &SchemaNormalizer, payload: &Value) -> Result<Normalized<Value>> {
        let Normalized { records, diagnostics } = normalizer.normalize_list::<S>(payload);
        Ok(Normalized {
            records: serde_json::to_value(records)?,
            diagnostics,
        })
    }

    fn normalize_one(&self, normalizer: &SchemaNormalizer, payload: &Value) -> Result<Normalized<Value>> {
        let Normalized { records, diagnostics } = normalizer.normalize_one::<S>(payload);
        Ok(Normalized {
            records: serde_json::to_value(records)?,
            diagnostics,
        })
    }

    fn outbound(&self, normalizer: &SchemaNormalizer, payload: &Value) -> Result<Normalized<Value>> {
        let Normalized { records, diagnostics } = normalizer.normalize_one::<S>(payload);
        let records = match records {
            Some(record) => Value::Object(outbound_for::<S>(&record)?),
            None => Value::Null,
        };
        Ok(Normalized { records, diagnostics })
    }
}

/// Lookup of entity normalizers by [`Entity`] tag
pub struct EntityRegistry {
    normalizers: HashMap<Entity, Box<dyn EntityNormalizer>>,
}

impl EntityRegistry {
    /// Create a registry with every built-in entity registered
    pub fn new() -> Self {
        let mut registry = Self {
            normalizers: HashMap::new(),
        };

        registry.register(SchemaAdapter::<AdmissionSchema>::boxed());
        registry.register(SchemaAdapter::<LabTestSchema>::boxed());
        registry.register(SchemaAdapter::<DoctorVisitSchema>::boxed());
        registry.register(SchemaAdapter::<NurseVisitSchema>::boxed());
        registry.register(SchemaAdapter::<VitalsSchema>::boxed());
        registry.register(SchemaAdapter::<RoomCapacitySchema>::boxed());
        registry.register(SchemaAdapter::<DashboardSchema>::boxed());

        registry
    }

    /// Register a normalizer, replacing any previous one for its entity
    pub fn register(&mut self, normalizer: Box<dyn EntityNormalizer>) {
        self.normalizers.insert(normalizer.entity(), normalizer);
    }

    pub fn get(&self, entity: Entity) -> Option<&dyn EntityNormalizer> {
        self.normalizers.get(&entity).map(|n| n.as_ref())
    }

    /// Like [`get`](Self::get) but an unregistered entity is an error
    pub fn require(&self, entity: Entity) -> Result<&dyn EntityNormalizer> {
        self.get(entity)
            .ok_or_else(|| NormalizerError::UnknownEntity(entity.name().to_string()))
    }

    /// Registered entities in declaration order
    pub fn list_entities(&self) -> Vec<Entity> {
        let mut entities: Vec<Entity> = self.normalizers.keys().copied().collect();
        entities.sort();
        entities
    }
}

impl Default for EntityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide registry of the built-in entities
pub static REGISTRY: Lazy<EntityRegistry> = Lazy::new(EntityRegistry::new);
