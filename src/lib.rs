pub mod config;
pub mod constants;
pub mod error;
pub mod observability;

// Canonical record shapes shared by the engine and its callers
pub mod domain;

// Tolerant payload normalization
pub mod normalize;

pub use config::NormalizerConfig;
pub use error::{NormalizerError, Result};
pub use normalize::{Diagnostic, Diagnostics, Entity, EntitySchema, Normalized, SchemaNormalizer, REGISTRY};
