//! # forma-schema
//!
//! Schema inference and the schema registry for Forma.
//!
//! This crate provides:
//! - [`introspect`]: derives a field-schema tree from a type descriptor
//! - [`types::TypeRegistry`]: name → descriptor lookup, populated at build time
//! - [`registry::SchemaRegistry`]: register, generate, look up, delete and
//!   validate references of per-collection schemas over a [`store::SchemaStore`]
//! - [`contracts::ContractRegistry`]: JSON Schema contracts for API payloads
//!
//! ## Architecture
//!
//! Model types live in `forma-core` and describe themselves with
//! `describe_struct!`. This crate never inspects values; it walks descriptors.
//! The libSQL-backed `SchemaStore` lives in `forma-db`.

pub mod contracts;
pub mod error;
pub mod introspect;
pub mod registry;
pub mod store;
pub mod types;

pub use error::{IntrospectionStage, SchemaError};
pub use registry::SchemaRegistry;
pub use store::{InMemorySchemaStore, SchemaStore};
pub use types::TypeRegistry;
