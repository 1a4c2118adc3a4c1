//! # forma-core
//!
//! Core types shared across all Forma crates.
//!
//! This crate provides:
//! - The field-schema model (`FieldKind`, `FieldSchema`, `FieldMap`)
//! - Persisted schema records and registration requests
//! - The open `Document` record and the store's native `ObjectId`
//! - The type descriptor capability used by the schema introspector
//! - Domain enums (with the read-only enum directory) and the built-in models
//! - Cross-cutting error types and bulk/report response types

pub mod descriptor;
pub mod document;
pub mod enums;
pub mod errors;
pub mod field_schema;
pub mod ids;
pub mod models;
pub mod responses;
pub mod schema_record;
