use std::path::PathBuf;

use clap::Subcommand;

/// Schema registry commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SchemaCommands {
    /// List all stored schemas.
    List,
    /// Get the schema for a collection.
    Get { collection: String },
    /// Generate a schema from a built-in type and store it.
    Generate { type_name: String },
    /// Register a hand-written schema from a JSON file.
    Register {
        #[arg(long)]
        file: PathBuf,
    },
    /// Delete the schema for a collection.
    Delete { collection: String },
    /// Report references of a type that point at unregistered collections.
    ValidateRefs { type_name: String },
    /// Show the schema a type would generate, without storing it.
    Inspect { type_name: String },
    /// List types available for generation.
    Types,
    /// Generate schemas for several types, continuing past failures.
    Sync {
        /// Type names (defaults to registration.types)
        types: Vec<String>,
    },
    /// Print a JSON Schema contract, or list contract names.
    Contract { name: Option<String> },
}
