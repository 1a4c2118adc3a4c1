use clap::Subcommand;

use crate::cli::subcommands::{ContentCommands, SchemaCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Schema registry: register, generate, inspect and validate schemas.
    Schema {
        #[command(subcommand)]
        action: SchemaCommands,
    },
    /// Generic CRUD on any collection.
    Content {
        #[command(subcommand)]
        action: ContentCommands,
    },
    /// List domain enums and their values.
    Enums,
}
