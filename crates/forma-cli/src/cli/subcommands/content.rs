use std::path::PathBuf;

use clap::Subcommand;

/// Generic content commands over a named collection.
#[derive(Clone, Debug, Subcommand)]
pub enum ContentCommands {
    /// List documents in a collection.
    List {
        collection: String,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a document by id.
    Get { collection: String, id: String },
    /// Create a document from a JSON object.
    Create {
        collection: String,
        /// Inline JSON object
        #[arg(long, conflicts_with = "file")]
        data: Option<String>,
        /// File containing a JSON object
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Merge top-level fields into a document.
    Update {
        collection: String,
        id: String,
        /// Inline JSON object
        #[arg(long, conflicts_with = "file")]
        data: Option<String>,
        /// File containing a JSON object
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Delete a document by id.
    Delete { collection: String, id: String },
}
