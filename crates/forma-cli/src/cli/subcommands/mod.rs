mod content;
mod schema;

pub use content::ContentCommands;
pub use schema::SchemaCommands;
