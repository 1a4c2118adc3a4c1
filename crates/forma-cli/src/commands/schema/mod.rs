mod contract;
mod delete;
mod generate;
mod get;
mod inspect;
mod list;
mod register;
mod sync;
mod types;
mod validate_refs;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SchemaCommands;
use crate::context::AppContext;

pub use contract::run as contract;

/// Handle `forma schema`.
pub async fn handle(
    action: &SchemaCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SchemaCommands::List => list::run(ctx, flags).await,
        SchemaCommands::Get { collection } => get::run(collection, ctx, flags).await,
        SchemaCommands::Generate { type_name } => generate::run(type_name, ctx, flags).await,
        SchemaCommands::Register { file } => register::run(file, ctx, flags).await,
        SchemaCommands::Delete { collection } => delete::run(collection, ctx, flags).await,
        SchemaCommands::ValidateRefs { type_name } => {
            validate_refs::run(type_name, ctx, flags).await
        }
        SchemaCommands::Inspect { type_name } => inspect::run(type_name, ctx, flags),
        SchemaCommands::Types => types::run(ctx, flags),
        SchemaCommands::Sync { types } => sync::run(types, ctx, flags).await,
        SchemaCommands::Contract { name } => contract::run(name.as_deref(), flags),
    }
}
