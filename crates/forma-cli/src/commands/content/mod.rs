mod create;
mod delete;
mod get;
mod list;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ContentCommands;
use crate::context::AppContext;

/// Handle `forma content`.
pub async fn handle(
    action: &ContentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ContentCommands::List { collection, limit } => {
            list::run(collection, *limit, ctx, flags).await
        }
        ContentCommands::Get { collection, id } => get::run(collection, id, ctx, flags).await,
        ContentCommands::Create {
            collection,
            data,
            file,
        } => create::run(collection, data.as_deref(), file.as_deref(), ctx, flags).await,
        ContentCommands::Update {
            collection,
            id,
            data,
            file,
        } => update::run(collection, id, data.as_deref(), file.as_deref(), ctx, flags).await,
        ContentCommands::Delete { collection, id } => {
            delete::run(collection, id, ctx, flags).await
        }
    }
}
