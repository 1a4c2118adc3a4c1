use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schemas = ctx.service.schemas().get_all_schemas().await?;
    output(&schemas, flags.format)
}
