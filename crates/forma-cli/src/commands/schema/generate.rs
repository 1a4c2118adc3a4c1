use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(type_name: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = ctx.service.schemas().generate_from_type(type_name).await?;
    output(&schema, flags.format)
}
