use crate::cli::GlobalFlags;
use crate::commands::shared::limit::apply_limit;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    collection: &str,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut docs = ctx.service.content().find_all(collection).await?;
    apply_limit(&mut docs, limit)?;
    output(&docs, flags.format)
}
