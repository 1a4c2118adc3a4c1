use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    collection: &str,
    id: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let doc = ctx
        .service
        .content()
        .find_by_id(collection, id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("no document '{id}' in collection '{collection}'"))?;
    output(&doc, flags.format)
}
