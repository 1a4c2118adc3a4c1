use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(collection: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = ctx
        .service
        .schemas()
        .get_schema(collection)
        .await?
        .ok_or_else(|| anyhow::anyhow!("no schema registered for collection '{collection}'"))?;
    output(&schema, flags.format)
}
