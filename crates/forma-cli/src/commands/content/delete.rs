use serde_json::json;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    collection: &str,
    id: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.service.content().delete(collection, id).await?;
    output(
        &json!({ "collection": collection, "id": id, "deleted": true }),
        flags.format,
    )
}
