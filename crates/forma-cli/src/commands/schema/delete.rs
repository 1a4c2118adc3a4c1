use serde_json::json;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(collection: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.service.schemas().delete_by_collection(collection).await?;
    output(&json!({ "collection": collection, "deleted": true }), flags.format)
}
