use std::path::Path;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::read_payload;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    collection: &str,
    id: &str,
    data: Option<&str>,
    file: Option<&Path>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let fields = read_payload(data, file)?;
    let doc = ctx
        .service
        .content()
        .update(collection, id, fields)
        .await?
        .ok_or_else(|| anyhow::anyhow!("no document '{id}' in collection '{collection}'"))?;
    output(&doc, flags.format)
}
