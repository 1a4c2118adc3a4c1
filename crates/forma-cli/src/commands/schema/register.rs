use std::path::Path;

use anyhow::Context;
use forma_core::schema_record::RegisterSchemaRequest;
use forma_schema::contracts::{ContractRegistry, REGISTER_SCHEMA_REQUEST};

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::read_json_file;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(file: &Path, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let payload = read_json_file(file)?;

    ContractRegistry::new()
        .validate(REGISTER_SCHEMA_REQUEST, &payload)
        .with_context(|| format!("{} is not a valid schema registration", file.display()))?;

    let request: RegisterSchemaRequest = serde_json::from_value(payload)?;
    let schema = ctx.service.schemas().register(request).await?;
    output(&schema, flags.format)
}
