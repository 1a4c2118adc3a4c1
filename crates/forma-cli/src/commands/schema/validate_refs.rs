use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Prints only the fields with issues; an empty object means every reference
/// resolves.
pub async fn run(type_name: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = ctx.service.schemas().validate_references(type_name).await?;
    output(&report, flags.format)
}
