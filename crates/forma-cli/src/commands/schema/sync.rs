use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Register `types`, or the configured startup types when none are given.
///
/// The report is always printed; the command fails afterwards if any type
/// could not be registered.
pub async fn run(types: &[String], ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let types = if types.is_empty() {
        ctx.config.registration.types.as_slice()
    } else {
        types
    };

    let report = ctx.service.schemas().register_types(types).await;
    output(&report, flags.format)?;

    if !report.is_complete() {
        anyhow::bail!(
            "{} of {} types failed to register",
            report.failures.len(),
            report.total
        );
    }
    Ok(())
}
