use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(type_name: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let preview = ctx.service.schemas().preview(type_name)?;
    output(&preview, flags.format)
}
