use forma_core::enums::enum_directory;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `forma enums`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&enum_directory(), flags.format)
}
