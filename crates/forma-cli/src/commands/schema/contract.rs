use forma_schema::contracts::ContractRegistry;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Print one contract, or the sorted list of contract names.
pub fn run(name: Option<&str>, flags: &GlobalFlags) -> anyhow::Result<()> {
    let contracts = ContractRegistry::new();

    let Some(name) = name else {
        return output(&contracts.list(), flags.format);
    };

    let contract = contracts.get(name).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown contract '{name}' (available: {})",
            contracts.list().join(", ")
        )
    })?;
    output(contract, flags.format)
}
