/// Truncate `items` to `limit` entries when a limit is given.
pub fn apply_limit<T>(items: &mut Vec<T>, limit: Option<u32>) -> anyhow::Result<()> {
    if let Some(limit) = limit {
        items.truncate(usize::try_from(limit)?);
    }
    Ok(())
}
