use anyhow::Context;
use forma_config::FormaConfig;

/// Load `.env` from the working directory, then the layered configuration.
pub fn load_config() -> anyhow::Result<FormaConfig> {
    load_dotenv()?;
    FormaConfig::load().map_err(anyhow::Error::from)
}

fn load_dotenv() -> anyhow::Result<()> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded dotenv file");
            Ok(())
        }
        Err(error) if error.not_found() => Ok(()),
        Err(error) => Err(error).context("failed to load dotenv file"),
    }
}
