use anyhow::Context;
use forma_config::FormaConfig;
use forma_db::FormaService;
use forma_schema::TypeRegistry;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: FormaService,
    pub config: FormaConfig,
}

impl AppContext {
    /// Open the configured database, or the local file given by `--db`.
    pub async fn init(config: FormaConfig, db_override: Option<&str>) -> anyhow::Result<Self> {
        let types = TypeRegistry::builtin();

        let service = match db_override {
            Some(path) => FormaService::new_local(path, types)
                .await
                .with_context(|| format!("failed to open database at {path}"))?,
            None if config.database.is_remote() => {
                FormaService::new_remote(&config.database.url, &config.database.auth_token, types)
                    .await
                    .with_context(|| {
                        format!("failed to connect to database at {}", config.database.url)
                    })?
            }
            None => FormaService::new_local(&config.database.path, types)
                .await
                .with_context(|| format!("failed to open database at {}", config.database.path))?,
        };

        Ok(Self { service, config })
    }

    /// Generate schemas for `registration.types` when startup registration is
    /// enabled. Failures are logged and never abort startup.
    pub async fn register_startup_schemas(&self) {
        if !self.config.registration.enabled {
            return;
        }

        let report = self
            .service
            .register_startup_types(&self.config.registration.types)
            .await;

        if !report.is_complete() {
            tracing::warn!(
                failed = report.failures.len(),
                total = report.total,
                "startup schema registration incomplete"
            );
        }
    }
}
