use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    flow::{Flow, FlowRegistry},
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// automatically runs all pending SeaORM migrations to ensure the record tables exist.
/// This function must complete successfully before the application can serve requests.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the flow registry for this process.
///
/// Runs once, before the listener binds. Every flow is registered under its own name;
/// a duplicate or malformed name aborts startup rather than silently shadowing a flow.
///
/// # Arguments
/// - `config` - Application configuration, checked for the model credential
/// - `flows` - Flows to register, in registration order
///
/// # Returns
/// - `Ok(FlowRegistry)` - Registry holding every provided flow
/// - `Err(AppError::FlowErr)` - A flow name was rejected by the registry
pub fn register_flows(
    config: &Config,
    flows: Vec<Arc<dyn Flow>>,
) -> Result<FlowRegistry, AppError> {
    let mut registry = FlowRegistry::new();

    for flow in flows {
        registry.register(flow)?;
    }

    if config.genai_api_key.is_none() && !registry.is_empty() {
        tracing::warn!("GOOGLE_GENAI_API_KEY is not set, flows calling a model will fail");
    }

    tracing::info!(
        count = registry.len(),
        flows = ?registry.names(),
        "Flow registry ready"
    );

    Ok(registry)
}

/// Builds the CORS layer for the read-only API.
///
/// Only `GET` is allowed. Without a configured origin any origin may read.
///
/// # Returns
/// - `Ok(CorsLayer)` - Layer ready to wrap the router
/// - `Err(AppError::ConfigErr)` - `CORS_ALLOWED_ORIGIN` is not a valid header value
pub fn setup_cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let allow_origin = match &config.cors_allowed_origin {
        Some(origin) => {
            let value =
                HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidEnvVar {
                    name: "CORS_ALLOWED_ORIGIN".to_string(),
                    value: origin.clone(),
                    reason: e.to_string(),
                })?;
            AllowOrigin::exact(value)
        }
        None => AllowOrigin::any(),
    };

    Ok(CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_origin(allow_origin))
}

/// Resolves once the process receives Ctrl-C, letting in-flight requests finish.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }

    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::error::flow::FlowError;
    use async_trait::async_trait;
    use serde_json::Value;

    struct NamedFlow(&'static str);

    #[async_trait]
    impl Flow for NamedFlow {
        fn name(&self) -> &str {
            self.0
        }

        fn description(&self) -> &str {
            "test flow"
        }

        async fn run(&self, input: Value) -> Result<Value, FlowError> {
            Ok(input)
        }
    }

    fn config() -> Config {
        Config::from_lookup(|name| match name {
            "DATABASE_URL" => Some("sqlite::memory:".to_string()),
            _ => None,
        })
        .unwrap()
    }

    #[test]
    fn registers_every_flow() {
        let flows: Vec<Arc<dyn Flow>> =
            vec![Arc::new(NamedFlow("tutor")), Arc::new(NamedFlow("digest"))];

        let registry = register_flows(&config(), flows).unwrap();

        assert_eq!(registry.names(), vec!["digest", "tutor"]);
    }

    #[test]
    fn builds_empty_registry_without_flows() {
        let registry = register_flows(&config(), Vec::new()).unwrap();

        assert!(registry.is_empty());
    }

    #[test]
    fn aborts_on_duplicate_flow() {
        let flows: Vec<Arc<dyn Flow>> =
            vec![Arc::new(NamedFlow("tutor")), Arc::new(NamedFlow("tutor"))];

        let result = register_flows(&config(), flows);

        assert!(matches!(
            result,
            Err(AppError::FlowErr(FlowError::DuplicateName(ref name))) if name == "tutor"
        ));
    }

    #[test]
    fn rejects_invalid_cors_origin() {
        let mut config = config();
        config.cors_allowed_origin = Some("https://bad\norigin".to_string());

        let result = setup_cors_layer(&config);

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { .. }))
        ));
    }

    #[test]
    fn accepts_configured_cors_origin() {
        let mut config = config();
        config.cors_allowed_origin = Some("https://portal.example.edu".to_string());

        assert!(setup_cors_layer(&config).is_ok());
    }

    #[tokio::test]
    async fn connects_and_migrates_in_memory_database() {
        use sea_orm::EntityTrait;

        let db = connect_to_database(&config()).await.unwrap();

        let events = entity::prelude::Event::find().all(&db).await.unwrap();
        let payments = entity::prelude::Payment::find().all(&db).await.unwrap();

        assert!(events.is_empty());
        assert!(payments.is_empty());
    }
}
