mod config;
mod repos;
mod services;
mod system;

pub use config::Config;
pub use repos::{DeleteResult, InsertUserError, Repos};
pub use services::*;
use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
pub use system::{ISys, RealSys, StaticTimeSys};
use tracing::warn;

#[derive(Clone)]
pub struct FollowupContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub text_messages: Arc<dyn ITextMessageGateway>,
}

struct ContextParams {
    pub postgres_connection_string: String,
}

impl FollowupContext {
    async fn create(params: ContextParams) -> anyhow::Result<Self> {
        let repos = Repos::create_postgres(&params.postgres_connection_string).await?;
        Ok(Self {
            repos,
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            text_messages: Arc::new(LoggingTextMessageGateway {}),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            text_messages: Arc::new(LoggingTextMessageGateway {}),
        }
    }
}

/// Will setup the infrastructure context given the environment.
/// Falls back to inmemory repositories when `DATABASE_URL` is not set.
pub async fn setup_context() -> anyhow::Result<FollowupContext> {
    match get_psql_connection_string() {
        Some(postgres_connection_string) => {
            FollowupContext::create(ContextParams {
                postgres_connection_string,
            })
            .await
        }
        None => {
            warn!("DATABASE_URL is not set, using inmemory repositories. Nothing will be persisted.");
            Ok(FollowupContext::create_inmemory())
        }
    }
}

fn get_psql_connection_string() -> Option<String> {
    const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

    std::env::var(PSQL_CONNECTION_STRING)
        .ok()
        .filter(|conn| !conn.is_empty())
}

/// Runs the pending migrations. Does nothing for inmemory setups.
pub async fn run_migration() -> Result<(), MigrateError> {
    let conn = match get_psql_connection_string() {
        Some(conn) => conn,
        None => return Ok(()),
    };
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&conn)
        .await?;

    sqlx::migrate!().run(&pool).await
}

/// Inmemory context plus a postgres one when `DATABASE_URL` is set
#[cfg(test)]
pub async fn create_test_contexts() -> Vec<FollowupContext> {
    let mut contexts = vec![FollowupContext::create_inmemory()];
    if get_psql_connection_string().is_some() {
        run_migration().await.expect("Migrations to run");
        contexts.push(setup_context().await.expect("Postgres context to be created"));
    }
    contexts
}
