mod contact;
mod history_log;
mod mail;
mod reminder;
mod shared;
mod user;

use contact::{IContactRepo, InMemoryContactRepo, PostgresContactRepo};
use history_log::{IHistoryLogRepo, InMemoryHistoryLogRepo, PostgresHistoryLogRepo};
use mail::{IMailRepo, InMemoryMailRepo, PostgresMailRepo};
use reminder::{IReminderRepo, InMemoryReminderRepo, PostgresReminderRepo};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;
use user::{IUserRepo, InMemoryUserRepo, PostgresUserRepo};

pub use shared::repo::DeleteResult;
pub use user::InsertUserError;

#[derive(Clone)]
pub struct Repos {
    pub users: Arc<dyn IUserRepo>,
    pub contacts: Arc<dyn IContactRepo>,
    pub reminders: Arc<dyn IReminderRepo>,
    pub mails: Arc<dyn IMailRepo>,
    pub history_logs: Arc<dyn IHistoryLogRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        Ok(Self {
            users: Arc::new(PostgresUserRepo::new(pool.clone())),
            contacts: Arc::new(PostgresContactRepo::new(pool.clone())),
            reminders: Arc::new(PostgresReminderRepo::new(pool.clone())),
            mails: Arc::new(PostgresMailRepo::new(pool.clone())),
            history_logs: Arc::new(PostgresHistoryLogRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepo::new()),
            contacts: Arc::new(InMemoryContactRepo::new()),
            reminders: Arc::new(InMemoryReminderRepo::new()),
            mails: Arc::new(InMemoryMailRepo::new()),
            history_logs: Arc::new(InMemoryHistoryLogRepo::new()),
        }
    }
}
