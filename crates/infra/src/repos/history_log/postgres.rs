use super::IHistoryLogRepo;
use crate::repos::shared::repo::DeleteResult;
use chrono::{DateTime, Utc};
use followup_domain::{HistoryLog, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresHistoryLogRepo {
    pool: PgPool,
}

impl PostgresHistoryLogRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct HistoryLogRaw {
    history_log_uid: Uuid,
    user_uid: Uuid,
    reminder_uid: Uuid,
    contact_name: String,
    channel: String,
    sent_at: DateTime<Utc>,
    status: String,
    details: String,
}

impl TryFrom<HistoryLogRaw> for HistoryLog {
    type Error = anyhow::Error;

    fn try_from(e: HistoryLogRaw) -> anyhow::Result<Self> {
        Ok(Self {
            id: e.history_log_uid.into(),
            user_id: e.user_uid.into(),
            reminder_id: e.reminder_uid.into(),
            contact_name: e.contact_name,
            channel: e.channel.parse().map_err(anyhow::Error::msg)?,
            sent_at: e.sent_at,
            status: e.status.parse().map_err(anyhow::Error::msg)?,
            details: e.details,
        })
    }
}

#[async_trait::async_trait]
impl IHistoryLogRepo for PostgresHistoryLogRepo {
    async fn insert(&self, log: &HistoryLog) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO history_logs
                (history_log_uid, user_uid, reminder_uid, contact_name, channel, sent_at, status, details)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(log.id.inner_ref())
        .bind(log.user_id.inner_ref())
        .bind(log.reminder_id.inner_ref())
        .bind(&log.contact_name)
        .bind(log.channel.as_str())
        .bind(log.sent_at)
        .bind(log.status.as_str())
        .bind(&log.details)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("Unable to insert history log: {:?}. DB returned error: {:?}", log, e);
            e
        })?;

        Ok(())
    }

    async fn find_by_user(&self, user_id: &ID) -> Vec<HistoryLog> {
        sqlx::query_as::<_, HistoryLogRaw>(
            r#"
            SELECT * FROM history_logs AS h
            WHERE h.user_uid = $1
            ORDER BY h.sent_at DESC
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Find history logs for user: {} failed. DB returned error: {:?}", user_id, e);
            e
        })
        .unwrap_or_default()
        .into_iter()
        .filter_map(|log| match HistoryLog::try_from(log) {
            Ok(log) => Some(log),
            Err(e) => {
                error!("Skipping malformed history log row: {:?}", e);
                None
            }
        })
        .collect()
    }

    async fn delete_by_user(&self, user_id: &ID) -> anyhow::Result<DeleteResult> {
        let res = sqlx::query(
            r#"
            DELETE FROM history_logs AS h
            WHERE h.user_uid = $1
            "#,
        )
        .bind(user_id.inner_ref())
        .execute(&self.pool)
        .await?;

        Ok(DeleteResult {
            deleted_count: res.rows_affected() as i64,
        })
    }
}
