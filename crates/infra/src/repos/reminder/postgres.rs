use super::IReminderRepo;
use crate::repos::shared::repo::DeleteResult;
use chrono::{DateTime, Utc};
use followup_domain::{Reminder, ReminderStatus, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresReminderRepo {
    pool: PgPool,
}

impl PostgresReminderRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReminderRaw {
    reminder_uid: Uuid,
    user_uid: Uuid,
    contact_uid: Uuid,
    channel: String,
    message: String,
    scheduled_at: DateTime<Utc>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ReminderRaw> for Reminder {
    type Error = anyhow::Error;

    fn try_from(e: ReminderRaw) -> anyhow::Result<Self> {
        Ok(Self {
            id: e.reminder_uid.into(),
            user_id: e.user_uid.into(),
            contact_id: e.contact_uid.into(),
            channel: e.channel.parse().map_err(anyhow::Error::msg)?,
            message: e.message,
            scheduled_at: e.scheduled_at,
            status: e.status.parse().map_err(anyhow::Error::msg)?,
            created_at: e.created_at,
            updated_at: e.updated_at,
        })
    }
}

fn to_domain(rows: Vec<ReminderRaw>) -> Vec<Reminder> {
    rows.into_iter()
        .filter_map(|row| match Reminder::try_from(row) {
            Ok(reminder) => Some(reminder),
            Err(e) => {
                error!("Skipping malformed reminder row: {:?}", e);
                None
            }
        })
        .collect()
}

#[async_trait::async_trait]
impl IReminderRepo for PostgresReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO reminders
                (reminder_uid, user_uid, contact_uid, channel, message, scheduled_at, status, created_at, updated_at)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(reminder.id.inner_ref())
        .bind(reminder.user_id.inner_ref())
        .bind(reminder.contact_id.inner_ref())
        .bind(reminder.channel.as_str())
        .bind(&reminder.message)
        .bind(reminder.scheduled_at)
        .bind(reminder.status.as_str())
        .bind(reminder.created_at)
        .bind(reminder.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("Unable to insert reminder: {:?}. DB returned error: {:?}", reminder, e);
            e
        })?;

        Ok(())
    }

    async fn save_pending(&self, reminder: &Reminder) -> anyhow::Result<bool> {
        let res = sqlx::query(
            r#"
            UPDATE reminders
            SET contact_uid = $2,
            channel = $3,
            message = $4,
            scheduled_at = $5,
            updated_at = $6
            WHERE reminder_uid = $1 AND status = $7
            "#,
        )
        .bind(reminder.id.inner_ref())
        .bind(reminder.contact_id.inner_ref())
        .bind(reminder.channel.as_str())
        .bind(&reminder.message)
        .bind(reminder.scheduled_at)
        .bind(reminder.updated_at)
        .bind(ReminderStatus::Pending.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("Unable to save reminder: {:?}. DB returned error: {:?}", reminder, e);
            e
        })?;

        Ok(res.rows_affected() == 1)
    }

    async fn delete_pending(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        let row = sqlx::query_as::<_, ReminderRaw>(
            r#"
            DELETE FROM reminders AS r
            WHERE r.reminder_uid = $1 AND r.status = $2
            RETURNING *
            "#,
        )
        .bind(reminder_id.inner_ref())
        .bind(ReminderStatus::Pending.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("Delete reminder with id: {} failed. DB returned error: {:?}", reminder_id, e);
            e
        })?;

        row.map(Reminder::try_from).transpose()
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        let row = sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders AS r
            WHERE r.reminder_uid = $1
            "#,
        )
        .bind(reminder_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("Find reminder with id: {} failed. DB returned error: {:?}", reminder_id, e);
            e
        })
        .ok()??;
        row.try_into().ok()
    }

    async fn find_by_user(&self, user_id: &ID, status: Option<ReminderStatus>) -> Vec<Reminder> {
        let rows = sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders AS r
            WHERE r.user_uid = $1 AND ($2::text IS NULL OR r.status = $2)
            ORDER BY r.scheduled_at ASC
            "#,
        )
        .bind(user_id.inner_ref())
        .bind(status.map(|s| s.as_str()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Find reminders for user: {} failed. DB returned error: {:?}", user_id, e);
            e
        })
        .unwrap_or_default();

        to_domain(rows)
    }

    async fn find_due(&self, before: DateTime<Utc>) -> anyhow::Result<Vec<Reminder>> {
        let rows = sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders AS r
            WHERE r.status = $1 AND r.scheduled_at <= $2
            ORDER BY r.scheduled_at ASC
            "#,
        )
        .bind(ReminderStatus::Pending.as_str())
        .bind(before)
        .fetch_all(&self.pool)
        .await?;

        Ok(to_domain(rows))
    }

    async fn update_status(
        &self,
        reminder_id: &ID,
        from: ReminderStatus,
        to: ReminderStatus,
        now: DateTime<Utc>,
    ) -> anyhow::Result<bool> {
        let res = sqlx::query(
            r#"
            UPDATE reminders
            SET status = $3,
            updated_at = $4
            WHERE reminder_uid = $1 AND status = $2
            "#,
        )
        .bind(reminder_id.inner_ref())
        .bind(from.as_str())
        .bind(to.as_str())
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(res.rows_affected() == 1)
    }

    async fn delete_by_contact(&self, contact_id: &ID) -> anyhow::Result<DeleteResult> {
        let res = sqlx::query(
            r#"
            DELETE FROM reminders AS r
            WHERE r.contact_uid = $1
            "#,
        )
        .bind(contact_id.inner_ref())
        .execute(&self.pool)
        .await?;

        Ok(DeleteResult {
            deleted_count: res.rows_affected() as i64,
        })
    }

    async fn delete_by_user(&self, user_id: &ID) -> anyhow::Result<DeleteResult> {
        let res = sqlx::query(
            r#"
            DELETE FROM reminders AS r
            WHERE r.user_uid = $1
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
