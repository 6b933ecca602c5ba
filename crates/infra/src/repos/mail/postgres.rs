use super::IMailRepo;
use chrono::{DateTime, Utc};
use followup_domain::{MailMessage, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresMailRepo {
    pool: PgPool,
}

impl PostgresMailRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MailRaw {
    mail_uid: Uuid,
    reminder_uid: Uuid,
    recipients: Vec<String>,
    subject: String,
    html: String,
    created_at: DateTime<Utc>,
}

impl From<MailRaw> for MailMessage {
    fn from(e: MailRaw) -> Self {
        Self {
            id: e.mail_uid.into(),
            reminder_id: e.reminder_uid.into(),
            to: e.recipients,
            subject: e.subject,
            html: e.html,
            created_at: e.created_at,
        }
    }
}

#[async_trait::async_trait]
impl IMailRepo for PostgresMailRepo {
    async fn insert(&self, mail: &MailMessage) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO mail
                (mail_uid, reminder_uid, recipients, subject, html, created_at)
            VALUES($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(mail.id.inner_ref())
        .bind(mail.reminder_id.inner_ref())
        .bind(&mail.to)
        .bind(&mail.subject)
        .bind(&mail.html)
        .bind(mail.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("Unable to enqueue mail: {:?}. DB returned error: {:?}", mail, e);
            e
        })?;

        Ok(())
    }

    async fn find_by_reminder(&self, reminder_id: &ID) -> Vec<MailMessage> {
        sqlx::query_as::<_, MailRaw>(
            r#"
            SELECT * FROM mail AS m
            WHERE m.reminder_uid = $1
            ORDER BY m.created_at ASC
            "#,
        )
        .bind(reminder_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Find mail for reminder: {} failed. DB returned error: {:?}", reminder_id, e);
            e
        })
        .unwrap_or_default()
        .into_iter()
        .map(|mail| mail.into())
        .collect()
    }
}
