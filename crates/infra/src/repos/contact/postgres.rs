use super::IContactRepo;
use crate::repos::shared::repo::DeleteResult;
use chrono::{DateTime, Utc};
use followup_domain::{Contact, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresContactRepo {
    pool: PgPool,
}

impl PostgresContactRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ContactRaw {
    contact_uid: Uuid,
    user_uid: Uuid,
    name: String,
    email: String,
    phone: String,
    status: String,
    last_contacted: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl TryFrom<ContactRaw> for Contact {
    type Error = anyhow::Error;

    fn try_from(e: ContactRaw) -> anyhow::Result<Self> {
        Ok(Self {
            id: e.contact_uid.into(),
            user_id: e.user_uid.into(),
            name: e.name,
            email: e.email,
            phone: e.phone,
            status: e.status.parse().map_err(anyhow::Error::msg)?,
            last_contacted: e.last_contacted,
            created_at: e.created_at,
        })
    }
}

fn to_domain(rows: Vec<ContactRaw>) -> Vec<Contact> {
    rows.into_iter()
        .filter_map(|row| match Contact::try_from(row) {
            Ok(contact) => Some(contact),
            Err(e) => {
                error!("Skipping malformed contact row: {:?}", e);
                None
            }
        })
        .collect()
}

#[async_trait::async_trait]
impl IContactRepo for PostgresContactRepo {
    async fn insert(&self, contact: &Contact) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO contacts
                (contact_uid, user_uid, name, email, phone, status, last_contacted, created_at)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(contact.id.inner_ref())
        .bind(contact.user_id.inner_ref())
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.phone)
        .bind(contact.status.as_str())
        .bind(contact.last_contacted)
        .bind(contact.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("Unable to insert contact: {:?}. DB returned error: {:?}", contact, e);
            e
        })?;

        Ok(())
    }

    async fn save(&self, contact: &Contact) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE contacts
            SET name = $2,
            email = $3,
            phone = $4,
            status = $5
            WHERE contact_uid = $1
            "#,
        )
        .bind(contact.id.inner_ref())
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.phone)
        .bind(contact.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("Unable to save contact: {:?}. DB returned error: {:?}", contact, e);
            e
        })?;

        Ok(())
    }

    async fn update_last_contacted(
        &self,
        contact_id: &ID,
        last_contacted: DateTime<Utc>,
    ) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE contacts
            SET last_contacted = $2
            WHERE contact_uid = $1
            "#,
        )
        .bind(contact_id.inner_ref())
        .bind(last_contacted)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("Unable to update last contacted of contact: {}. DB returned error: {:?}", contact_id, e);
            e
        })?;

        Ok(())
    }

    async fn delete(&self, contact_id: &ID) -> Option<Contact> {
        let row = sqlx::query_as::<_, ContactRaw>(
            r#"
            DELETE FROM contacts AS c
            WHERE c.contact_uid = $1
            RETURNING *
            "#,
        )
        .bind(contact_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("Delete contact with id: {} failed. DB returned error: {:?}", contact_id, e);
            e
        })
        .ok()??;
        row.try_into().ok()
    }

    async fn find(&self, contact_id: &ID) -> Option<Contact> {
        let row = sqlx::query_as::<_, ContactRaw>(
            r#"
            SELECT * FROM contacts AS c
            WHERE c.contact_uid = $1
            "#,
        )
        .bind(contact_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("Find contact with id: {} failed. DB returned error: {:?}", contact_id, e);
            e
        })
        .ok()??;
        row.try_into().ok()
    }

    async fn find_many(&self, contact_ids: &[ID]) -> anyhow::Result<Vec<Contact>> {
        let contact_ids = contact_ids
            .iter()
            .map(|id| *id.inner_ref())
            .collect::<Vec<_>>();

        let rows = sqlx::query_as::<_, ContactRaw>(
            r#"
            SELECT * FROM contacts AS c
            WHERE c.contact_uid = ANY($1)
            "#,
        )
        .bind(&contact_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(to_domain(rows))
    }

    async fn find_by_user(&self, user_id: &ID) -> Vec<Contact> {
        let rows = sqlx::query_as::<_, ContactRaw>(
            r#"
            SELECT * FROM contacts AS c
            WHERE c.user_uid = $1
            ORDER BY c.created_at DESC
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Find contacts for user: {} failed. DB returned error: {:?}", user_id, e);
            e
        })
        .unwrap_or_default();

        to_domain(rows)
    }

    async fn delete_by_user(&self, user_id: &ID) -> anyhow::Result<DeleteResult> {
        let res = sqlx::query(
            r#"
            DELETE FROM contacts AS c
            WHERE c.user_uid = $1
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
