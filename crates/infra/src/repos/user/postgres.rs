use super::{IUserRepo, InsertUserError};
use chrono::{DateTime, Utc};
use followup_domain::{Subscription, User, UserProfile, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresUserRepo {
    pool: PgPool,
}

impl PostgresUserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRaw {
    user_uid: Uuid,
    email: String,
    secret_api_key: String,
    subscription_status: String,
    subscribed_at: Option<DateTime<Utc>>,
    subscription_updated_at: Option<DateTime<Utc>>,
    cancelled_at: Option<DateTime<Utc>>,
    display_name: Option<String>,
    business_name: Option<String>,
    phone_number: Option<String>,
    created_at: DateTime<Utc>,
}

const EMAIL_UNIQUE_CONSTRAINT: &str = "users_email_key";

impl From<UserRaw> for User {
    fn from(e: UserRaw) -> Self {
        Self {
            id: e.user_uid.into(),
            email: e.email,
            secret_api_key: e.secret_api_key,
            subscription: Subscription {
                status: e.subscription_status.into(),
                subscribed_at: e.subscribed_at,
                updated_at: e.subscription_updated_at,
                cancelled_at: e.cancelled_at,
            },
            profile: UserProfile {
                display_name: e.display_name,
                business_name: e.business_name,
                phone_number: e.phone_number,
            },
            created_at: e.created_at,
        }
    }
}

#[async_trait::async_trait]
impl IUserRepo for PostgresUserRepo {
    async fn insert(&self, user: &User) -> Result<(), InsertUserError> {
        sqlx::query(
            r#"
            INSERT INTO users
                (user_uid, email, secret_api_key, subscription_status, subscribed_at, subscription_updated_at, cancelled_at,
                display_name, business_name, phone_number, created_at)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(user.id.inner_ref())
        .bind(&user.email)
        .bind(&user.secret_api_key)
        .bind(user.subscription.status.as_str())
        .bind(user.subscription.subscribed_at)
        .bind(user.subscription.updated_at)
        .bind(user.subscription.cancelled_at)
        .bind(&user.profile.display_name)
        .bind(&user.profile.business_name)
        .bind(&user.profile.phone_number)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err)
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some(EMAIL_UNIQUE_CONSTRAINT) =>
            {
                InsertUserError::EmailTaken(user.email.clone())
            }
            e => {
                error!("Unable to insert user: {:?}. DB returned error: {:?}", user, e);
                InsertUserError::Storage(e.into())
            }
        })?;

        Ok(())
    }

    async fn save(&self, user: &User) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET email = $2,
            secret_api_key = $3,
            subscription_status = $4,
            subscribed_at = $5,
            subscription_updated_at = $6,
            cancelled_at = $7
            WHERE user_uid = $1
            "#,
        )
        .bind(user.id.inner_ref())
        .bind(&user.email)
        .bind(&user.secret_api_key)
        .bind(user.subscription.status.as_str())
        .bind(user.subscription.subscribed_at)
        .bind(user.subscription.updated_at)
        .bind(user.subscription.cancelled_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("Unable to save user: {:?}. DB returned error: {:?}", user, e);
            e
        })?;

        Ok(())
    }

    async fn update_profile(&self, user_id: &ID, profile: &UserProfile) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET display_name = $2,
            business_name = $3,
            phone_number = $4
            WHERE user_uid = $1
            "#,
        )
        .bind(user_id.inner_ref())
        .bind(&profile.display_name)
        .bind(&profile.business_name)
        .bind(&profile.phone_number)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("Unable to update profile of user: {}. DB returned error: {:?}", user_id, e);
            e
        })?;

        Ok(())
    }

    async fn delete(&self, user_id: &ID) -> Option<User> {
        sqlx::query_as::<_, UserRaw>(
            r#"
            DELETE FROM users AS u
            WHERE u.user_uid = $1
            RETURNING *
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("Delete user with id: {} failed. DB returned error: {:?}", user_id, e);
            e
        })
        .ok()?
        .map(|user| user.into())
    }

    async fn find(&self, user_id: &ID) -> Option<User> {
        sqlx::query_as::<_, UserRaw>(
            r#"
            SELECT * FROM users AS u
            WHERE u.user_uid = $1
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("Find user with id: {} failed. DB returned error: {:?}", user_id, e);
            e
        })
        .ok()?
        .map(|user| user.into())
    }

    async fn find_by_apikey(&self, api_key: &str) -> Option<User> {
        sqlx::query_as::<_, UserRaw>(
            r#"
            SELECT * FROM users AS u
            WHERE u.secret_api_key = $1
            "#,
        )
        .bind(api_key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("Find user by api key failed. DB returned error: {:?}", e);
            e
        })
        .ok()?
        .map(|user| user.into())
    }

    async fn find_by_email(&self, email: &str) -> Option<User> {
        sqlx::query_as::<_, UserRaw>(
            r#"
            SELECT * FROM users AS u
            WHERE u.email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("Find user by email: {} failed. DB returned error: {:?}", email, e);
            e
        })
        .ok()?
        .map(|user| user.into())
    }
}
