mod inmemory;
mod postgres;

use followup_domain::{User, UserProfile, ID};
pub use inmemory::InMemoryUserRepo;
pub use postgres::PostgresUserRepo;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InsertUserError {
    #[error("A user with email: {0} already exists")]
    EmailTaken(String),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

#[async_trait::async_trait]
pub trait IUserRepo: Send + Sync {
    async fn insert(&self, user: &User) -> Result<(), InsertUserError>;
    /// Writes the email, api key and subscription. The profile is left untouched.
    async fn save(&self, user: &User) -> anyhow::Result<()>;
    async fn update_profile(&self, user_id: &ID, profile: &UserProfile) -> anyhow::Result<()>;
    async fn delete(&self, user_id: &ID) -> Option<User>;
    async fn find(&self, user_id: &ID) -> Option<User>;
    async fn find_by_apikey(&self, api_key: &str) -> Option<User>;
    async fn find_by_email(&self, email: &str) -> Option<User>;
}
