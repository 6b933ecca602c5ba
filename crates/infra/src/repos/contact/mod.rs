mod inmemory;
mod postgres;

use crate::repos::shared::repo::DeleteResult;
use chrono::{DateTime, Utc};
use followup_domain::{Contact, ID};
pub use inmemory::InMemoryContactRepo;
pub use postgres::PostgresContactRepo;

#[async_trait::async_trait]
pub trait IContactRepo: Send + Sync {
    async fn insert(&self, contact: &Contact) -> anyhow::Result<()>;
    /// Writes the fields editable by the user. `last_contacted` is left untouched.
    async fn save(&self, contact: &Contact) -> anyhow::Result<()>;
    /// Written by the reminder dispatcher only
    async fn update_last_contacted(
        &self,
        contact_id: &ID,
        last_contacted: DateTime<Utc>,
    ) -> anyhow::Result<()>;
    async fn delete(&self, contact_id: &ID) -> Option<Contact>;
    async fn find(&self, contact_id: &ID) -> Option<Contact>;
    async fn find_many(&self, contact_ids: &[ID]) -> anyhow::Result<Vec<Contact>>;
    /// Newest first
    async fn find_by_user(&self, user_id: &ID) -> Vec<Contact>;
    async fn delete_by_user(&self, user_id: &ID) -> anyhow::Result<DeleteResult>;
}
