mod inmemory;
mod postgres;

use crate::repos::shared::repo::DeleteResult;
use chrono::{DateTime, Utc};
use followup_domain::{Reminder, ReminderStatus, ID};
pub use inmemory::InMemoryReminderRepo;
pub use postgres::PostgresReminderRepo;

#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()>;
    /// Writes the editable fields, but only while the stored `Reminder` is still
    /// pending. The status itself is never written here.
    /// Returns whether the `Reminder` was updated.
    async fn save_pending(&self, reminder: &Reminder) -> anyhow::Result<bool>;
    /// Deletes the `Reminder` only while it is pending
    async fn delete_pending(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>>;
    async fn find(&self, reminder_id: &ID) -> Option<Reminder>;
    /// Ordered by `scheduled_at`, earliest first
    async fn find_by_user(&self, user_id: &ID, status: Option<ReminderStatus>) -> Vec<Reminder>;
    /// Pending `Reminder`s scheduled at or before `before`, earliest first
    async fn find_due(&self, before: DateTime<Utc>) -> anyhow::Result<Vec<Reminder>>;
    /// Sets the status to `to` only if it currently is `from`.
    /// Returns whether the `Reminder` was updated.
    async fn update_status(
        &self,
        reminder_id: &ID,
        from: ReminderStatus,
        to: ReminderStatus,
        now: DateTime<Utc>,
    ) -> anyhow::Result<bool>;
    async fn delete_by_contact(&self, contact_id: &ID) -> anyhow::Result<DeleteResult>;
    async fn delete_by_user(&self, user_id: &ID) -> anyhow::Result<DeleteResult>;
}
