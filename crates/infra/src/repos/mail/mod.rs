mod inmemory;
mod postgres;

use followup_domain::{MailMessage, ID};
pub use inmemory::InMemoryMailRepo;
pub use postgres::PostgresMailRepo;

/// Outbound mail queue
#[async_trait::async_trait]
pub trait IMailRepo: Send + Sync {
    async fn insert(&self, mail: &MailMessage) -> anyhow::Result<()>;
    async fn find_by_reminder(&self, reminder_id: &ID) -> Vec<MailMessage>;
}
