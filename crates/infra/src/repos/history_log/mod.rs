mod inmemory;
mod postgres;

use crate::repos::shared::repo::DeleteResult;
use followup_domain::{HistoryLog, ID};
pub use inmemory::InMemoryHistoryLogRepo;
pub use postgres::PostgresHistoryLogRepo;

#[async_trait::async_trait]
pub trait IHistoryLogRepo: Send + Sync {
    async fn insert(&self, log: &HistoryLog) -> anyhow::Result<()>;
    /// Newest first
    async fn find_by_user(&self, user_id: &ID) -> Vec<HistoryLog>;
    async fn delete_by_user(&self, user_id: &ID) -> anyhow::Result<DeleteResult>;
}

#[cfg(test)]
mod tests {
    use crate::create_test_contexts;
    use chrono::{Duration, Utc};
    use followup_domain::{HistoryChannel, HistoryLog, HistoryStatus, User, ID};

    #[tokio::test]
    async fn insert_find_and_delete_by_user() {
        for ctx in create_test_contexts().await {
            let user = User::new(format!("{}@example.com", uuid::Uuid::new_v4()), Utc::now());
            ctx.repos.users.insert(&user).await.unwrap();

            let older = HistoryLog::new(
                user.id.clone(),
                ID::default(),
                "Ada".into(),
                HistoryChannel::Email,
                HistoryStatus::Delivered,
                "Queued email to ada@example.com".into(),
                Utc::now() - Duration::minutes(5),
            );
            let newer = HistoryLog::new(
                user.id.clone(),
                ID::default(),
                "Ada".into(),
                HistoryChannel::System,
                HistoryStatus::Paid,
                "Marked as paid".into(),
                Utc::now(),
            );
            ctx.repos.history_logs.insert(&older).await.unwrap();
            ctx.repos.history_logs.insert(&newer).await.unwrap();

            let logs = ctx.repos.history_logs.find_by_user(&user.id).await;
            assert_eq!(logs.len(), 2);
            assert_eq!(logs[0].id, newer.id);
            assert_eq!(logs[0].channel, HistoryChannel::System);
            assert_eq!(logs[1].status, HistoryStatus::Delivered);

            let res = ctx.repos.history_logs.delete_by_user(&user.id).await.unwrap();
            assert_eq!(res.deleted_count, 2);
            assert!(ctx.repos.history_logs.find_by_user(&user.id).await.is_empty());
        }
    }
}
