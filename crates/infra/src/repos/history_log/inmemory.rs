use super::IHistoryLogRepo;
use crate::repos::shared::{inmemory_repo::*, repo::DeleteResult};
use followup_domain::{HistoryLog, ID};

pub struct InMemoryHistoryLogRepo {
    logs: std::sync::Mutex<Vec<HistoryLog>>,
}

impl InMemoryHistoryLogRepo {
    pub fn new() -> Self {
        Self {
            logs: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IHistoryLogRepo for InMemoryHistoryLogRepo {
    async fn insert(&self, log: &HistoryLog) -> anyhow::Result<()> {
        insert(log, &self.logs);
        Ok(())
    }

    async fn find_by_user(&self, user_id: &ID) -> Vec<HistoryLog> {
        let mut logs = find_by(&self.logs, |l| l.user_id == *user_id);
        logs.sort_by(|l1, l2| l2.sent_at.cmp(&l1.sent_at));
        logs
    }

    async fn delete_by_user(&self, user_id: &ID) -> anyhow::Result<DeleteResult> {
        Ok(delete_by(&self.logs, |l| l.user_id == *user_id))
    }
}
