use super::IMailRepo;
use crate::repos::shared::inmemory_repo::*;
use followup_domain::{MailMessage, ID};

pub struct InMemoryMailRepo {
    mails: std::sync::Mutex<Vec<MailMessage>>,
}

impl InMemoryMailRepo {
    pub fn new() -> Self {
        Self {
            mails: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IMailRepo for InMemoryMailRepo {
    async fn insert(&self, mail: &MailMessage) -> anyhow::Result<()> {
        insert(mail, &self.mails);
        Ok(())
    }

    async fn find_by_reminder(&self, reminder_id: &ID) -> Vec<MailMessage> {
        find_by(&self.mails, |m| m.reminder_id == *reminder_id)
    }
}
