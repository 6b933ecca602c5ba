use super::IReminderRepo;
use crate::repos::shared::{inmemory_repo::*, repo::DeleteResult};
use chrono::{DateTime, Utc};
use followup_domain::{Reminder, ReminderStatus, ID};

pub struct InMemoryReminderRepo {
    reminders: std::sync::Mutex<Vec<Reminder>>,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: std::sync::Mutex::new(vec![]),
        }
    }
}

fn sort_by_schedule(mut reminders: Vec<Reminder>) -> Vec<Reminder> {
    reminders.sort_by(|r1, r2| r1.scheduled_at.cmp(&r2.scheduled_at));
    reminders
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        insert(reminder, &self.reminders);
        Ok(())
    }

    async fn save_pending(&self, reminder: &Reminder) -> anyhow::Result<bool> {
        Ok(update_one(&reminder.id, &self.reminders, |stored| {
            if !stored.is_pending() {
                return false;
            }
            stored.contact_id = reminder.contact_id.clone();
            stored.channel = reminder.channel;
            stored.message = reminder.message.clone();
            stored.scheduled_at = reminder.scheduled_at;
            stored.updated_at = reminder.updated_at;
            true
        }))
    }

    async fn delete_pending(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        Ok(
            find_and_delete_by(&self.reminders, |r| r.id == *reminder_id && r.is_pending())
                .pop(),
        )
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        find(reminder_id, &self.reminders)
    }

    async fn find_by_user(&self, user_id: &ID, status: Option<ReminderStatus>) -> Vec<Reminder> {
        sort_by_schedule(find_by(&self.reminders, |r| {
            r.user_id == *user_id && status.map(|s| s == r.status).unwrap_or(true)
        }))
    }

    async fn find_due(&self, before: DateTime<Utc>) -> anyhow::Result<Vec<Reminder>> {
        Ok(sort_by_schedule(find_by(&self.reminders, |r| {
            r.is_due(before)
        })))
    }

    async fn update_status(
        &self,
        reminder_id: &ID,
        from: ReminderStatus,
        to: ReminderStatus,
        now: DateTime<Utc>,
    ) -> anyhow::Result<bool> {
        Ok(update_one(reminder_id, &self.reminders, |r| {
            if r.status != from {
                return false;
            }
            r.status = to;
            r.updated_at = now;
            true
        }))
    }

    async fn delete_by_contact(&self, contact_id: &ID) -> anyhow::Result<DeleteResult> {
        Ok(delete_by(&self.reminders, |r| r.contact_id == *contact_id))
    }

    async fn delete_by_user(&self, user_id: &ID) -> anyhow::Result<DeleteResult> {
        Ok(delete_by(&self.reminders, |r| r.user_id == *user_id))
    }
}
