use chrono::{DateTime, Utc};
use followup_domain::{Reminder, ReminderChannel, ReminderStatus, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDTO {
    pub id: ID,
    pub user_id: ID,
    pub contact_id: ID,
    pub channel: ReminderChannel,
    pub message: String,
    pub scheduled_at: DateTime<Utc>,
    pub status: ReminderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            id: reminder.id,
            user_id: reminder.user_id,
            contact_id: reminder.contact_id,
            channel: reminder.channel,
            message: reminder.message,
            scheduled_at: reminder.scheduled_at,
            status: reminder.status,
            created_at: reminder.created_at,
            updated_at: reminder.updated_at,
        }
    }
}
