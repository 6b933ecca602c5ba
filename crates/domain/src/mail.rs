use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Utc};

/// Outbound email document. The dispatcher only enqueues these, delivery is
/// left to the mailer that consumes the queue.
#[derive(Debug, Clone, PartialEq)]
pub struct MailMessage {
    pub id: ID,
    pub reminder_id: ID,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    pub created_at: DateTime<Utc>,
}

impl MailMessage {
    pub fn reminder_email(
        reminder_id: ID,
        to: String,
        contact_name: &str,
        html: String,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Default::default(),
            reminder_id,
            to: vec![to],
            subject: format!("Reminder for {}", contact_name),
            html,
            created_at: now,
        }
    }
}

impl Entity<ID> for MailMessage {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
