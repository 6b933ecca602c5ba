use followup_domain::{Reminder, ReminderStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderCountsDTO {
    pub total: usize,
    pub pending: usize,
    pub sent: usize,
    pub failed: usize,
    pub paid: usize,
}

impl ReminderCountsDTO {
    pub fn new(reminders: &[Reminder]) -> Self {
        reminders.iter().fold(Self::default(), |mut counts, r| {
            counts.total += 1;
            match r.status {
                ReminderStatus::Pending => counts.pending += 1,
                ReminderStatus::Sent => counts.sent += 1,
                ReminderStatus::Failed => counts.failed += 1,
                ReminderStatus::Paid => counts.paid += 1,
            }
            counts
        })
    }
}
