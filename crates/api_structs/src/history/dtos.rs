use chrono::{DateTime, Utc};
use followup_domain::{HistoryChannel, HistoryLog, HistoryStatus, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HistoryLogDTO {
    pub id: ID,
    pub reminder_id: ID,
    pub contact_name: String,
    pub channel: HistoryChannel,
    pub sent_at: DateTime<Utc>,
    pub status: HistoryStatus,
    pub details: String,
}

impl HistoryLogDTO {
    pub fn new(log: HistoryLog) -> Self {
        Self {
            id: log.id,
            reminder_id: log.reminder_id,
            contact_name: log.contact_name,
            channel: log.channel,
            sent_at: log.sent_at,
            status: log.status,
            details: log.details,
        }
    }
}
