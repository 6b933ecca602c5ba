use crate::{
    reminder::ReminderChannel,
    shared::entity::{Entity, ID},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Append only record of what happened to a `Reminder`
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryLog {
    pub id: ID,
    pub user_id: ID,
    pub reminder_id: ID,
    /// Copied so that the log survives the `Contact` being deleted
    pub contact_name: String,
    pub channel: HistoryChannel,
    pub sent_at: DateTime<Utc>,
    pub status: HistoryStatus,
    pub details: String,
}

impl HistoryLog {
    pub fn new(
        user_id: ID,
        reminder_id: ID,
        contact_name: String,
        channel: HistoryChannel,
        status: HistoryStatus,
        details: String,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Default::default(),
            user_id,
            reminder_id,
            contact_name,
            channel,
            sent_at: now,
            status,
            details,
        }
    }
}

impl Entity<ID> for HistoryLog {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryChannel {
    Email,
    #[serde(rename = "SMS")]
    Sms,
    WhatsApp,
    /// Status changes made by the user rather than a delivery
    System,
}

impl HistoryChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Sms => "SMS",
            Self::WhatsApp => "WhatsApp",
            Self::System => "System",
        }
    }
}

impl From<ReminderChannel> for HistoryChannel {
    fn from(channel: ReminderChannel) -> Self {
        match channel {
            ReminderChannel::Email => Self::Email,
            ReminderChannel::Sms => Self::Sms,
            ReminderChannel::WhatsApp => Self::WhatsApp,
        }
    }
}

impl FromStr for HistoryChannel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "System" => Ok(Self::System),
            other => other.parse::<ReminderChannel>().map(Self::from),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryStatus {
    Delivered,
    Seen,
    Replied,
    Ignored,
    Failed,
    Paid,
}

impl HistoryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Delivered => "delivered",
            Self::Seen => "seen",
            Self::Replied => "replied",
            Self::Ignored => "ignored",
            Self::Failed => "failed",
            Self::Paid => "paid",
        }
    }
}

impl FromStr for HistoryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "delivered" => Ok(Self::Delivered),
            "seen" => Ok(Self::Seen),
            "replied" => Ok(Self::Replied),
            "ignored" => Ok(Self::Ignored),
            "failed" => Ok(Self::Failed),
            "paid" => Ok(Self::Paid),
            other => Err(format!("{} is not a valid history status", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_channel_parses_reminder_channels_and_system() {
        assert_eq!("System".parse::<HistoryChannel>(), Ok(HistoryChannel::System));
        assert_eq!("SMS".parse::<HistoryChannel>(), Ok(HistoryChannel::Sms));
        assert!("Fax".parse::<HistoryChannel>().is_err());
    }
}
