use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

const MESSAGE_MIN_LEN: usize = 10;

/// A `Reminder` is a scheduled follow-up notification to a `Contact`.
/// It is picked up by the dispatcher once `scheduled_at` has elapsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: ID,
    /// Owner of the `Reminder` and of the `Contact` it targets
    pub user_id: ID,
    pub contact_id: ID,
    pub channel: ReminderChannel,
    pub message: String,
    pub scheduled_at: DateTime<Utc>,
    pub status: ReminderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Error, Debug, PartialEq)]
pub enum ReminderError {
    #[error("Message must be at least 10 characters.")]
    MessageTooShort,
    #[error("Reminder status cannot change from {from} to {to}")]
    InvalidTransition {
        from: ReminderStatus,
        to: ReminderStatus,
    },
}

impl Reminder {
    pub fn new(
        user_id: ID,
        contact_id: ID,
        channel: ReminderChannel,
        message: String,
        scheduled_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<Self, ReminderError> {
        Ok(Self {
            id: Default::default(),
            user_id,
            contact_id,
            channel,
            message: Self::parse_message(message)?,
            scheduled_at,
            status: ReminderStatus::Pending,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn parse_message(message: String) -> Result<String, ReminderError> {
        if message.trim().chars().count() < MESSAGE_MIN_LEN {
            return Err(ReminderError::MessageTooShort);
        }
        Ok(message)
    }

    /// Pending and `scheduled_at` has elapsed
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.status == ReminderStatus::Pending && self.scheduled_at <= now
    }

    pub fn is_pending(&self) -> bool {
        self.status == ReminderStatus::Pending
    }

    pub fn transition(
        &mut self,
        status: ReminderStatus,
        now: DateTime<Utc>,
    ) -> Result<(), ReminderError> {
        if !self.status.can_transition_to(status) {
            return Err(ReminderError::InvalidTransition {
                from: self.status,
                to: status,
            });
        }
        self.status = status;
        self.updated_at = now;
        Ok(())
    }
}

impl Entity<ID> for Reminder {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReminderChannel {
    Email,
    #[serde(rename = "SMS")]
    Sms,
    WhatsApp,
}

impl ReminderChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Sms => "SMS",
            Self::WhatsApp => "WhatsApp",
        }
    }
}

impl std::fmt::Display for ReminderChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReminderChannel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Email" => Ok(Self::Email),
            "SMS" => Ok(Self::Sms),
            "WhatsApp" => Ok(Self::WhatsApp),
            other => Err(format!("{} is not a valid reminder channel", other)),
        }
    }
}

/// Lifecycle of a `Reminder`. `Pending` is the only non terminal status
/// and a `Reminder` never goes back to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderStatus {
    Pending,
    Sent,
    Failed,
    Paid,
}

impl ReminderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Sent => "sent",
            Self::Failed => "failed",
            Self::Paid => "paid",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    pub fn can_transition_to(&self, next: ReminderStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Sent) | (Self::Pending, Self::Failed) | (Self::Pending, Self::Paid)
        )
    }
}

impl std::fmt::Display for ReminderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReminderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "sent" => Ok(Self::Sent),
            "failed" => Ok(Self::Failed),
            "paid" => Ok(Self::Paid),
            other => Err(format!("{} is not a valid reminder status", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn reminder(scheduled_at: DateTime<Utc>) -> Reminder {
        Reminder::new(
            ID::default(),
            ID::default(),
            ReminderChannel::Email,
            "Just checking in about the proposal".into(),
            scheduled_at,
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn it_rejects_short_messages() {
        let res = Reminder::new(
            ID::default(),
            ID::default(),
            ReminderChannel::Sms,
            "  hi there ".into(),
            Utc::now(),
            Utc::now(),
        );
        assert_eq!(res, Err(ReminderError::MessageTooShort));
    }

    #[test]
    fn is_due_only_when_pending_and_elapsed() {
        let now = Utc::now();
        let mut r = reminder(now - Duration::minutes(1));
        assert!(r.is_due(now));
        assert!(!reminder(now + Duration::minutes(1)).is_due(now));
        assert!(reminder(now).is_due(now));

        r.transition(ReminderStatus::Sent, now).unwrap();
        assert!(!r.is_due(now));
    }

    #[test]
    fn status_transitions_are_monotonic() {
        use ReminderStatus::*;
        let all = [Pending, Sent, Failed, Paid];
        for from in all {
            for to in all {
                let allowed = from == Pending && to != Pending;
                assert_eq!(from.can_transition_to(to), allowed, "{} -> {}", from, to);
            }
        }
    }

    #[test]
    fn transition_updates_timestamp_or_errors() {
        let created = Utc::now() - Duration::hours(1);
        let mut r = reminder(created);
        let now = Utc::now();
        r.transition(ReminderStatus::Paid, now).unwrap();
        assert_eq!(r.status, ReminderStatus::Paid);
        assert_eq!(r.updated_at, now);

        assert_eq!(
            r.transition(ReminderStatus::Sent, now),
            Err(ReminderError::InvalidTransition {
                from: ReminderStatus::Paid,
                to: ReminderStatus::Sent
            })
        );
    }

    #[test]
    fn channel_wire_names() {
        assert_eq!(serde_json::to_string(&ReminderChannel::Sms).unwrap(), "\"SMS\"");
        assert_eq!(
            serde_json::from_str::<ReminderChannel>("\"WhatsApp\"").unwrap(),
            ReminderChannel::WhatsApp
        );
        assert_eq!("SMS".parse::<ReminderChannel>(), Ok(ReminderChannel::Sms));
    }
}
