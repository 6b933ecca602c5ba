use crate::dtos::ReminderDTO;
use chrono::{DateTime, Utc};
use followup_domain::{Reminder, ReminderChannel, ReminderStatus, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderResponse {
    pub reminder: ReminderDTO,
}

impl ReminderResponse {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            reminder: ReminderDTO::new(reminder),
        }
    }
}

pub mod create_reminder {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub contact_id: ID,
        pub channel: ReminderChannel,
        pub message: String,
        pub scheduled_at: DateTime<Utc>,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod get_reminders {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct QueryParams {
        #[serde(default)]
        pub status: Option<ReminderStatus>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub reminders: Vec<ReminderDTO>,
    }

    impl APIResponse {
        pub fn new(reminders: Vec<Reminder>) -> Self {
            Self {
                reminders: reminders.into_iter().map(ReminderDTO::new).collect(),
            }
        }
    }
}

pub mod get_reminder {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod update_reminder {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub contact_id: Option<ID>,
        #[serde(default)]
        pub channel: Option<ReminderChannel>,
        #[serde(default)]
        pub message: Option<String>,
        #[serde(default)]
        pub scheduled_at: Option<DateTime<Utc>>,
    }

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod delete_reminder {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod mark_reminder_paid {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    pub type APIResponse = ReminderResponse;
}
