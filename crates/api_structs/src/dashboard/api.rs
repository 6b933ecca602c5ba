use crate::dtos::{ReminderCountsDTO, ReminderDTO};
use serde::{Deserialize, Serialize};

pub mod get_dashboard {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub contacts: usize,
        pub reminders: ReminderCountsDTO,
        /// Next pending reminders, earliest first
        pub upcoming: Vec<ReminderDTO>,
    }
}
