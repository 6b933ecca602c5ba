use crate::dtos::HistoryLogDTO;
use followup_domain::HistoryLog;
use serde::{Deserialize, Serialize};

pub mod get_history {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub logs: Vec<HistoryLogDTO>,
    }

    impl APIResponse {
        pub fn new(logs: Vec<HistoryLog>) -> Self {
            Self {
                logs: logs.into_iter().map(HistoryLogDTO::new).collect(),
            }
        }
    }
}
