use crate::base::{APIResponse, BaseClient};
use chrono::{DateTime, Utc};
use followup_api_structs::*;
use followup_domain::{ReminderChannel, ReminderStatus, ID};
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

pub struct CreateReminderInput {
    pub contact_id: ID,
    pub channel: ReminderChannel,
    pub message: String,
    pub scheduled_at: DateTime<Utc>,
}

#[derive(Default)]
pub struct UpdateReminderInput {
    pub reminder_id: ID,
    pub contact_id: Option<ID>,
    pub channel: Option<ReminderChannel>,
    pub message: Option<String>,
    pub scheduled_at: Option<DateTime<Utc>>,
}

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        input: CreateReminderInput,
    ) -> APIResponse<create_reminder::APIResponse> {
        let body = create_reminder::RequestBody {
            contact_id: input.contact_id,
            channel: input.channel,
            message: input.message,
            scheduled_at: input.scheduled_at,
        };
        self.base
            .post(body, "reminders".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get(&self, reminder_id: &ID) -> APIResponse<get_reminder::APIResponse> {
        self.base
            .get(format!("reminders/{}", reminder_id), StatusCode::OK)
            .await
    }

    /// All reminders of the user, optionally only those with the given status
    pub async fn list(
        &self,
        status: Option<ReminderStatus>,
    ) -> APIResponse<get_reminders::APIResponse> {
        let path = match status {
            Some(status) => format!("reminders?status={}", status),
            None => "reminders".into(),
        };
        self.base.get(path, StatusCode::OK).await
    }

    pub async fn update(
        &self,
        input: UpdateReminderInput,
    ) -> APIResponse<update_reminder::APIResponse> {
        let body = update_reminder::RequestBody {
            contact_id: input.contact_id,
            channel: input.channel,
            message: input.message,
            scheduled_at: input.scheduled_at,
        };
        self.base
            .put(
                body,
                format!("reminders/{}", input.reminder_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn cancel(&self, reminder_id: &ID) -> APIResponse<delete_reminder::APIResponse> {
        self.base
            .delete(format!("reminders/{}", reminder_id), StatusCode::OK)
            .await
    }

    pub async fn mark_paid(
        &self,
        reminder_id: &ID,
    ) -> APIResponse<mark_reminder_paid::APIResponse> {
        self.base
            .post((), format!("reminders/{}/paid", reminder_id), StatusCode::OK)
            .await
    }
}
