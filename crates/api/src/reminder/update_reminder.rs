use crate::shared::usecase::{execute, UseCase};
use crate::{error::FollowupError, shared::auth::protect_route};
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::{DateTime, Utc};
use followup_api_structs::update_reminder::*;
use followup_domain::{Reminder, ReminderChannel, ReminderError, ReminderStatus, ID};
use followup_infra::FollowupContext;

pub async fn update_reminder_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<FollowupContext>,
) -> Result<HttpResponse, FollowupError> {
    let user = protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = UpdateReminderUseCase {
        user_id: user.id,
        reminder_id: path.reminder_id.clone(),
        contact_id: body.contact_id,
        channel: body.channel,
        message: body.message,
        scheduled_at: body.scheduled_at,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(FollowupError::from)
}

/// Edits a `Reminder` that has not been dispatched yet
#[derive(Debug)]
pub struct UpdateReminderUseCase {
    pub user_id: ID,
    pub reminder_id: ID,
    pub contact_id: Option<ID>,
    pub channel: Option<ReminderChannel>,
    pub message: Option<String>,
    pub scheduled_at: Option<DateTime<Utc>>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    ContactNotFound(ID),
    NotPending(ReminderStatus),
    InvalidReminder(ReminderError),
    StorageError,
}

impl From<UseCaseError> for FollowupError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(reminder_id) => Self::NotFound(format!(
                "The reminder with id: {}, was not found.",
                reminder_id
            )),
            UseCaseError::ContactNotFound(contact_id) => Self::NotFound(format!(
                "The contact with id: {}, was not found.",
                contact_id
            )),
            UseCaseError::NotPending(status) => Self::Conflict(format!(
                "Only pending reminders can be edited, this reminder is {}.",
                status
            )),
            UseCaseError::InvalidReminder(e) => Self::BadClientData(e.to_string()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateReminderUseCase {
    type Response = Reminder;
    type Error = UseCaseError;

    const NAME: &'static str = "UpdateReminder";

    async fn execute(&mut self, ctx: &FollowupContext) -> Result<Self::Response, Self::Error> {
        let mut reminder = match ctx.repos.reminders.find(&self.reminder_id).await {
            Some(reminder) if reminder.user_id == self.user_id => reminder,
            _ => return Err(UseCaseError::NotFound(self.reminder_id.clone())),
        };
        if !reminder.is_pending() {
            return Err(UseCaseError::NotPending(reminder.status));
        }

        if let Some(contact_id) = self.contact_id.take() {
            match ctx.repos.contacts.find(&contact_id).await {
                Some(contact) if contact.is_owned_by(&self.user_id) => (),
                _ => return Err(UseCaseError::ContactNotFound(contact_id)),
            }
            reminder.contact_id = contact_id;
        }
        if let Some(channel) = self.channel {
            reminder.channel = channel;
        }
        if let Some(message) = self.message.take() {
            reminder.message =
                Reminder::parse_message(message).map_err(UseCaseError::InvalidReminder)?;
        }
        if let Some(scheduled_at) = self.scheduled_at {
            reminder.scheduled_at = scheduled_at;
        }
        reminder.updated_at = ctx.sys.now();

        match ctx.repos.reminders.save_pending(&reminder).await {
            Ok(true) => Ok(reminder),
            // Dispatched or paid since it was read
            Ok(false) => Err(not_pending(ctx, &self.reminder_id).await),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}

async fn not_pending(ctx: &FollowupContext, reminder_id: &ID) -> UseCaseError {
    match ctx.repos.reminders.find(reminder_id).await {
        Some(reminder) => UseCaseError::NotPending(reminder.status),
        None => UseCaseError::NotFound(reminder_id.clone()),
    }
}
