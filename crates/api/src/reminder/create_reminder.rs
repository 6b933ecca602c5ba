use crate::shared::usecase::{execute, UseCase};
use crate::{error::FollowupError, shared::auth::protect_route};
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::{DateTime, Utc};
use followup_api_structs::create_reminder::*;
use followup_domain::{Reminder, ReminderChannel, ReminderError, ID};
use followup_infra::FollowupContext;

pub async fn create_reminder_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<FollowupContext>,
) -> Result<HttpResponse, FollowupError> {
    let user = protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = CreateReminderUseCase {
        user_id: user.id,
        contact_id: body.contact_id,
        channel: body.channel,
        message: body.message,
        scheduled_at: body.scheduled_at,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Created().json(APIResponse::new(reminder)))
        .map_err(FollowupError::from)
}

#[derive(Debug)]
pub struct CreateReminderUseCase {
    pub user_id: ID,
    pub contact_id: ID,
    pub channel: ReminderChannel,
    pub message: String,
    pub scheduled_at: DateTime<Utc>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    ContactNotFound(ID),
    InvalidReminder(ReminderError),
    StorageError,
}

impl From<UseCaseError> for FollowupError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::ContactNotFound(contact_id) => Self::NotFound(format!(
                "The contact with id: {}, was not found.",
                contact_id
            )),
            UseCaseError::InvalidReminder(e) => Self::BadClientData(e.to_string()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateReminderUseCase {
    type Response = Reminder;
    type Error = UseCaseError;

    const NAME: &'static str = "CreateReminder";

    async fn execute(&mut self, ctx: &FollowupContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.contacts.find(&self.contact_id).await {
            Some(contact) if contact.is_owned_by(&self.user_id) => (),
            _ => return Err(UseCaseError::ContactNotFound(self.contact_id.clone())),
        };

        let reminder = Reminder::new(
            self.user_id.clone(),
            self.contact_id.clone(),
            self.channel,
            self.message.clone(),
            self.scheduled_at,
            ctx.sys.now(),
        )
        .map_err(UseCaseError::InvalidReminder)?;

        ctx.repos
            .reminders
            .insert(&reminder)
            .await
            .map(|_| reminder)
            .map_err(|_| UseCaseError::StorageError)
    }
}
