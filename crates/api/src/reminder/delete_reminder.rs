use crate::shared::usecase::{execute, UseCase};
use crate::{error::FollowupError, shared::auth::protect_route};
use actix_web::{web, HttpRequest, HttpResponse};
use followup_api_structs::delete_reminder::*;
use followup_domain::{Reminder, ReminderStatus, ID};
use followup_infra::FollowupContext;

pub async fn delete_reminder_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<FollowupContext>,
) -> Result<HttpResponse, FollowupError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = DeleteReminderUseCase {
        user_id: user.id,
        reminder_id: path.reminder_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(FollowupError::from)
}

/// Cancels a `Reminder` before it is dispatched
#[derive(Debug)]
pub struct DeleteReminderUseCase {
    pub user_id: ID,
    pub reminder_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    NotPending(ReminderStatus),
    StorageError,
}

impl From<UseCaseError> for FollowupError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(reminder_id) => Self::NotFound(format!(
                "The reminder with id: {}, was not found.",
                reminder_id
            )),
            UseCaseError::NotPending(status) => Self::Conflict(format!(
                "Only pending reminders can be cancelled, this reminder is {}.",
                status
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteReminderUseCase {
    type Response = Reminder;
    type Error = UseCaseError;

    const NAME: &'static str = "DeleteReminder";

    async fn execute(&mut self, ctx: &FollowupContext) -> Result<Self::Response, Self::Error> {
        let reminder = match ctx.repos.reminders.find(&self.reminder_id).await {
            Some(reminder) if reminder.user_id == self.user_id => reminder,
            _ => return Err(UseCaseError::NotFound(self.reminder_id.clone())),
        };
        if !reminder.is_pending() {
            return Err(UseCaseError::NotPending(reminder.status));
        }

        match ctx.repos.reminders.delete_pending(&reminder.id).await {
            Ok(Some(reminder)) => Ok(reminder),
            // Dispatched or paid since it was read
            Ok(None) => match ctx.repos.reminders.find(&reminder.id).await {
                Some(reminder) => Err(UseCaseError::NotPending(reminder.status)),
                None => Err(UseCaseError::NotFound(reminder.id)),
            },
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}
