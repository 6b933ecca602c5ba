use crate::shared::usecase::{execute, Subscriber, UseCase};
use crate::{error::FollowupError, shared::auth::protect_route};
use actix_web::{web, HttpRequest, HttpResponse};
use followup_api_structs::mark_reminder_paid::*;
use followup_domain::{HistoryChannel, HistoryLog, HistoryStatus, Reminder, ReminderStatus, ID};
use followup_infra::FollowupContext;
use tracing::error;

pub async fn mark_reminder_paid_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<FollowupContext>,
) -> Result<HttpResponse, FollowupError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = MarkReminderPaidUseCase {
        user_id: user.id,
        reminder_id: path.reminder_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(FollowupError::from)
}

#[derive(Debug)]
pub struct MarkReminderPaidUseCase {
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
                "Only pending reminders can be marked as paid, this reminder is {}.",
                status
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for MarkReminderPaidUseCase {
    type Response = Reminder;
    type Error = UseCaseError;

    const NAME: &'static str = "MarkReminderPaid";

    async fn execute(&mut self, ctx: &FollowupContext) -> Result<Self::Response, Self::Error> {
        let mut reminder = match ctx.repos.reminders.find(&self.reminder_id).await {
            Some(reminder) if reminder.user_id == self.user_id => reminder,
            _ => return Err(UseCaseError::NotFound(self.reminder_id.clone())),
        };
        let now = ctx.sys.now();
        reminder
            .transition(ReminderStatus::Paid, now)
            .map_err(|_| UseCaseError::NotPending(reminder.status))?;

        let updated = ctx
            .repos
            .reminders
            .update_status(&reminder.id, ReminderStatus::Pending, ReminderStatus::Paid, now)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        if !updated {
            // Dispatched after we read it
            let status = ctx
                .repos
                .reminders
                .find(&reminder.id)
                .await
                .map(|r| r.status)
                .unwrap_or(ReminderStatus::Sent);
            return Err(UseCaseError::NotPending(status));
        }

        Ok(reminder)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(LogPaidReminder)]
    }
}

/// Records the payment in the `HistoryLog` of the `User`
pub struct LogPaidReminder;

#[async_trait::async_trait(?Send)]
impl Subscriber<MarkReminderPaidUseCase> for LogPaidReminder {
    async fn notify(&self, reminder: &Reminder, ctx: &FollowupContext) {
        let contact_name = ctx
            .repos
            .contacts
            .find(&reminder.contact_id)
            .await
            .map(|c| c.name)
            .unwrap_or_else(|| "Unknown contact".into());
        let log = HistoryLog::new(
            reminder.user_id.clone(),
            reminder.id.clone(),
            contact_name,
            HistoryChannel::System,
            HistoryStatus::Paid,
            "Marked as paid".into(),
            reminder.updated_at,
        );
        if let Err(e) = ctx.repos.history_logs.insert(&log).await {
            error!("Unable to log paid reminder {}: {:?}", reminder.id, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use followup_domain::{Contact, ReminderChannel};

    async fn setup(ctx: &FollowupContext) -> Reminder {
        let contact = Contact::new(
            ID::default(),
            "Ada Lovelace".into(),
            "ada@example.com".into(),
            "0123456789".into(),
            Utc::now(),
        )
        .unwrap();
        ctx.repos.contacts.insert(&contact).await.unwrap();
        let reminder = Reminder::new(
            contact.user_id.clone(),
            contact.id.clone(),
            ReminderChannel::Email,
            "Invoice #42 is due on Friday".into(),
            Utc::now() + Duration::days(1),
            Utc::now(),
        )
        .unwrap();
        ctx.repos.reminders.insert(&reminder).await.unwrap();
        reminder
    }

    #[actix_web::main]
    #[test]
    async fn marks_pending_reminder_paid_and_logs_it() {
        let ctx = FollowupContext::create_inmemory();
        let reminder = setup(&ctx).await;

        let usecase = MarkReminderPaidUseCase {
            user_id: reminder.user_id.clone(),
            reminder_id: reminder.id.clone(),
        };
        let res = execute(usecase, &ctx).await.unwrap();
        assert_eq!(res.status, ReminderStatus::Paid);

        let stored = ctx.repos.reminders.find(&reminder.id).await.unwrap();
        assert_eq!(stored.status, ReminderStatus::Paid);

        let logs = ctx.repos.history_logs.find_by_user(&reminder.user_id).await;
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].channel, HistoryChannel::System);
        assert_eq!(logs[0].status, HistoryStatus::Paid);
        assert_eq!(logs[0].contact_name, "Ada Lovelace");
    }

    #[actix_web::main]
    #[test]
    async fn rejects_reminders_that_are_not_pending() {
        let ctx = FollowupContext::create_inmemory();
        let reminder = setup(&ctx).await;
        ctx.repos
            .reminders
            .update_status(&reminder.id, ReminderStatus::Pending, ReminderStatus::Failed, Utc::now())
            .await
            .unwrap();

        let usecase = MarkReminderPaidUseCase {
            user_id: reminder.user_id.clone(),
            reminder_id: reminder.id.clone(),
        };
        assert_eq!(
            execute(usecase, &ctx).await.unwrap_err(),
            UseCaseError::NotPending(ReminderStatus::Failed)
        );
        assert!(ctx.repos.history_logs.find_by_user(&reminder.user_id).await.is_empty());
    }
}
