use crate::shared::usecase::{execute, UseCase};
use crate::{error::FollowupError, shared::auth::protect_route};
use actix_web::{web, HttpRequest, HttpResponse};
use followup_api_structs::dtos::{ReminderCountsDTO, ReminderDTO};
use followup_api_structs::get_dashboard::*;
use followup_domain::{ReminderStatus, ID};
use followup_infra::FollowupContext;

const UPCOMING_REMINDERS_LIMIT: usize = 5;

pub async fn get_dashboard_controller(
    http_req: HttpRequest,
    ctx: web::Data<FollowupContext>,
) -> Result<HttpResponse, FollowupError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = GetDashboardUseCase { user_id: user.id };
    execute(usecase, &ctx)
        .await
        .map(|dashboard| HttpResponse::Ok().json(dashboard))
        .map_err(FollowupError::from)
}

#[derive(Debug)]
pub struct GetDashboardUseCase {
    pub user_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for FollowupError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetDashboardUseCase {
    type Response = APIResponse;
    type Error = UseCaseError;

    const NAME: &'static str = "GetDashboard";

    async fn execute(&mut self, ctx: &FollowupContext) -> Result<Self::Response, Self::Error> {
        let contacts = ctx.repos.contacts.find_by_user(&self.user_id).await;
        let reminders = ctx.repos.reminders.find_by_user(&self.user_id, None).await;
        let now = ctx.sys.now();

        let counts = ReminderCountsDTO::new(&reminders);
        // Sorted by `scheduled_at` already
        let upcoming = reminders
            .into_iter()
            .filter(|r| r.status == ReminderStatus::Pending && r.scheduled_at > now)
            .take(UPCOMING_REMINDERS_LIMIT)
            .map(ReminderDTO::new)
            .collect();

        Ok(APIResponse {
            contacts: contacts.len(),
            reminders: counts,
            upcoming,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use followup_domain::{Contact, Reminder, ReminderChannel};

    #[actix_web::main]
    #[test]
    async fn counts_and_upcoming_reminders() {
        let ctx = FollowupContext::create_inmemory();
        let contact = Contact::new(
            ID::default(),
            "Ada Lovelace".into(),
            "ada@example.com".into(),
            "0123456789".into(),
            Utc::now(),
        )
        .unwrap();
        ctx.repos.contacts.insert(&contact).await.unwrap();
        for hours in (1..=7).rev() {
            let reminder = Reminder::new(
                contact.user_id.clone(),
                contact.id.clone(),
                ReminderChannel::Email,
                format!("Follow up number {}", hours),
                Utc::now() + Duration::hours(hours),
                Utc::now(),
            )
            .unwrap();
            ctx.repos.reminders.insert(&reminder).await.unwrap();
        }
        let mut sent = Reminder::new(
            contact.user_id.clone(),
            contact.id.clone(),
            ReminderChannel::Sms,
            "Already went out yesterday".into(),
            Utc::now() - Duration::days(1),
            Utc::now(),
        )
        .unwrap();
        sent.transition(ReminderStatus::Sent, Utc::now()).unwrap();
        ctx.repos.reminders.insert(&sent).await.unwrap();

        let mut usecase = GetDashboardUseCase {
            user_id: contact.user_id.clone(),
        };
        let res = usecase.execute(&ctx).await.unwrap();
        assert_eq!(res.contacts, 1);
        assert_eq!(
            res.reminders,
            ReminderCountsDTO {
                total: 8,
                pending: 7,
                sent: 1,
                failed: 0,
                paid: 0
            }
        );
        assert_eq!(res.upcoming.len(), UPCOMING_REMINDERS_LIMIT);
        assert_eq!(res.upcoming[0].message, "Follow up number 1");
        assert!(res
            .upcoming
            .windows(2)
            .all(|w| w[0].scheduled_at <= w[1].scheduled_at));
    }
}
