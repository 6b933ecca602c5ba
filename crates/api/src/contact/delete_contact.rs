use crate::shared::usecase::{execute, UseCase};
use crate::{error::FollowupError, shared::auth::protect_route};
use actix_web::{web, HttpRequest, HttpResponse};
use followup_api_structs::delete_contact::*;
use followup_domain::{Contact, ID};
use followup_infra::FollowupContext;
use tracing::info;

pub async fn delete_contact_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<FollowupContext>,
) -> Result<HttpResponse, FollowupError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = DeleteContactUseCase {
        user_id: user.id,
        contact_id: path.contact_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|contact| HttpResponse::Ok().json(APIResponse::new(contact)))
        .map_err(FollowupError::from)
}

/// Deletes the `Contact` and every `Reminder` targeting it
#[derive(Debug)]
pub struct DeleteContactUseCase {
    pub user_id: ID,
    pub contact_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for FollowupError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(contact_id) => Self::NotFound(format!(
                "The contact with id: {}, was not found.",
                contact_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteContactUseCase {
    type Response = Contact;
    type Error = UseCaseError;

    const NAME: &'static str = "DeleteContact";

    async fn execute(&mut self, ctx: &FollowupContext) -> Result<Self::Response, Self::Error> {
        let contact = match ctx.repos.contacts.find(&self.contact_id).await {
            Some(contact) if contact.is_owned_by(&self.user_id) => contact,
            _ => return Err(UseCaseError::NotFound(self.contact_id.clone())),
        };

        let res = ctx
            .repos
            .reminders
            .delete_by_contact(&contact.id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        info!(
            "Deleted {} reminders of contact {}",
            res.deleted_count, contact.id
        );

        ctx.repos
            .contacts
            .delete(&contact.id)
            .await
            .ok_or(UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use followup_domain::{Reminder, ReminderChannel};

    #[actix_web::main]
    #[test]
    async fn deletes_contact_and_its_reminders() {
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
        let reminder = Reminder::new(
            contact.user_id.clone(),
            contact.id.clone(),
            ReminderChannel::Email,
            "About the quote we sent last week".into(),
            Utc::now() + Duration::hours(3),
            Utc::now(),
        )
        .unwrap();
        ctx.repos.reminders.insert(&reminder).await.unwrap();

        let mut usecase = DeleteContactUseCase {
            user_id: ID::default(),
            contact_id: contact.id.clone(),
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::NotFound(contact.id.clone())
        );

        let mut usecase = DeleteContactUseCase {
            user_id: contact.user_id.clone(),
            contact_id: contact.id.clone(),
        };
        assert!(usecase.execute(&ctx).await.is_ok());
        assert!(ctx.repos.contacts.find(&contact.id).await.is_none());
        assert!(ctx.repos.reminders.find(&reminder.id).await.is_none());
    }
}
