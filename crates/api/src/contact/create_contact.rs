use crate::shared::usecase::{execute, UseCase};
use crate::{error::FollowupError, shared::auth::protect_route};
use actix_web::{web, HttpRequest, HttpResponse};
use followup_api_structs::create_contact::*;
use followup_domain::{Contact, ContactValidationError, ID};
use followup_infra::FollowupContext;

pub async fn create_contact_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<FollowupContext>,
) -> Result<HttpResponse, FollowupError> {
    let user = protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = CreateContactUseCase {
        user_id: user.id,
        name: body.name,
        email: body.email,
        phone: body.phone,
    };

    execute(usecase, &ctx)
        .await
        .map(|contact| HttpResponse::Created().json(APIResponse::new(contact)))
        .map_err(FollowupError::from)
}

#[derive(Debug)]
pub struct CreateContactUseCase {
    pub user_id: ID,
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidContact(ContactValidationError),
    StorageError,
}

impl From<UseCaseError> for FollowupError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidContact(e) => Self::BadClientData(e.to_string()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateContactUseCase {
    type Response = Contact;
    type Error = UseCaseError;

    const NAME: &'static str = "CreateContact";

    async fn execute(&mut self, ctx: &FollowupContext) -> Result<Self::Response, Self::Error> {
        let contact = Contact::new(
            self.user_id.clone(),
            self.name.clone(),
            self.email.clone(),
            self.phone.clone(),
            ctx.sys.now(),
        )
        .map_err(UseCaseError::InvalidContact)?;

        ctx.repos
            .contacts
            .insert(&contact)
            .await
            .map(|_| contact)
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use followup_domain::ContactStatus;

    fn usecase(name: &str, phone: &str) -> CreateContactUseCase {
        CreateContactUseCase {
            user_id: ID::default(),
            name: name.into(),
            email: "ada@example.com".into(),
            phone: phone.into(),
        }
    }

    #[actix_web::main]
    #[test]
    async fn creates_active_contact() {
        let ctx = FollowupContext::create_inmemory();
        let contact = usecase("Ada Lovelace", "+44 20 7946 0958")
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(contact.status, ContactStatus::Active);
        assert!(ctx.repos.contacts.find(&contact.id).await.is_some());
    }

    #[actix_web::main]
    #[test]
    async fn rejects_invalid_contact() {
        let ctx = FollowupContext::create_inmemory();
        let res = usecase("Ada Lovelace", "123").execute(&ctx).await;
        assert_eq!(
            res.unwrap_err(),
            UseCaseError::InvalidContact(ContactValidationError::InvalidPhone)
        );
    }
}
