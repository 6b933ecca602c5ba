use crate::shared::usecase::{execute, UseCase};
use crate::{error::FollowupError, shared::auth::protect_route};
use actix_web::{web, HttpRequest, HttpResponse};
use followup_api_structs::update_contact::*;
use followup_domain::{Contact, ContactStatus, ContactValidationError, ID};
use followup_infra::FollowupContext;

pub async fn update_contact_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<FollowupContext>,
) -> Result<HttpResponse, FollowupError> {
    let user = protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = UpdateContactUseCase {
        user_id: user.id,
        contact_id: path.contact_id.clone(),
        name: body.name,
        email: body.email,
        phone: body.phone,
        status: body.status,
    };

    execute(usecase, &ctx)
        .await
        .map(|contact| HttpResponse::Ok().json(APIResponse::new(contact)))
        .map_err(FollowupError::from)
}

#[derive(Debug)]
pub struct UpdateContactUseCase {
    pub user_id: ID,
    pub contact_id: ID,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: Option<ContactStatus>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    InvalidContact(ContactValidationError),
    StorageError,
}

impl From<UseCaseError> for FollowupError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(contact_id) => Self::NotFound(format!(
                "The contact with id: {}, was not found.",
                contact_id
            )),
            UseCaseError::InvalidContact(e) => Self::BadClientData(e.to_string()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateContactUseCase {
    type Response = Contact;
    type Error = UseCaseError;

    const NAME: &'static str = "UpdateContact";

    async fn execute(&mut self, ctx: &FollowupContext) -> Result<Self::Response, Self::Error> {
        let mut contact = match ctx.repos.contacts.find(&self.contact_id).await {
            Some(contact) if contact.is_owned_by(&self.user_id) => contact,
            _ => return Err(UseCaseError::NotFound(self.contact_id.clone())),
        };

        if let Some(name) = self.name.take() {
            contact.name = Contact::parse_name(name).map_err(UseCaseError::InvalidContact)?;
        }
        if let Some(email) = self.email.take() {
            contact.email = Contact::parse_email(email).map_err(UseCaseError::InvalidContact)?;
        }
        if let Some(phone) = self.phone.take() {
            contact.phone = Contact::parse_phone(phone).map_err(UseCaseError::InvalidContact)?;
        }
        if let Some(status) = self.status {
            contact.status = status;
        }

        ctx.repos
            .contacts
            .save(&contact)
            .await
            .map(|_| contact)
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    async fn insert_contact(ctx: &FollowupContext) -> Contact {
        let contact = Contact::new(
            ID::default(),
            "Ada Lovelace".into(),
            "ada@example.com".into(),
            "0123456789".into(),
            Utc::now(),
        )
        .unwrap();
        ctx.repos.contacts.insert(&contact).await.unwrap();
        contact
    }

    fn usecase(contact: &Contact) -> UpdateContactUseCase {
        UpdateContactUseCase {
            user_id: contact.user_id.clone(),
            contact_id: contact.id.clone(),
            name: None,
            email: None,
            phone: None,
            status: None,
        }
    }

    #[actix_web::main]
    #[test]
    async fn updates_only_given_fields() {
        let ctx = FollowupContext::create_inmemory();
        let contact = insert_contact(&ctx).await;

        let mut usecase = usecase(&contact);
        usecase.status = Some(ContactStatus::Inactive);
        usecase.phone = Some("9876543210".into());
        let res = usecase.execute(&ctx).await.unwrap();
        assert_eq!(res.status, ContactStatus::Inactive);
        assert_eq!(res.phone, "9876543210");
        assert_eq!(res.name, contact.name);

        let stored = ctx.repos.contacts.find(&contact.id).await.unwrap();
        assert_eq!(stored, res);
    }

    #[actix_web::main]
    #[test]
    async fn rejects_invalid_fields_without_saving() {
        let ctx = FollowupContext::create_inmemory();
        let contact = insert_contact(&ctx).await;

        let mut usecase = usecase(&contact);
        usecase.name = Some("Grace".into());
        usecase.email = Some("not-an-email".into());
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::InvalidContact(ContactValidationError::InvalidEmail)
        );
        let stored = ctx.repos.contacts.find(&contact.id).await.unwrap();
        assert_eq!(stored.name, "Ada Lovelace");
    }

    #[actix_web::main]
    #[test]
    async fn other_users_get_not_found() {
        let ctx = FollowupContext::create_inmemory();
        let contact = insert_contact(&ctx).await;

        let mut usecase = usecase(&contact);
        usecase.user_id = ID::default();
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::NotFound(contact.id)
        );
    }
}
