use crate::shared::usecase::{execute, UseCase};
use crate::{error::FollowupError, shared::auth::protect_route};
use actix_web::{web, HttpRequest, HttpResponse};
use followup_api_structs::get_contact::*;
use followup_domain::{Contact, ID};
use followup_infra::FollowupContext;

pub async fn get_contact_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<FollowupContext>,
) -> Result<HttpResponse, FollowupError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = GetContactUseCase {
        user_id: user.id,
        contact_id: path.contact_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|contact| HttpResponse::Ok().json(APIResponse::new(contact)))
        .map_err(FollowupError::from)
}

#[derive(Debug)]
pub struct GetContactUseCase {
    pub user_id: ID,
    pub contact_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for FollowupError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(contact_id) => Self::NotFound(format!(
                "The contact with id: {}, was not found.",
                contact_id
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetContactUseCase {
    type Response = Contact;
    type Error = UseCaseError;

    const NAME: &'static str = "GetContact";

    async fn execute(&mut self, ctx: &FollowupContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.contacts.find(&self.contact_id).await {
            Some(contact) if contact.is_owned_by(&self.user_id) => Ok(contact),
            _ => Err(UseCaseError::NotFound(self.contact_id.clone())),
        }
    }
}
