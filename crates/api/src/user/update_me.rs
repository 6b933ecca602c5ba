use crate::shared::usecase::{execute, UseCase};
use crate::{error::FollowupError, shared::auth::protect_route};
use actix_web::{web, HttpRequest, HttpResponse};
use followup_api_structs::update_me::*;
use followup_domain::{ProfileValidationError, User, UserProfile, ID};
use followup_infra::FollowupContext;

pub async fn update_me_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<FollowupContext>,
) -> Result<HttpResponse, FollowupError> {
    let user = protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = UpdateMeUseCase {
        user_id: user.id,
        display_name: body.display_name,
        business_name: body.business_name,
        phone_number: body.phone_number,
    };

    execute(usecase, &ctx)
        .await
        .map(|user| HttpResponse::Ok().json(APIResponse::new(user)))
        .map_err(FollowupError::from)
}

/// Updates the profile of the `User`. Fields that are not given are kept.
#[derive(Debug)]
pub struct UpdateMeUseCase {
    pub user_id: ID,
    pub display_name: Option<String>,
    pub business_name: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound,
    InvalidProfile(ProfileValidationError),
    StorageError,
}

impl From<UseCaseError> for FollowupError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound => Self::NotFound("User not found".into()),
            UseCaseError::InvalidProfile(e) => Self::BadClientData(e.to_string()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateMeUseCase {
    type Response = User;
    type Error = UseCaseError;

    const NAME: &'static str = "UpdateMe";

    async fn execute(&mut self, ctx: &FollowupContext) -> Result<Self::Response, Self::Error> {
        let mut user = ctx
            .repos
            .users
            .find(&self.user_id)
            .await
            .ok_or(UseCaseError::NotFound)?;

        if let Some(name) = self.display_name.take() {
            let name = UserProfile::parse_display_name(name).map_err(UseCaseError::InvalidProfile)?;
            user.profile.display_name = Some(name);
        }
        if let Some(business_name) = self.business_name.take() {
            user.profile.business_name = UserProfile::parse_optional(business_name);
        }
        if let Some(phone_number) = self.phone_number.take() {
            user.profile.phone_number = UserProfile::parse_optional(phone_number);
        }

        ctx.repos
            .users
            .update_profile(&user.id, &user.profile)
            .await
            .map(|_| user)
            .map_err(|_| UseCaseError::StorageError)
    }
}
