use crate::shared::usecase::{execute, UseCase};
use crate::{error::FollowupError, shared::auth::protect_create_user_route};
use actix_web::{web, HttpRequest, HttpResponse};
use followup_api_structs::create_user::*;
use followup_domain::User;
use followup_infra::{FollowupContext, InsertUserError};

pub async fn create_user_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<FollowupContext>,
) -> Result<HttpResponse, FollowupError> {
    protect_create_user_route(&http_req, &ctx)?;

    let usecase = CreateUserUseCase {
        email: body.0.email,
    };

    execute(usecase, &ctx)
        .await
        .map(|usecase_res| HttpResponse::Created().json(APIResponse::new(usecase_res.user)))
        .map_err(FollowupError::from)
}

#[derive(Debug)]
pub struct CreateUserUseCase {
    pub email: String,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub user: User,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    StorageError,
    InvalidEmail,
    UserAlreadyExists,
}

impl From<UseCaseError> for FollowupError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
            UseCaseError::InvalidEmail => Self::BadClientData("Please enter a valid email.".into()),
            UseCaseError::UserAlreadyExists => {
                Self::Conflict("A user with that email already exists.".into())
            }
        }
    }
}

impl From<InsertUserError> for UseCaseError {
    fn from(e: InsertUserError) -> Self {
        match e {
            InsertUserError::EmailTaken(_) => Self::UserAlreadyExists,
            InsertUserError::Storage(_) => Self::StorageError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateUserUseCase {
    type Response = UseCaseRes;
    type Error = UseCaseError;

    const NAME: &'static str = "CreateUser";

    async fn execute(&mut self, ctx: &FollowupContext) -> Result<Self::Response, Self::Error> {
        let email = User::parse_email(&self.email).ok_or(UseCaseError::InvalidEmail)?;

        if ctx.repos.users.find_by_email(&email).await.is_some() {
            return Err(UseCaseError::UserAlreadyExists);
        }

        let user = User::new(email, ctx.sys.now());
        // The email can still be taken by a concurrent request after the lookup above
        ctx.repos
            .users
            .insert(&user)
            .await
            .map(|_| UseCaseRes { user })
            .map_err(UseCaseError::from)
    }
}
