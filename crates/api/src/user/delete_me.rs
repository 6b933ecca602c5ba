use crate::shared::usecase::{execute, UseCase};
use crate::{error::FollowupError, shared::auth::protect_route};
use actix_web::{web, HttpRequest, HttpResponse};
use followup_api_structs::delete_me::*;
use followup_domain::User;
use followup_infra::FollowupContext;
use tracing::info;

pub async fn delete_me_controller(
    http_req: HttpRequest,
    ctx: web::Data<FollowupContext>,
) -> Result<HttpResponse, FollowupError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = DeleteUserUseCase { user };
    execute(usecase, &ctx)
        .await
        .map(|user| HttpResponse::Ok().json(APIResponse::new(user)))
        .map_err(FollowupError::from)
}

/// Deletes the `User` together with everything it owns
#[derive(Debug)]
pub struct DeleteUserUseCase {
    pub user: User,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for FollowupError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteUserUseCase {
    type Response = User;
    type Error = UseCaseError;

    const NAME: &'static str = "DeleteUser";

    async fn execute(&mut self, ctx: &FollowupContext) -> Result<Self::Response, Self::Error> {
        let user_id = &self.user.id;
        let reminders = ctx
            .repos
            .reminders
            .delete_by_user(user_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        let contacts = ctx
            .repos
            .contacts
            .delete_by_user(user_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        let logs = ctx
            .repos
            .history_logs
            .delete_by_user(user_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        info!(
            "Deleting user {} with {} contacts, {} reminders and {} history logs",
            user_id, contacts.deleted_count, reminders.deleted_count, logs.deleted_count
        );

        match ctx.repos.users.delete(user_id).await {
            Some(user) => Ok(user),
            None => Err(UseCaseError::StorageError),
        }
    }
}
