use crate::error::FollowupError;
use actix_web::HttpRequest;
use followup_domain::User;
use followup_infra::FollowupContext;

pub const API_KEY_HEADER: &str = "x-api-key";
pub const CREATE_USER_SECRET_HEADER: &str = "x-create-user-secret";

fn get_header<'a>(req: &'a HttpRequest, header: &str) -> Result<&'a str, FollowupError> {
    match req.headers().get(header) {
        Some(value) => value.to_str().map_err(|_| {
            FollowupError::Unauthorized(format!("Malformed value provided in {} header", header))
        }),
        None => Err(FollowupError::Unauthorized(format!(
            "Unable to find the {} header",
            header
        ))),
    }
}

/// Finds the `User` owning the api key in the `x-api-key` header
pub async fn protect_route(req: &HttpRequest, ctx: &FollowupContext) -> Result<User, FollowupError> {
    let api_key = get_header(req, API_KEY_HEADER)?;

    match ctx.repos.users.find_by_apikey(api_key).await {
        Some(user) => Ok(user),
        None => Err(FollowupError::Unauthorized(
            "Invalid api-key provided in x-api-key header".into(),
        )),
    }
}

/// Only holders of the create user secret code are allowed to create `User`s
pub fn protect_create_user_route(
    req: &HttpRequest,
    ctx: &FollowupContext,
) -> Result<(), FollowupError> {
    let secret = get_header(req, CREATE_USER_SECRET_HEADER)?;
    if secret != ctx.config.create_user_secret_code {
        return Err(FollowupError::Unauthorized(
            "Invalid secret provided in x-create-user-secret header".into(),
        ));
    }
    Ok(())
}
