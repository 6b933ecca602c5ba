use crate::{error::FollowupError, shared::auth::protect_route};
use actix_web::{web, HttpRequest, HttpResponse};
use followup_api_structs::get_history::*;
use followup_infra::FollowupContext;

pub async fn get_history_controller(
    http_req: HttpRequest,
    ctx: web::Data<FollowupContext>,
) -> Result<HttpResponse, FollowupError> {
    let user = protect_route(&http_req, &ctx).await?;

    let logs = ctx.repos.history_logs.find_by_user(&user.id).await;
    Ok(HttpResponse::Ok().json(APIResponse::new(logs)))
}
