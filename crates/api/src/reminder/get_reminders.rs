use crate::{error::FollowupError, shared::auth::protect_route};
use actix_web::{web, HttpRequest, HttpResponse};
use followup_api_structs::get_reminders::*;
use followup_infra::FollowupContext;

pub async fn get_reminders_controller(
    http_req: HttpRequest,
    query: web::Query<QueryParams>,
    ctx: web::Data<FollowupContext>,
) -> Result<HttpResponse, FollowupError> {
    let user = protect_route(&http_req, &ctx).await?;

    let reminders = ctx.repos.reminders.find_by_user(&user.id, query.status).await;
    Ok(HttpResponse::Ok().json(APIResponse::new(reminders)))
}
