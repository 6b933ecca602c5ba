use crate::{error::FollowupError, shared::auth::protect_route};
use actix_web::{web, HttpRequest, HttpResponse};
use followup_api_structs::get_contacts::*;
use followup_infra::FollowupContext;

pub async fn get_contacts_controller(
    http_req: HttpRequest,
    ctx: web::Data<FollowupContext>,
) -> Result<HttpResponse, FollowupError> {
    let user = protect_route(&http_req, &ctx).await?;

    let contacts = ctx.repos.contacts.find_by_user(&user.id).await;
    Ok(HttpResponse::Ok().json(APIResponse::new(contacts)))
}
