use crate::base::{APIResponse, BaseClient};
use followup_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct UserClient {
    base: Arc<BaseClient>,
}

pub struct CreateUserInput {
    pub email: String,
    /// Must match the create user secret code of the server
    pub create_user_secret: String,
}

/// Profile fields to change. A blank business name or phone number clears it.
#[derive(Default)]
pub struct UpdateMeInput {
    pub display_name: Option<String>,
    pub business_name: Option<String>,
    pub phone_number: Option<String>,
}

impl UserClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(&self, input: CreateUserInput) -> APIResponse<create_user::APIResponse> {
        let body = create_user::RequestBody { email: input.email };
        self.base
            .post_with_headers(
                body,
                "user".into(),
                &[("x-create-user-secret", input.create_user_secret)],
                StatusCode::CREATED,
            )
            .await
    }

    pub async fn me(&self) -> APIResponse<get_me::APIResponse> {
        self.base.get("me".into(), StatusCode::OK).await
    }

    pub async fn update_me(&self, input: UpdateMeInput) -> APIResponse<update_me::APIResponse> {
        let body = update_me::RequestBody {
            display_name: input.display_name,
            business_name: input.business_name,
            phone_number: input.phone_number,
        };
        self.base.put(body, "me".into(), StatusCode::OK).await
    }

    pub async fn delete_me(&self) -> APIResponse<delete_me::APIResponse> {
        self.base.delete("me".into(), StatusCode::OK).await
    }
}
