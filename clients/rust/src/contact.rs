use crate::base::{APIResponse, BaseClient};
use followup_api_structs::*;
use followup_domain::{ContactStatus, ID};
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ContactClient {
    base: Arc<BaseClient>,
}

pub struct CreateContactInput {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Default)]
pub struct UpdateContactInput {
    pub contact_id: ID,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: Option<ContactStatus>,
}

impl ContactClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        input: CreateContactInput,
    ) -> APIResponse<create_contact::APIResponse> {
        let body = create_contact::RequestBody {
            name: input.name,
            email: input.email,
            phone: input.phone,
        };
        self.base
            .post(body, "contacts".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get(&self, contact_id: &ID) -> APIResponse<get_contact::APIResponse> {
        self.base
            .get(format!("contacts/{}", contact_id), StatusCode::OK)
            .await
    }

    pub async fn list(&self) -> APIResponse<get_contacts::APIResponse> {
        self.base.get("contacts".into(), StatusCode::OK).await
    }

    pub async fn update(
        &self,
        input: UpdateContactInput,
    ) -> APIResponse<update_contact::APIResponse> {
        let body = update_contact::RequestBody {
            name: input.name,
            email: input.email,
            phone: input.phone,
            status: input.status,
        };
        self.base
            .put(
                body,
                format!("contacts/{}", input.contact_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn delete(&self, contact_id: &ID) -> APIResponse<delete_contact::APIResponse> {
        self.base
            .delete(format!("contacts/{}", contact_id), StatusCode::OK)
            .await
    }
}
