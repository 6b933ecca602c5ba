use crate::base::{APIResponse, BaseClient};
use followup_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardClient {
    base: Arc<BaseClient>,
}

impl DashboardClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get(&self) -> APIResponse<get_dashboard::APIResponse> {
        self.base.get("dashboard".into(), StatusCode::OK).await
    }

    pub async fn history(&self) -> APIResponse<get_history::APIResponse> {
        self.base.get("history".into(), StatusCode::OK).await
    }
}
