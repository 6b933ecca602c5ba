use crate::base::{APIResponse, BaseClient};
use followup_api_structs::payment_webhook;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct WebhookClient {
    base: Arc<BaseClient>,
}

pub struct PaymentEventInput {
    /// Raw json payload, sent unmodified
    pub payload: Vec<u8>,
    /// Hex encoded HMAC-SHA256 of the payload
    pub signature: Option<String>,
}

impl WebhookClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn payment_event(
        &self,
        input: PaymentEventInput,
    ) -> APIResponse<payment_webhook::APIResponse> {
        let headers = input
            .signature
            .map(|signature| vec![("x-signature", signature)])
            .unwrap_or_default();
        self.base
            .post_raw(
                input.payload,
                "webhooks/payments".into(),
                &headers,
                StatusCode::OK,
            )
            .await
    }
}
