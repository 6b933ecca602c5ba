use serde::{Deserialize, Serialize};

pub mod payment_webhook {
    use super::*;

    /// Payload sent by the payment provider. Every field is optional, missing
    /// data is reported per event.
    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct RequestBody {
        #[serde(default)]
        pub meta: Option<WebhookMeta>,
        #[serde(default)]
        pub data: Option<WebhookData>,
    }

    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct WebhookMeta {
        #[serde(default)]
        pub event_name: Option<String>,
    }

    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct WebhookData {
        #[serde(default)]
        pub attributes: Option<WebhookAttributes>,
    }

    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct WebhookAttributes {
        #[serde(default)]
        pub user_email: Option<String>,
        #[serde(default)]
        pub product_name: Option<String>,
    }

    impl RequestBody {
        pub fn event_name(&self) -> Option<&str> {
            self.meta.as_ref()?.event_name.as_deref()
        }

        fn attributes(&self) -> Option<&WebhookAttributes> {
            self.data.as_ref()?.attributes.as_ref()
        }

        pub fn user_email(&self) -> Option<String> {
            self.attributes()?.user_email.clone()
        }

        pub fn product_name(&self) -> Option<String> {
            self.attributes()?.product_name.clone()
        }
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub success: Option<bool>,
        pub message: String,
    }

    impl APIResponse {
        pub fn success(message: &str) -> Self {
            Self {
                success: Some(true),
                message: message.into(),
            }
        }

        pub fn ignored() -> Self {
            Self {
                success: None,
                message: "Event ignored".into(),
            }
        }
    }
}
