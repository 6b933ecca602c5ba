use chrono::{DateTime, Utc};
use followup_domain::{User, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserDTO {
    pub id: ID,
    pub email: String,
    pub display_name: Option<String>,
    pub business_name: Option<String>,
    pub phone_number: Option<String>,
    pub subscription: SubscriptionDTO,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionDTO {
    /// `free` or the name of the plan
    pub status: String,
    pub subscribed_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub cancelled_at: Option<DateTime<Utc>>,
}

impl UserDTO {
    pub fn new(user: User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email,
            display_name: user.profile.display_name,
            business_name: user.profile.business_name,
            phone_number: user.profile.phone_number,
            subscription: SubscriptionDTO {
                status: user.subscription.status.as_str().to_string(),
                subscribed_at: user.subscription.subscribed_at,
                updated_at: user.subscription.updated_at,
                cancelled_at: user.subscription.cancelled_at,
            },
            created_at: user.created_at,
        }
    }
}
