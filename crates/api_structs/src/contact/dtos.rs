use chrono::{DateTime, Utc};
use followup_domain::{Contact, ContactStatus, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ContactDTO {
    pub id: ID,
    pub user_id: ID,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: ContactStatus,
    pub last_contacted: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl ContactDTO {
    pub fn new(contact: Contact) -> Self {
        Self {
            id: contact.id,
            user_id: contact.user_id,
            name: contact.name,
            email: contact.email,
            phone: contact.phone,
            status: contact.status,
            last_contacted: contact.last_contacted,
            created_at: contact.created_at,
        }
    }
}
