mod base;
mod contact;
mod dashboard;
mod reminder;
mod status;
mod user;
mod webhook;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
use contact::ContactClient;
pub use contact::{CreateContactInput, UpdateContactInput};
use dashboard::DashboardClient;
pub use followup_api_structs::dtos::*;
pub use followup_domain::{
    ContactStatus, HistoryChannel, HistoryStatus, ReminderChannel, ReminderStatus, ID,
};
use reminder::ReminderClient;
pub use reminder::{CreateReminderInput, UpdateReminderInput};
use status::StatusClient;
use std::sync::Arc;
use user::UserClient;
pub use user::{CreateUserInput, UpdateMeInput};
use webhook::WebhookClient;
pub use webhook::PaymentEventInput;

// Domain
pub use followup_api_structs::dtos::ContactDTO as Contact;
pub use followup_api_structs::dtos::HistoryLogDTO as HistoryLog;
pub use followup_api_structs::dtos::ReminderDTO as Reminder;
pub use followup_api_structs::dtos::UserDTO as User;

/// Followup Server SDK
///
/// The SDK contains methods for interacting with the Followup server
/// API.
#[derive(Clone)]
pub struct FollowupSDK {
    pub contact: ContactClient,
    pub dashboard: DashboardClient,
    pub reminder: ReminderClient,
    pub status: StatusClient,
    pub user: UserClient,
    pub webhook: WebhookClient,
}

impl FollowupSDK {
    /// Client acting as the `User` owning the api key
    pub fn new<T: Into<String>>(address: String, api_key: T) -> Self {
        let mut base = BaseClient::new(address);
        base.set_api_key(api_key.into());
        Self::from_base(base)
    }

    /// Client without credentials, for creating users and for webhooks
    pub fn anonymous(address: String) -> Self {
        Self::from_base(BaseClient::new(address))
    }

    fn from_base(base: BaseClient) -> Self {
        let base = Arc::new(base);
        let contact = ContactClient::new(base.clone());
        let dashboard = DashboardClient::new(base.clone());
        let reminder = ReminderClient::new(base.clone());
        let status = StatusClient::new(base.clone());
        let user = UserClient::new(base.clone());
        let webhook = WebhookClient::new(base);

        Self {
            contact,
            dashboard,
            reminder,
            status,
            user,
            webhook,
        }
    }
}
