mod contact;
mod history_log;
mod mail;
mod payment_event;
mod reminder;
mod shared;
mod user;

pub use contact::{Contact, ContactStatus, ContactValidationError};
pub use history_log::{HistoryChannel, HistoryLog, HistoryStatus};
pub use mail::MailMessage;
pub use payment_event::{PaymentEvent, PaymentEventError};
pub use reminder::{Reminder, ReminderChannel, ReminderError, ReminderStatus};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use user::{ProfileValidationError, Subscription, SubscriptionStatus, User, UserProfile};
