use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Utc};
use followup_utils::create_random_secret;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

const API_KEY_LEN: usize = 30;
const DISPLAY_NAME_MIN_LEN: usize = 2;
const DISPLAY_NAME_MAX_LEN: usize = 256;

/// A `User` owns `Contact`s and `Reminder`s. The api key stands in for the
/// identity issued by the hosted auth provider.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: ID,
    /// Unique, the payment provider identifies users by email
    pub email: String,
    pub secret_api_key: String,
    pub subscription: Subscription,
    pub profile: UserProfile,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: String, now: DateTime<Utc>) -> Self {
        Self {
            id: Default::default(),
            email,
            secret_api_key: Self::generate_secret_api_key(),
            subscription: Default::default(),
            profile: Default::default(),
            created_at: now,
        }
    }

    /// Trimmed and lower cased email, if it is valid
    pub fn parse_email(email: &str) -> Option<String> {
        let email = email.trim().to_lowercase();
        validator::validate_email(&email).then_some(email)
    }

    pub fn generate_secret_api_key() -> String {
        let rand_secret = create_random_secret(API_KEY_LEN);
        format!("sk_{}", rand_secret)
    }
}

impl Entity<ID> for User {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

/// Details the `User` fills in on the profile page
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserProfile {
    pub display_name: Option<String>,
    pub business_name: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(Error, Debug, PartialEq)]
pub enum ProfileValidationError {
    #[error("Name must be at least 2 characters.")]
    InvalidDisplayName,
}

impl UserProfile {
    pub fn parse_display_name(name: String) -> Result<String, ProfileValidationError> {
        let name = name.trim();
        let len = name.graphemes(true).count();
        if !(DISPLAY_NAME_MIN_LEN..=DISPLAY_NAME_MAX_LEN).contains(&len) {
            return Err(ProfileValidationError::InvalidDisplayName);
        }
        Ok(name.to_string())
    }

    /// Blank values clear the field
    pub fn parse_optional(value: String) -> Option<String> {
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_string())
    }
}

/// Subscription tier of a `User`, driven by payment webhook events
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub status: SubscriptionStatus,
    pub subscribed_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub cancelled_at: Option<DateTime<Utc>>,
}

impl Subscription {
    pub fn activate(&mut self, plan: String, now: DateTime<Utc>) {
        self.status = SubscriptionStatus::Plan(plan);
        self.subscribed_at = Some(now);
    }

    pub fn change_plan(&mut self, plan: String, now: DateTime<Utc>) {
        self.status = SubscriptionStatus::Plan(plan);
        self.updated_at = Some(now);
    }

    pub fn cancel(&mut self, now: DateTime<Utc>) {
        self.status = SubscriptionStatus::Free;
        self.cancelled_at = Some(now);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SubscriptionStatus {
    #[default]
    Free,
    /// Lower cased product name of the payment provider, e.g. `scale`
    Plan(String),
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Free => "free",
            Self::Plan(plan) => plan,
        }
    }
}

impl From<String> for SubscriptionStatus {
    fn from(status: String) -> Self {
        let status = status.trim().to_lowercase();
        match status.as_str() {
            "" | "free" => Self::Free,
            _ => Self::Plan(status),
        }
    }
}

impl From<SubscriptionStatus> for String {
    fn from(status: SubscriptionStatus) -> Self {
        status.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_is_on_free_plan() {
        let user = User::new("jane@example.com".into(), Utc::now());
        assert_eq!(user.subscription.status, SubscriptionStatus::Free);
        assert!(user.secret_api_key.starts_with("sk_"));
        assert_eq!(user.secret_api_key.len(), API_KEY_LEN + 3);
    }

    #[test]
    fn parses_emails() {
        assert_eq!(User::parse_email(" Jane@Example.com "), Some("jane@example.com".into()));
        assert_eq!(User::parse_email("jane"), None);
    }

    #[test]
    fn parses_profile_fields() {
        assert_eq!(
            UserProfile::parse_display_name(" Jane Doe ".into()),
            Ok("Jane Doe".into())
        );
        assert_eq!(
            UserProfile::parse_display_name("J ".into()),
            Err(ProfileValidationError::InvalidDisplayName)
        );
        assert_eq!(UserProfile::parse_optional("  ".into()), None);
        assert_eq!(
            UserProfile::parse_optional(" Acme Ltd ".into()),
            Some("Acme Ltd".into())
        );
    }

    #[test]
    fn subscription_lifecycle() {
        let now = Utc::now();
        let mut sub = Subscription::default();

        sub.activate("scale".into(), now);
        assert_eq!(sub.status, SubscriptionStatus::Plan("scale".into()));
        assert_eq!(sub.subscribed_at, Some(now));

        sub.change_plan("growth".into(), now);
        assert_eq!(sub.status.as_str(), "growth");
        assert_eq!(sub.updated_at, Some(now));

        sub.cancel(now);
        assert_eq!(sub.status, SubscriptionStatus::Free);
        assert_eq!(sub.cancelled_at, Some(now));
    }

    #[test]
    fn subscription_status_from_string() {
        assert_eq!(SubscriptionStatus::from("free".to_string()), SubscriptionStatus::Free);
        assert_eq!(
            SubscriptionStatus::from(" Growth ".to_string()),
            SubscriptionStatus::Plan("growth".into())
        );
    }
}
