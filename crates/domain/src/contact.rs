use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

const NAME_MIN_LEN: usize = 2;
const NAME_MAX_LEN: usize = 256;
const PHONE_MIN_LEN: usize = 10;

/// A person or lead a `User` wants to follow up with
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub id: ID,
    pub user_id: ID,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: ContactStatus,
    /// Set by the reminder dispatcher whenever a `Reminder` reaches this `Contact`
    pub last_contacted: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Error, Debug, PartialEq)]
pub enum ContactValidationError {
    #[error("Name must be at least 2 characters.")]
    InvalidName,
    #[error("Please enter a valid email.")]
    InvalidEmail,
    #[error("Please enter a valid phone number.")]
    InvalidPhone,
}

impl Contact {
    pub fn new(
        user_id: ID,
        name: String,
        email: String,
        phone: String,
        now: DateTime<Utc>,
    ) -> Result<Self, ContactValidationError> {
        Ok(Self {
            id: Default::default(),
            user_id,
            name: Self::parse_name(name)?,
            email: Self::parse_email(email)?,
            phone: Self::parse_phone(phone)?,
            status: ContactStatus::Active,
            last_contacted: None,
            created_at: now,
        })
    }

    pub fn parse_name(name: String) -> Result<String, ContactValidationError> {
        let name = name.trim();
        let len = name.graphemes(true).count();
        if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len) {
            return Err(ContactValidationError::InvalidName);
        }
        Ok(name.to_string())
    }

    pub fn parse_email(email: String) -> Result<String, ContactValidationError> {
        let email = email.trim();
        if validator::validate_email(email) {
            Ok(email.to_string())
        } else {
            Err(ContactValidationError::InvalidEmail)
        }
    }

    pub fn parse_phone(phone: String) -> Result<String, ContactValidationError> {
        let phone = phone.trim();
        if phone.chars().count() < PHONE_MIN_LEN {
            return Err(ContactValidationError::InvalidPhone);
        }
        Ok(phone.to_string())
    }

    pub fn is_owned_by(&self, user_id: &ID) -> bool {
        self.user_id == *user_id
    }
}

impl Entity<ID> for Contact {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    Active,
    Inactive,
}

impl ContactStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl FromStr for ContactStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(format!("{} is not a valid contact status", other)),
        }
    }
}
