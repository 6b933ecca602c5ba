use thiserror::Error;

/// Subscription lifecycle events sent by the payment provider webhook
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentEvent {
    OrderCreated,
    SubscriptionCreated { email: String, plan: String },
    SubscriptionUpdated { email: String, plan: String },
    SubscriptionCancelled { email: String },
    /// Unknown or missing event name, acknowledged without side effects
    Ignored,
}

#[derive(Error, Debug, PartialEq)]
pub enum PaymentEventError {
    #[error("Missing subscription data")]
    MissingSubscriptionData,
    #[error("Missing email")]
    MissingEmail,
}

impl PaymentEvent {
    /// Builds the event from the loosely typed webhook fields. The plan is the
    /// lower cased product name.
    pub fn parse(
        event_name: Option<&str>,
        user_email: Option<String>,
        product_name: Option<String>,
    ) -> Result<Self, PaymentEventError> {
        let email = user_email.filter(|e| !e.trim().is_empty());
        let plan = product_name
            .map(|p| p.trim().to_lowercase())
            .filter(|p| !p.is_empty());

        match event_name {
            Some("order_created") => Ok(Self::OrderCreated),
            Some("subscription_created") => match (email, plan) {
                (Some(email), Some(plan)) => Ok(Self::SubscriptionCreated { email, plan }),
                _ => Err(PaymentEventError::MissingSubscriptionData),
            },
            Some("subscription_updated") => match (email, plan) {
                (Some(email), Some(plan)) => Ok(Self::SubscriptionUpdated { email, plan }),
                _ => Err(PaymentEventError::MissingSubscriptionData),
            },
            Some("subscription_cancelled") => match email {
                Some(email) => Ok(Self::SubscriptionCancelled { email }),
                None => Err(PaymentEventError::MissingEmail),
            },
            _ => Ok(Self::Ignored),
        }
    }

    /// Email of the `User` this event modifies, if any
    pub fn user_email(&self) -> Option<&str> {
        match self {
            Self::SubscriptionCreated { email, .. }
            | Self::SubscriptionUpdated { email, .. }
            | Self::SubscriptionCancelled { email } => Some(email),
            Self::OrderCreated | Self::Ignored => None,
        }
    }
}
