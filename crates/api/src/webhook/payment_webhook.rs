use crate::error::FollowupError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use followup_api_structs::payment_webhook::*;
use followup_domain::{PaymentEvent, PaymentEventError};
use followup_infra::FollowupContext;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::info;

pub const SIGNATURE_HEADER: &str = "x-signature";

type HmacSha256 = Hmac<Sha256>;

pub async fn payment_webhook_controller(
    http_req: HttpRequest,
    body: web::Bytes,
    ctx: web::Data<FollowupContext>,
) -> Result<HttpResponse, FollowupError> {
    if let Some(secret) = &ctx.config.payment_webhook_secret {
        let signature = http_req
            .headers()
            .get(SIGNATURE_HEADER)
            .and_then(|s| s.to_str().ok())
            .unwrap_or_default();
        if !verify_signature(secret, &body, signature) {
            return Err(FollowupError::Unauthorized(
                "Invalid webhook signature".into(),
            ));
        }
    }

    let payload: RequestBody = serde_json::from_slice(&body)
        .map_err(|e| FollowupError::BadClientData(format!("Malformed webhook payload: {}", e)))?;
    let event = PaymentEvent::parse(
        payload.event_name(),
        payload.user_email(),
        payload.product_name(),
    )
    .map_err(|e| FollowupError::BadClientData(e.to_string()))?;

    let usecase = HandlePaymentEventUseCase { event };
    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(res))
        .map_err(FollowupError::from)
}

/// Hex encoded HMAC-SHA256 of the raw body
fn verify_signature(secret: &str, body: &[u8], signature: &str) -> bool {
    let signature = match hex::decode(signature.trim()) {
        Ok(signature) => signature,
        Err(_) => return false,
    };
    let mut mac = match HmacSha256::new_from_slice(secret.as_bytes()) {
        Ok(mac) => mac,
        Err(_) => return false,
    };
    mac.update(body);
    mac.verify_slice(&signature).is_ok()
}

/// Applies a subscription lifecycle event to the `User` with the event email
#[derive(Debug)]
pub struct HandlePaymentEventUseCase {
    pub event: PaymentEvent,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidEvent(PaymentEventError),
    UserNotFound(String),
    StorageError,
}

impl From<UseCaseError> for FollowupError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidEvent(e) => Self::BadClientData(e.to_string()),
            UseCaseError::UserNotFound(_) => Self::NotFound("User not found".into()),
            UseCaseError::StorageError => Self::WebhookFailure,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for HandlePaymentEventUseCase {
    type Response = APIResponse;
    type Error = UseCaseError;

    const NAME: &'static str = "HandlePaymentEvent";

    async fn execute(&mut self, ctx: &FollowupContext) -> Result<Self::Response, Self::Error> {
        let email = match self.event.user_email() {
            Some(email) => email.trim().to_lowercase(),
            None => {
                return Ok(match self.event {
                    PaymentEvent::OrderCreated => {
                        info!("Payment order created");
                        APIResponse::success("Order logged")
                    }
                    _ => APIResponse::ignored(),
                });
            }
        };

        let mut user = ctx
            .repos
            .users
            .find_by_email(&email)
            .await
            .ok_or_else(|| UseCaseError::UserNotFound(email.clone()))?;

        let now = ctx.sys.now();
        let message = match &self.event {
            PaymentEvent::SubscriptionCreated { plan, .. } => {
                user.subscription.activate(plan.clone(), now);
                "Plan activated"
            }
            PaymentEvent::SubscriptionUpdated { plan, .. } => {
                user.subscription.change_plan(plan.clone(), now);
                "Plan updated"
            }
            PaymentEvent::SubscriptionCancelled { .. } => {
                user.subscription.cancel(now);
                "Plan cancelled → Free"
            }
            PaymentEvent::OrderCreated | PaymentEvent::Ignored => {
                return Err(UseCaseError::InvalidEvent(PaymentEventError::MissingEmail))
            }
        };

        ctx.repos
            .users
            .save(&user)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        info!(
            "Subscription of user {} is now {}",
            user.id,
            user.subscription.status.as_str()
        );

        Ok(APIResponse::success(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use followup_domain::{SubscriptionStatus, User};

    async fn insert_user(ctx: &FollowupContext) -> User {
        let user = User::new("jane@example.com".into(), Utc::now());
        ctx.repos.users.insert(&user).await.unwrap();
        user
    }

    async fn handle(ctx: &FollowupContext, event: PaymentEvent) -> Result<APIResponse, UseCaseError> {
        HandlePaymentEventUseCase { event }.execute(ctx).await
    }

    #[actix_web::main]
    #[test]
    async fn subscription_lifecycle_updates_user() {
        let ctx = FollowupContext::create_inmemory();
        let user = insert_user(&ctx).await;

        let res = handle(
            &ctx,
            PaymentEvent::SubscriptionCreated {
                email: "Jane@example.com".into(),
                plan: "scale".into(),
            },
        )
        .await
        .unwrap();
        assert_eq!(res.message, "Plan activated");
        let stored = ctx.repos.users.find(&user.id).await.unwrap();
        assert_eq!(stored.subscription.status, SubscriptionStatus::Plan("scale".into()));
        assert!(stored.subscription.subscribed_at.is_some());

        handle(
            &ctx,
            PaymentEvent::SubscriptionUpdated {
                email: "jane@example.com".into(),
                plan: "growth".into(),
            },
        )
        .await
        .unwrap();
        let stored = ctx.repos.users.find(&user.id).await.unwrap();
        assert_eq!(stored.subscription.status.as_str(), "growth");
        assert!(stored.subscription.updated_at.is_some());

        let res = handle(
            &ctx,
            PaymentEvent::SubscriptionCancelled {
                email: "jane@example.com".into(),
            },
        )
        .await
        .unwrap();
        assert_eq!(res.message, "Plan cancelled → Free");
        let stored = ctx.repos.users.find(&user.id).await.unwrap();
        assert_eq!(stored.subscription.status, SubscriptionStatus::Free);
        assert!(stored.subscription.cancelled_at.is_some());
    }

    #[actix_web::main]
    #[test]
    async fn unknown_user_is_not_found() {
        let ctx = FollowupContext::create_inmemory();
        let res = handle(
            &ctx,
            PaymentEvent::SubscriptionCancelled {
                email: "ghost@example.com".into(),
            },
        )
        .await;
        assert_eq!(
            res.unwrap_err(),
            UseCaseError::UserNotFound("ghost@example.com".into())
        );
    }

    #[actix_web::main]
    #[test]
    async fn order_and_unknown_events_are_acknowledged() {
        let ctx = FollowupContext::create_inmemory();
        let res = handle(&ctx, PaymentEvent::OrderCreated).await.unwrap();
        assert_eq!(res.success, Some(true));
        assert_eq!(res.message, "Order logged");

        let res = handle(&ctx, PaymentEvent::Ignored).await.unwrap();
        assert_eq!(res.success, None);
        assert_eq!(res.message, "Event ignored");
    }

    #[test]
    fn verifies_hmac_signatures() {
        let body = br#"{"meta":{"event_name":"order_created"}}"#;
        let mut mac = HmacSha256::new_from_slice(b"whsec").unwrap();
        mac.update(body);
        let signature = hex::encode(mac.finalize().into_bytes());

        assert!(verify_signature("whsec", body, &signature));
        assert!(!verify_signature("other", body, &signature));
        assert!(!verify_signature("whsec", b"{}", &signature));
        assert!(!verify_signature("whsec", body, "not hex"));
        assert!(!verify_signature("whsec", body, ""));
    }
}
