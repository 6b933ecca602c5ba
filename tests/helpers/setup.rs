#![allow(dead_code)]

use followup_api::Application;
use followup_infra::{Config, FollowupContext};
use followup_sdk::{
    CreateContactInput, CreateReminderInput, CreateUserInput, FollowupSDK, ReminderChannel, ID,
};
use chrono::{DateTime, Utc};

pub const WEBHOOK_SECRET: &str = "whsec_test_secret";

pub struct TestApp {
    pub config: Config,
    pub address: String,
}

impl TestApp {
    /// Creates a new `User` and returns a client acting as that `User`
    pub async fn create_user(&self, email: &str) -> FollowupSDK {
        let res = FollowupSDK::anonymous(self.address.clone())
            .user
            .create(CreateUserInput {
                email: email.into(),
                create_user_secret: self.config.create_user_secret_code.clone(),
            })
            .await
            .expect("Expected to create user");
        FollowupSDK::new(self.address.clone(), res.secret_api_key)
    }
}

fn build_context() -> FollowupContext {
    let mut ctx = FollowupContext::create_inmemory();
    ctx.config.port = 0; // Random port
    ctx.config.send_reminders_interval_secs = 1;
    ctx.config.payment_webhook_secret = None;
    ctx
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, FollowupSDK) {
    launch(build_context()).await
}

/// Same as `spawn_app` but webhook payloads must be signed with `WEBHOOK_SECRET`
pub async fn spawn_app_with_webhook_secret() -> (TestApp, FollowupSDK) {
    let mut ctx = build_context();
    ctx.config.payment_webhook_secret = Some(WEBHOOK_SECRET.into());
    launch(ctx).await
}

async fn launch(ctx: FollowupContext) -> (TestApp, FollowupSDK) {
    let config = ctx.config.clone();
    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp {
        config,
        address: address.clone(),
    };
    let sdk = FollowupSDK::anonymous(address);
    (app, sdk)
}

pub async fn create_contact(sdk: &FollowupSDK, name: &str) -> ID {
    sdk.contact
        .create(CreateContactInput {
            name: name.into(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "+1 555 010 0000".into(),
        })
        .await
        .expect("Expected to create contact")
        .contact
        .id
}

pub async fn create_reminder(
    sdk: &FollowupSDK,
    contact_id: &ID,
    channel: ReminderChannel,
    scheduled_at: DateTime<Utc>,
) -> ID {
    sdk.reminder
        .create(CreateReminderInput {
            contact_id: contact_id.clone(),
            channel,
            message: "Hi, just following up on the invoice".into(),
            scheduled_at,
        })
        .await
        .expect("Expected to create reminder")
        .reminder
        .id
}
