mod helpers;

use chrono::{Duration, Utc};
use followup_sdk::{
    APIErrorVariant, ContactStatus, CreateUserInput, FollowupSDK, HistoryChannel, HistoryStatus,
    ReminderChannel, ReminderStatus, UpdateContactInput, UpdateMeInput, UpdateReminderInput,
};
use helpers::setup::{create_contact, create_reminder, spawn_app};

#[actix_web::main]
#[test]
async fn test_status_ok() {
    let (_, sdk) = spawn_app().await;
    assert!(sdk.status.check_health().await.is_ok());
}

#[actix_web::main]
#[test]
async fn test_create_user() {
    let (app, sdk) = spawn_app().await;
    let res = sdk
        .user
        .create(CreateUserInput {
            email: " Ada@Example.com".into(),
            create_user_secret: app.config.create_user_secret_code.clone(),
        })
        .await
        .expect("Expected to create user");
    assert_eq!(res.user.email, "ada@example.com");
    assert_eq!(res.user.subscription.status, "free");
    assert!(!res.secret_api_key.is_empty());

    let err = sdk
        .user
        .create(CreateUserInput {
            email: "ada@example.com".into(),
            create_user_secret: app.config.create_user_secret_code.clone(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::Conflict);

    let err = sdk
        .user
        .create(CreateUserInput {
            email: "not an email".into(),
            create_user_secret: app.config.create_user_secret_code.clone(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::BadClientData);
}

#[actix_web::main]
#[test]
async fn test_create_user_requires_secret() {
    let (_, sdk) = spawn_app().await;
    let err = sdk
        .user
        .create(CreateUserInput {
            email: "ada@example.com".into(),
            create_user_secret: "wrong".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::Unauthorized);
}

#[actix_web::main]
#[test]
async fn test_get_and_delete_me() {
    let (app, sdk) = spawn_app().await;
    assert_eq!(
        sdk.user.me().await.unwrap_err().variant,
        APIErrorVariant::Unauthorized
    );
    let bad_key = FollowupSDK::new(app.address.clone(), "nope");
    assert_eq!(
        bad_key.user.me().await.unwrap_err().variant,
        APIErrorVariant::Unauthorized
    );

    let ada = app.create_user("ada@example.com").await;
    let me = ada.user.me().await.expect("Expected to get me");
    assert_eq!(me.user.email, "ada@example.com");

    create_contact(&ada, "Grace").await;
    let deleted = ada.user.delete_me().await.expect("Expected to delete me");
    assert_eq!(deleted.user.id, me.user.id);
    assert_eq!(
        ada.user.me().await.unwrap_err().variant,
        APIErrorVariant::Unauthorized
    );
}

#[actix_web::main]
#[test]
async fn test_update_me() {
    let (app, sdk) = spawn_app().await;
    assert_eq!(
        sdk.user
            .update_me(UpdateMeInput::default())
            .await
            .unwrap_err()
            .variant,
        APIErrorVariant::Unauthorized
    );

    let ada = app.create_user("ada@example.com").await;
    let me = ada.user.me().await.unwrap().user;
    assert!(me.display_name.is_none());

    let updated = ada
        .user
        .update_me(UpdateMeInput {
            display_name: Some("Ada Lovelace".into()),
            business_name: Some("Analytical Engines".into()),
            ..Default::default()
        })
        .await
        .expect("Expected to update profile")
        .user;
    assert_eq!(updated.display_name.as_deref(), Some("Ada Lovelace"));
    assert_eq!(updated.business_name.as_deref(), Some("Analytical Engines"));
    assert!(updated.phone_number.is_none());
    assert_eq!(updated.email, me.email);

    let err = ada
        .user
        .update_me(UpdateMeInput {
            display_name: Some("A".into()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::BadClientData);

    let me = ada.user.me().await.unwrap().user;
    assert_eq!(me.display_name.as_deref(), Some("Ada Lovelace"));
}

#[actix_web::main]
#[test]
async fn test_contact_crud() {
    let (app, _) = spawn_app().await;
    let ada = app.create_user("ada@example.com").await;

    let contact_id = create_contact(&ada, "Grace").await;
    let contact = ada.contact.get(&contact_id).await.unwrap().contact;
    assert_eq!(contact.name, "Grace");
    assert_eq!(contact.status, ContactStatus::Active);
    assert!(contact.last_contacted.is_none());

    let updated = ada
        .contact
        .update(UpdateContactInput {
            contact_id: contact_id.clone(),
            name: Some("Grace Hopper".into()),
            status: Some(ContactStatus::Inactive),
            ..Default::default()
        })
        .await
        .expect("Expected to update contact")
        .contact;
    assert_eq!(updated.name, "Grace Hopper");
    assert_eq!(updated.status, ContactStatus::Inactive);
    assert_eq!(updated.email, contact.email);

    let err = ada
        .contact
        .update(UpdateContactInput {
            contact_id: contact_id.clone(),
            phone: Some("123".into()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::BadClientData);

    create_contact(&ada, "Linus").await;
    assert_eq!(ada.contact.list().await.unwrap().contacts.len(), 2);

    assert!(ada.contact.delete(&contact_id).await.is_ok());
    assert_eq!(
        ada.contact.get(&contact_id).await.unwrap_err().variant,
        APIErrorVariant::NotFound
    );
    assert_eq!(ada.contact.list().await.unwrap().contacts.len(), 1);
}

#[actix_web::main]
#[test]
async fn test_contacts_are_scoped_to_user() {
    let (app, _) = spawn_app().await;
    let ada = app.create_user("ada@example.com").await;
    let bob = app.create_user("bob@example.com").await;

    let contact_id = create_contact(&ada, "Grace").await;
    let reminder_id = create_reminder(
        &ada,
        &contact_id,
        ReminderChannel::Email,
        Utc::now() + Duration::days(1),
    )
    .await;

    assert_eq!(
        bob.contact.get(&contact_id).await.unwrap_err().variant,
        APIErrorVariant::NotFound
    );
    assert_eq!(
        bob.contact.delete(&contact_id).await.unwrap_err().variant,
        APIErrorVariant::NotFound
    );
    assert!(bob.contact.list().await.unwrap().contacts.is_empty());
    assert_eq!(
        bob.reminder.get(&reminder_id).await.unwrap_err().variant,
        APIErrorVariant::NotFound
    );
    assert_eq!(
        bob.reminder.mark_paid(&reminder_id).await.unwrap_err().variant,
        APIErrorVariant::NotFound
    );
    // Cannot schedule reminders for contacts of other users
    let err = bob
        .reminder
        .create(followup_sdk::CreateReminderInput {
            contact_id: contact_id.clone(),
            channel: ReminderChannel::Sms,
            message: "Hello from someone else".into(),
            scheduled_at: Utc::now(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::NotFound);
}

#[actix_web::main]
#[test]
async fn test_reminder_crud() {
    let (app, _) = spawn_app().await;
    let ada = app.create_user("ada@example.com").await;
    let contact_id = create_contact(&ada, "Grace").await;

    let scheduled_at = Utc::now() + Duration::days(3);
    let reminder_id = create_reminder(&ada, &contact_id, ReminderChannel::WhatsApp, scheduled_at).await;
    let reminder = ada.reminder.get(&reminder_id).await.unwrap().reminder;
    assert_eq!(reminder.status, ReminderStatus::Pending);
    assert_eq!(reminder.channel, ReminderChannel::WhatsApp);

    let err = ada
        .reminder
        .update(UpdateReminderInput {
            reminder_id: reminder_id.clone(),
            message: Some("too short".into()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::BadClientData);

    let updated = ada
        .reminder
        .update(UpdateReminderInput {
            reminder_id: reminder_id.clone(),
            channel: Some(ReminderChannel::Sms),
            message: Some("Following up on our call last week".into()),
            ..Default::default()
        })
        .await
        .expect("Expected to update reminder")
        .reminder;
    assert_eq!(updated.channel, ReminderChannel::Sms);
    assert_eq!(updated.message, "Following up on our call last week");
    assert_eq!(updated.scheduled_at, reminder.scheduled_at);

    let other_id = create_reminder(&ada, &contact_id, ReminderChannel::Email, scheduled_at).await;
    ada.reminder.mark_paid(&other_id).await.unwrap();

    let all = ada.reminder.list(None).await.unwrap().reminders;
    assert_eq!(all.len(), 2);
    let pending = ada
        .reminder
        .list(Some(ReminderStatus::Pending))
        .await
        .unwrap()
        .reminders;
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, reminder_id);
    let paid = ada
        .reminder
        .list(Some(ReminderStatus::Paid))
        .await
        .unwrap()
        .reminders;
    assert_eq!(paid.len(), 1);
    assert_eq!(paid[0].id, other_id);

    assert!(ada.reminder.cancel(&reminder_id).await.is_ok());
    assert_eq!(
        ada.reminder.get(&reminder_id).await.unwrap_err().variant,
        APIErrorVariant::NotFound
    );
}

#[actix_web::main]
#[test]
async fn test_reminders_are_locked_once_not_pending() {
    let (app, _) = spawn_app().await;
    let ada = app.create_user("ada@example.com").await;
    let contact_id = create_contact(&ada, "Grace").await;
    let reminder_id = create_reminder(
        &ada,
        &contact_id,
        ReminderChannel::Email,
        Utc::now() + Duration::days(1),
    )
    .await;

    let paid = ada.reminder.mark_paid(&reminder_id).await.unwrap().reminder;
    assert_eq!(paid.status, ReminderStatus::Paid);

    assert_eq!(
        ada.reminder.mark_paid(&reminder_id).await.unwrap_err().variant,
        APIErrorVariant::Conflict
    );
    let err = ada
        .reminder
        .update(UpdateReminderInput {
            reminder_id: reminder_id.clone(),
            message: Some("A brand new follow up message".into()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::Conflict);
    assert_eq!(
        ada.reminder.cancel(&reminder_id).await.unwrap_err().variant,
        APIErrorVariant::Conflict
    );

    let history = ada.dashboard.history().await.unwrap().logs;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].reminder_id, reminder_id);
    assert_eq!(history[0].channel, HistoryChannel::System);
    assert_eq!(history[0].status, HistoryStatus::Paid);
    assert_eq!(history[0].contact_name, "Grace");
}

#[actix_web::main]
#[test]
async fn test_deleting_contact_deletes_its_reminders() {
    let (app, _) = spawn_app().await;
    let ada = app.create_user("ada@example.com").await;
    let grace = create_contact(&ada, "Grace").await;
    let linus = create_contact(&ada, "Linus").await;
    let later = Utc::now() + Duration::days(1);
    create_reminder(&ada, &grace, ReminderChannel::Email, later).await;
    let kept = create_reminder(&ada, &linus, ReminderChannel::Email, later).await;

    ada.contact.delete(&grace).await.unwrap();

    let reminders = ada.reminder.list(None).await.unwrap().reminders;
    assert_eq!(reminders.len(), 1);
    assert_eq!(reminders[0].id, kept);
}

#[actix_web::main]
#[test]
async fn test_dashboard() {
    let (app, _) = spawn_app().await;
    let ada = app.create_user("ada@example.com").await;

    let empty = ada.dashboard.get().await.unwrap();
    assert_eq!(empty.contacts, 0);
    assert_eq!(empty.reminders.total, 0);
    assert!(empty.upcoming.is_empty());

    let grace = create_contact(&ada, "Grace").await;
    create_contact(&ada, "Linus").await;
    let now = Utc::now();
    for days in (1..=7).rev() {
        create_reminder(&ada, &grace, ReminderChannel::Email, now + Duration::days(days)).await;
    }
    let paid = create_reminder(&ada, &grace, ReminderChannel::Sms, now + Duration::hours(1)).await;
    ada.reminder.mark_paid(&paid).await.unwrap();

    let dashboard = ada.dashboard.get().await.unwrap();
    assert_eq!(dashboard.contacts, 2);
    assert_eq!(dashboard.reminders.total, 8);
    assert_eq!(dashboard.reminders.pending, 7);
    assert_eq!(dashboard.reminders.paid, 1);
    assert_eq!(dashboard.upcoming.len(), 5);
    assert!(dashboard
        .upcoming
        .windows(2)
        .all(|w| w[0].scheduled_at <= w[1].scheduled_at));
    assert!(dashboard
        .upcoming
        .iter()
        .all(|r| r.status == ReminderStatus::Pending));
}
