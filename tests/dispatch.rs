mod helpers;

use chrono::{Duration, Utc};
use followup_sdk::{FollowupSDK, HistoryChannel, HistoryStatus, ReminderChannel, ReminderStatus, ID};
use helpers::setup::{create_contact, create_reminder, spawn_app};

async fn wait_for_status(sdk: &FollowupSDK, reminder_id: &ID, status: ReminderStatus) -> bool {
    for _ in 0..50 {
        let reminder = sdk
            .reminder
            .get(reminder_id)
            .await
            .expect("Expected to get reminder")
            .reminder;
        if reminder.status == status {
            return true;
        }
        actix_web::rt::time::sleep(std::time::Duration::from_millis(100)).await;
    }
    false
}

#[actix_web::main]
#[test]
async fn test_due_reminders_are_dispatched() {
    let (app, _) = spawn_app().await;
    let ada = app.create_user("ada@example.com").await;
    let contact_id = create_contact(&ada, "Grace").await;

    let email = create_reminder(
        &ada,
        &contact_id,
        ReminderChannel::Email,
        Utc::now() - Duration::minutes(5),
    )
    .await;
    let sms = create_reminder(
        &ada,
        &contact_id,
        ReminderChannel::Sms,
        Utc::now() - Duration::minutes(1),
    )
    .await;
    let future = create_reminder(
        &ada,
        &contact_id,
        ReminderChannel::WhatsApp,
        Utc::now() + Duration::days(1),
    )
    .await;

    assert!(wait_for_status(&ada, &email, ReminderStatus::Sent).await);
    assert!(wait_for_status(&ada, &sms, ReminderStatus::Sent).await);
    let future = ada.reminder.get(&future).await.unwrap().reminder;
    assert_eq!(future.status, ReminderStatus::Pending);

    let contact = ada.contact.get(&contact_id).await.unwrap().contact;
    assert!(contact.last_contacted.is_some());

    let history = ada.dashboard.history().await.unwrap().logs;
    assert_eq!(history.len(), 2);
    assert!(history
        .iter()
        .all(|log| log.status == HistoryStatus::Delivered && log.contact_name == "Grace"));
    let email_log = history
        .iter()
        .find(|log| log.reminder_id == email)
        .expect("Expected a history log for the email reminder");
    assert_eq!(email_log.channel, HistoryChannel::Email);
    assert_eq!(email_log.details, "Queued email to grace@example.com");
    let sms_log = history
        .iter()
        .find(|log| log.reminder_id == sms)
        .expect("Expected a history log for the sms reminder");
    assert_eq!(sms_log.channel, HistoryChannel::Sms);

    let dashboard = ada.dashboard.get().await.unwrap();
    assert_eq!(dashboard.reminders.sent, 2);
    assert_eq!(dashboard.reminders.pending, 1);
}

#[actix_web::main]
#[test]
async fn test_dispatched_reminders_are_not_sent_twice() {
    let (app, _) = spawn_app().await;
    let ada = app.create_user("ada@example.com").await;
    let contact_id = create_contact(&ada, "Grace").await;
    let reminder_id = create_reminder(
        &ada,
        &contact_id,
        ReminderChannel::Email,
        Utc::now() - Duration::seconds(1),
    )
    .await;

    assert!(wait_for_status(&ada, &reminder_id, ReminderStatus::Sent).await);
    // Let a few more ticks of the dispatcher pass
    actix_web::rt::time::sleep(std::time::Duration::from_millis(2500)).await;

    let history = ada.dashboard.history().await.unwrap().logs;
    assert_eq!(history.len(), 1);
    assert_eq!(
        ada.reminder.mark_paid(&reminder_id).await.unwrap_err().variant,
        followup_sdk::APIErrorVariant::Conflict
    );
}
