use crate::shared::usecase::UseCase;
use chrono::{DateTime, Utc};
use followup_domain::{
    Contact, HistoryChannel, HistoryLog, HistoryStatus, MailMessage, Reminder, ReminderChannel,
    ReminderStatus, ID,
};
use followup_infra::{FollowupContext, TextMessage};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{error, info, warn};

/// One due-scan: every pending `Reminder` whose `scheduled_at` has elapsed is
/// sent through its channel and moved to `sent` or `failed`.
/// A failing `Reminder` never stops the rest of the batch.
#[derive(Debug)]
pub struct DispatchDueRemindersUseCase {}

#[derive(Debug, Default, PartialEq)]
pub struct DispatchReport {
    pub sent: usize,
    pub failed: usize,
    /// Moved out of pending by someone else during the run
    pub skipped: usize,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

#[derive(Error, Debug)]
enum DispatchError {
    #[error("contact not found")]
    ContactNotFound,
    #[error("unable to queue email: {0}")]
    MailQueue(anyhow::Error),
    #[error("{0} gateway error: {1}")]
    TextMessage(ReminderChannel, anyhow::Error),
}

enum Outcome {
    Sent,
    Failed,
    Skipped,
}

#[async_trait::async_trait(?Send)]
impl UseCase for DispatchDueRemindersUseCase {
    type Response = DispatchReport;
    type Error = UseCaseError;

    const NAME: &'static str = "DispatchDueReminders";

    async fn execute(&mut self, ctx: &FollowupContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.now();
        let due = ctx
            .repos
            .reminders
            .find_due(now)
            .await
            .map_err(|e| {
                error!("Unable to query due reminders: {:?}", e);
                UseCaseError::StorageError
            })?;
        let mut report = DispatchReport::default();
        if due.is_empty() {
            return Ok(report);
        }

        let mut contact_ids: Vec<ID> = due.iter().map(|r| r.contact_id.clone()).collect();
        contact_ids.sort_by_key(|id| id.as_string());
        contact_ids.dedup();
        let contacts: HashMap<ID, Contact> = ctx
            .repos
            .contacts
            .find_many(&contact_ids)
            .await
            .map_err(|e| {
                error!("Unable to load contacts of due reminders: {:?}", e);
                UseCaseError::StorageError
            })?
            .into_iter()
            .map(|c| (c.id.clone(), c))
            .collect();

        for reminder in &due {
            let contact = contacts
                .get(&reminder.contact_id)
                .filter(|c| c.is_owned_by(&reminder.user_id));
            match dispatch_reminder(reminder, contact, now, ctx).await {
                Outcome::Sent => report.sent += 1,
                Outcome::Failed => report.failed += 1,
                Outcome::Skipped => report.skipped += 1,
            }
        }

        info!(
            "Dispatched {} due reminders: {} sent, {} failed, {} skipped",
            due.len(),
            report.sent,
            report.failed,
            report.skipped
        );
        Ok(report)
    }
}

async fn dispatch_reminder(
    reminder: &Reminder,
    contact: Option<&Contact>,
    now: DateTime<Utc>,
    ctx: &FollowupContext,
) -> Outcome {
    let delivery = match contact {
        Some(contact) => deliver(reminder, contact, now, ctx).await,
        None => Err(DispatchError::ContactNotFound),
    };

    let (status, history_status, details) = match delivery {
        Ok(details) => (ReminderStatus::Sent, HistoryStatus::Delivered, details),
        Err(e) => {
            warn!("Failed to dispatch reminder {}: {}", reminder.id, e);
            (ReminderStatus::Failed, HistoryStatus::Failed, e.to_string())
        }
    };

    match ctx
        .repos
        .reminders
        .update_status(&reminder.id, ReminderStatus::Pending, status, now)
        .await
    {
        Ok(true) => (),
        Ok(false) => {
            info!(
                "Reminder {} is no longer pending, not marking it {}",
                reminder.id, status
            );
            return Outcome::Skipped;
        }
        Err(e) => {
            error!("Unable to mark reminder {} as {}: {:?}", reminder.id, status, e);
            return Outcome::Failed;
        }
    }

    let contact_name = contact
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "Unknown contact".into());
    let log = HistoryLog::new(
        reminder.user_id.clone(),
        reminder.id.clone(),
        contact_name,
        HistoryChannel::from(reminder.channel),
        history_status,
        details,
        now,
    );
    if let Err(e) = ctx.repos.history_logs.insert(&log).await {
        error!("Unable to write history log for reminder {}: {:?}", reminder.id, e);
    }

    if status != ReminderStatus::Sent {
        return Outcome::Failed;
    }
    if let Some(contact) = contact {
        if let Err(e) = ctx
            .repos
            .contacts
            .update_last_contacted(&contact.id, now)
            .await
        {
            error!("Unable to update last contacted of {}: {:?}", contact.id, e);
        }
    }
    Outcome::Sent
}

/// Hands the `Reminder` to its channel and returns a description of the delivery
async fn deliver(
    reminder: &Reminder,
    contact: &Contact,
    now: DateTime<Utc>,
    ctx: &FollowupContext,
) -> Result<String, DispatchError> {
    match reminder.channel {
        ReminderChannel::Email => {
            let mail = MailMessage::reminder_email(
                reminder.id.clone(),
                contact.email.clone(),
                &contact.name,
                reminder.message.clone(),
                now,
            );
            ctx.repos
                .mails
                .insert(&mail)
                .await
                .map_err(DispatchError::MailQueue)?;
            Ok(format!("Queued email to {}", contact.email))
        }
        ReminderChannel::Sms | ReminderChannel::WhatsApp => {
            let message = TextMessage {
                channel: reminder.channel,
                to: contact.phone.clone(),
                body: reminder.message.clone(),
            };
            ctx.text_messages
                .send(&message)
                .await
                .map_err(|e| DispatchError::TextMessage(reminder.channel, e))?;
            Ok(format!("Sent {} message to {}", reminder.channel, contact.phone))
        }
    }
}
