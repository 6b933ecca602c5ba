use crate::{
    reminder::dispatch_due_reminders::DispatchDueRemindersUseCase, shared::usecase::execute,
};
use actix_web::rt::time::interval;
use followup_infra::FollowupContext;
use std::time::Duration;
use tracing::info;

/// Runs the due-scan right away and then on every interval.
/// The next run only starts after the previous one is finished.
pub fn start_send_reminders_job(ctx: FollowupContext) {
    if !ctx.config.send_reminders_job_enabled {
        info!("The send reminders job is disabled");
        return;
    }

    actix_web::rt::spawn(async move {
        let secs = ctx.config.send_reminders_interval_secs;
        info!("Starting the send reminders job, running every {} seconds", secs);
        let mut interval = interval(Duration::from_secs(secs));
        loop {
            interval.tick().await;
            send_reminders(&ctx).await;
        }
    });
}

async fn send_reminders(ctx: &FollowupContext) {
    let usecase = DispatchDueRemindersUseCase {};
    // Errors are logged by `execute`, the next tick retries
    let _ = execute(usecase, ctx).await;
}
