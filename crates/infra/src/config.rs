use followup_utils::create_random_secret;
use tracing::{info, warn};

const MIN_SEND_REMINDERS_INTERVAL_SECS: u64 = 30;
const MAX_SEND_REMINDERS_INTERVAL_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct Config {
    /// Secret code used to create new `User`s
    pub create_user_secret_code: String,
    /// Port for the application to run on
    pub port: usize,
    /// Seconds between two runs of the due reminders dispatcher
    pub send_reminders_interval_secs: u64,
    /// Whether the due reminders dispatcher should run in this process at all
    pub send_reminders_job_enabled: bool,
    /// Shared secret used by the payment provider to sign webhook payloads.
    /// Signatures are not checked when this is not set.
    pub payment_webhook_secret: Option<String>,
}

impl Config {
    pub fn new() -> Self {
        let create_user_secret_code = match std::env::var("CREATE_USER_SECRET_CODE") {
            Ok(code) => code,
            Err(_) => {
                info!("Did not find CREATE_USER_SECRET_CODE environment variable. Going to create one.");
                let code = create_random_secret(16);
                info!(
                    "Secret code for creating users was generated and set to: {}",
                    code
                );
                code
            }
        };
        let default_port = 5000;
        let port = match std::env::var("PORT") {
            Ok(port) => match port.parse::<usize>() {
                Ok(port) => port,
                Err(_) => {
                    warn!(
                        "The given PORT: {} is not valid, falling back to the default port: {}.",
                        port, default_port
                    );
                    default_port
                }
            },
            Err(_) => default_port,
        };
        let send_reminders_interval_secs = match std::env::var("SEND_REMINDERS_INTERVAL_SECS") {
            Ok(secs) => match secs.parse::<u64>() {
                Ok(secs) => clamp_send_reminders_interval(secs),
                Err(_) => {
                    warn!(
                        "The given SEND_REMINDERS_INTERVAL_SECS: {} is not valid, falling back to {} seconds.",
                        secs, MAX_SEND_REMINDERS_INTERVAL_SECS
                    );
                    MAX_SEND_REMINDERS_INTERVAL_SECS
                }
            },
            Err(_) => MAX_SEND_REMINDERS_INTERVAL_SECS,
        };
        let send_reminders_job_enabled = std::env::var("SEND_REMINDERS_JOB_ENABLED")
            .map(|val| val != "false" && val != "0")
            .unwrap_or(true);
        let payment_webhook_secret = std::env::var("PAYMENT_WEBHOOK_SECRET")
            .ok()
            .filter(|secret| !secret.is_empty());
        if payment_webhook_secret.is_none() {
            warn!("PAYMENT_WEBHOOK_SECRET is not set, payment webhook signatures will not be verified.");
        }

        Self {
            create_user_secret_code,
            port,
            send_reminders_interval_secs,
            send_reminders_job_enabled,
            payment_webhook_secret,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_send_reminders_interval(secs: u64) -> u64 {
    let clamped = secs.clamp(
        MIN_SEND_REMINDERS_INTERVAL_SECS,
        MAX_SEND_REMINDERS_INTERVAL_SECS,
    );
    if clamped != secs {
        warn!(
            "SEND_REMINDERS_INTERVAL_SECS: {} is outside of {}..={}, using {} seconds.",
            secs, MIN_SEND_REMINDERS_INTERVAL_SECS, MAX_SEND_REMINDERS_INTERVAL_SECS, clamped
        );
    }
    clamped
}
