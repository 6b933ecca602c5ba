use followup_domain::ReminderChannel;
use tracing::info;

#[derive(Debug, Clone, PartialEq)]
pub struct TextMessage {
    pub channel: ReminderChannel,
    pub to: String,
    pub body: String,
}

/// Delivers `SMS` and `WhatsApp` reminders
#[async_trait::async_trait]
pub trait ITextMessageGateway: Send + Sync {
    async fn send(&self, message: &TextMessage) -> anyhow::Result<()>;
}

/// Gateway used until a provider is integrated. It only records the message.
pub struct LoggingTextMessageGateway {}

#[async_trait::async_trait]
impl ITextMessageGateway for LoggingTextMessageGateway {
    async fn send(&self, message: &TextMessage) -> anyhow::Result<()> {
        info!(
            channel = message.channel.as_str(),
            to = %message.to,
            "Sending {} message: {}",
            message.channel,
            message.body
        );
        Ok(())
    }
}
