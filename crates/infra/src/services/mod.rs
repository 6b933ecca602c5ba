mod text_message;

pub use text_message::{ITextMessageGateway, LoggingTextMessageGateway, TextMessage};
