use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatGatewayError {
    #[error("The chat backend could not be reached")]
    Transport(#[source] anyhow::Error),
    #[error("The chat backend responded with status {0}")]
    ErrorStatus(u16),
}

/// Boundary to the opaque chat-reply backend.
pub trait ChatGateway {
    fn send_message(&self, message: &str) -> Result<String, ChatGatewayError>;
}
