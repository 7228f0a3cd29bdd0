use super::prelude::*;
use crate::gateways::chat::ChatGateway;

/// The reply presented whenever the chat backend fails.
pub const FALLBACK_CHAT_REPLY: &str = "Sorry, something went wrong. Please try again later.";

/// Forwards a single free-text message to the chat backend.
///
/// Any gateway failure yields the fixed fallback reply. Past this
/// boundary the operation only fails for locally rejected input.
pub fn relay_chat_message(gateway: &dyn ChatGateway, message: &str) -> Result<String> {
    let message = message.trim();
    if message.is_empty() {
        return Err(Error::EmptyChatMessage);
    }
    match gateway.send_message(message) {
        Ok(reply) => Ok(reply),
        Err(err) => {
            log::warn!("Could not relay chat message: {err}");
            Ok(FALLBACK_CHAT_REPLY.to_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateways::chat::ChatGatewayError;

    struct EchoChatGW;

    impl ChatGateway for EchoChatGW {
        fn send_message(&self, message: &str) -> std::result::Result<String, ChatGatewayError> {
            Ok(format!("echo: {message}"))
        }
    }

    struct BrokenChatGW;

    impl ChatGateway for BrokenChatGW {
        fn send_message(&self, _: &str) -> std::result::Result<String, ChatGatewayError> {
            Err(ChatGatewayError::ErrorStatus(500))
        }
    }

    #[test]
    fn relay_message() {
        let reply = relay_chat_message(&EchoChatGW, "hello").unwrap();
        assert_eq!(reply, "echo: hello");
    }

    #[test]
    fn reject_empty_message() {
        assert!(matches!(
            relay_chat_message(&EchoChatGW, "   "),
            Err(Error::EmptyChatMessage)
        ));
    }

    #[test]
    fn fall_back_on_gateway_failure() {
        let reply = relay_chat_message(&BrokenChatGW, "hello").unwrap();
        assert_eq!(reply, FALLBACK_CHAT_REPLY);
    }
}
