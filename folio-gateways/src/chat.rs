use std::time::Duration;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

use folio_core::gateways::chat::{ChatGateway, ChatGatewayError};

/// Chat relay against an HTTP backend.
///
/// The backend is opaque: one message in, one reply out. Failures are
/// mapped to gateway errors and never retried.
#[derive(Debug, Clone)]
pub struct HttpChatGateway {
    endpoint_url: String,
    client: reqwest::blocking::Client,
}

#[derive(Debug, Serialize)]
struct ChatRequestBody<'a> {
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatReplyBody {
    reply: String,
}

impl HttpChatGateway {
    pub fn new(endpoint_url: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            endpoint_url,
            client,
        })
    }
}

impl ChatGateway for HttpChatGateway {
    fn send_message(&self, message: &str) -> Result<String, ChatGatewayError> {
        let response = self
            .client
            .post(&self.endpoint_url)
            .json(&ChatRequestBody { message })
            .send()
            .map_err(|err| ChatGatewayError::Transport(anyhow!(err)))?;
        if !response.status().is_success() {
            log::debug!(
                "Chat backend at {} responded with {}",
                self.endpoint_url,
                response.status()
            );
            return Err(ChatGatewayError::ErrorStatus(response.status().as_u16()));
        }
        let body: ChatReplyBody = response
            .json()
            .map_err(|err| ChatGatewayError::Transport(anyhow!(err)))?;
        Ok(body.reply)
    }
}
