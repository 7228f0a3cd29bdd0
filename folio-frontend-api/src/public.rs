use gloo_net::http::Request;

use folio_boundary::{ChatMessage, ChatReply, CommentList, NewComment};

use crate::{into_json, Result};

/// Public folio API
#[derive(Debug, Clone)]
pub struct PublicApi {
    url: String,
}

impl PublicApi {
    #[must_use]
    pub const fn new(url: String) -> Self {
        Self { url }
    }

    pub async fn comments(&self) -> Result<CommentList> {
        let url = format!("{}/comments", self.url);
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }

    pub async fn create_comment(&self, new_comment: &NewComment) -> Result<()> {
        let url = format!("{}/comments", self.url);
        let response = Request::post(&url).json(new_comment)?.send().await?;
        into_json(response).await
    }

    pub async fn send_chat_message(&self, message: &ChatMessage) -> Result<ChatReply> {
        let url = format!("{}/chat", self.url);
        let response = Request::post(&url).json(message)?.send().await?;
        into_json(response).await
    }
}
