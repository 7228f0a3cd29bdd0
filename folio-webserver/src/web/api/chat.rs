use anyhow::anyhow;

use super::*;

use folio_boundary::{ChatMessage, ChatReply};

#[post("/chat", format = "application/json", data = "<data>")]
pub async fn post_chat_message(
    gateway: &State<Chat>,
    data: JsonResult<'_, ChatMessage>,
) -> Result<ChatReply> {
    let ChatMessage { message } = data?.into_inner();
    let gateway = gateway.inner().0.clone();
    // The gateway blocks on the upstream request.
    let reply = rocket::tokio::task::spawn_blocking(move || {
        usecases::relay_chat_message(&*gateway, &message)
    })
    .await
    .map_err(|err| anyhow!(err))??;
    Ok(Json(ChatReply { reply }))
}
