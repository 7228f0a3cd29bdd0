use leptos::*;

use folio_boundary::ChatMessage;

use crate::api::PublicApi;

/// Shown when the chat relay itself cannot be reached.
const RELAY_UNREACHABLE_REPLY: &str = "Sorry, the chat is unavailable right now.";

#[component]
pub fn Chatbot(api: PublicApi) -> impl IntoView {
    // -- signals -- //
    let (visible, set_visible) = create_signal(false);
    let (message, set_message) = create_signal(String::new());
    let (reply, set_reply) = create_signal(None::<String>);
    let (notice, set_notice) = create_signal(None::<String>);

    // -- actions -- //
    let send = create_action(move |message: &String| {
        let message = message.clone();
        let api = api.clone();
        async move {
            match api.send_chat_message(&ChatMessage { message }).await {
                Ok(chat_reply) => {
                    set_reply.update(|r| *r = Some(chat_reply.reply));
                    set_message.update(|m| m.clear());
                }
                Err(err) => {
                    log::error!("Unable to send chat message: {err}");
                    set_reply.update(|r| *r = Some(RELAY_UNREACHABLE_REPLY.to_string()));
                }
            }
        }
    });

    // -- callbacks -- //
    let on_send = move |_| {
        let msg = message.get();
        if msg.trim().is_empty() {
            set_notice.update(|n| *n = Some("Please type a message first!".to_string()));
            return;
        }
        set_notice.update(|n| *n = None);
        send.dispatch(msg);
    };

    view! {
      <div class="chatbot">
        <button
          class="chatbot-toggle"
          on:click=move |_| set_visible.update(|v| *v = !*v)
        >
          {move || if visible.get() { "Close Chatbot" } else { "Open Chatbot" }}
        </button>
        <Show when=move || visible.get()>
          <h3>"🤖 Chatbot"</h3>
          <input
            type="text"
            placeholder="Write something..."
            prop:value=move || message.get()
            on:input=move |ev| set_message.set(event_target_value(&ev))
          />
          <button class="chatbot-send" on:click=on_send>"Send"</button>
          {move || notice.get().map(|n| view! { <p class="notice">{n}</p> })}
          {move || reply.get().map(|r| view! {
            <p class="chatbot-reply"><strong>"Bot: "</strong>{r}</p>
          })}
        </Show>
      </div>
    }
}
