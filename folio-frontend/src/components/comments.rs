use leptos::*;

use folio_boundary::CommentList;

#[component]
pub fn Comments(comments: RwSignal<CommentList>) -> impl IntoView {
    view! {
      <Show when=move || !comments.get().comments.is_empty()>
        <div class="comments">
          <h3>"💬 Comments"</h3>
          <p class="average-rating">
            "⭐ Average Rating: "
            {move || format!("{:.1}", comments.get().average_rating)}
            " / 5"
          </p>
          <For
            each=move || comments.get().comments
            key=|comment| (comment.name.clone(), comment.created_at.clone())
            let:comment
          >
            <div class="comment">
              <p class="comment-author">
                {comment.name.clone()}
                " "
                <span class="comment-date">"(" {comment.created_at.clone()} ")"</span>
              </p>
              <p class="comment-message">{comment.message.clone()}</p>
              {comment.rating.map(|r| view! {
                <p class="comment-rating">"⭐ " {r} " / 5"</p>
              })}
            </div>
          </For>
        </div>
      </Show>
    }
}
