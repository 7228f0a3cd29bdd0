use leptos::*;

/// The star row of the contact form.
///
/// Hovering highlights stars transiently; only a click changes the
/// selected rating.
#[component]
pub fn StarRating(rating: RwSignal<u8>, hover_rating: RwSignal<u8>) -> impl IntoView {
    view! {
      <div class="star-rating">
        {(1..=5u8).map(|star| view! {
          <button
            type="button"
            class:highlighted=move || {
                let shown = if hover_rating.get() > 0 {
                    hover_rating.get()
                } else {
                    rating.get()
                };
                shown >= star
            }
            on:click=move |_| rating.set(star)
            on:mouseenter=move |_| hover_rating.set(star)
            on:mouseleave=move |_| hover_rating.set(0)
          >
            "★"
          </button>
        }).collect_view()}
      </div>
    }
}
