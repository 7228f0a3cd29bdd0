use leptos::*;

use crate::theme::Theme;

#[component]
pub fn NavBar(theme: RwSignal<Theme>) -> impl IntoView {
    view! {
      <nav class="navbar">
        <button
          class="theme-toggle"
          on:click=move |_| theme.update(|t| *t = t.toggled())
        >
          {move || match theme.get() {
              Theme::Dark => "☀️ Light",
              Theme::Light => "🌙 Dark",
          }}
        </button>
        <ul class="nav-sections">
          <li><a href="#home">"Home"</a></li>
          <li><a href="#skills">"Skills"</a></li>
          <li><a href="#portfolio">"Portfolio"</a></li>
          <li><a href="#contact">"Contact"</a></li>
        </ul>
      </nav>
    }
}
