use leptos::*;

mod api;
mod components;
mod pages;
mod theme;

use components::*;
use pages::*;
use theme::Theme;

const DEFAULT_API_URL: &str = "/api";

#[component]
fn App() -> impl IntoView {
    let api = api::PublicApi::new(DEFAULT_API_URL.to_string());

    // -- signals -- //
    let theme = create_rw_signal(Theme::load());

    // -- effects -- //
    create_effect(move |_| {
        let theme = theme.get();
        theme.store();
        theme.apply_to_document();
    });

    view! {
      <NavBar theme />
      <main>
        <Home api />
      </main>
    }
}

fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    log::info!("Start web application");
    mount_to_body(|| view! { <App /> });
}
