//! Landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes;
use crate::state::session::Session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<Session>();

    let greeting = move || match session.username() {
        Some(name) => format!("Welcome back, {name}."),
        None => "Share files, text and links.".to_owned(),
    };

    view! {
        <div class="home-page">
            <h1>"Simple Share"</h1>
            <p class="home-page__greeting">{greeting}</p>
            <Show when=move || session.logged_in()>
                <div class="home-page__actions">
                    <A href=routes::CREATE attr:class="button">"Create a share"</A>
                    <A href=routes::SHARES attr:class="button button--secondary">"My shares"</A>
                </div>
            </Show>
            <Show when=move || session.loaded() && !session.logged_in() && !session.auth_disabled()>
                <p>"Log in to create and manage shares."</p>
                <A href=routes::LOGIN attr:class="button">"Log in"</A>
            </Show>
            <Show when=move || session.auth_disabled()>
                <p class="home-page__notice">"Authentication is not configured on this server."</p>
            </Show>
        </div>
    }
}
