//! Top navigation bar.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes;
use crate::state::session::Session;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let session = expect_context::<Session>();

    let show_login = move || {
        let state = session.state();
        state.loaded && !state.auth_disabled && !state.logged_in()
    };

    view! {
        <header class="site-header">
            <A href=routes::HOME attr:class="site-header__brand">"Simple Share"</A>
            <nav class="site-header__nav">
                <Show when=move || session.logged_in()>
                    <A href=routes::CREATE>"New share"</A>
                    <A href=routes::SHARES>"My shares"</A>
                    <span class="site-header__user">{move || session.username().unwrap_or_default()}</span>
                </Show>
                <Show when=show_login>
                    <A href=routes::LOGIN>"Log in"</A>
                </Show>
            </nav>
        </header>
    }
}
