//! Login page handing off to the backend's OIDC flow.

use leptos::prelude::*;

use crate::config::LOGIN_URL;
use crate::state::session::Session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Log in"</h1>
                <Show
                    when=move || !session.auth_disabled()
                    fallback=|| view! { <p class="login-message">"Authentication is not configured on this server."</p> }
                >
                    <Show
                        when=move || !session.logged_in()
                        fallback=move || {
                            view! {
                                <p class="login-message">
                                    {move || format!("Signed in as {}.", session.username().unwrap_or_default())}
                                </p>
                            }
                        }
                    >
                        <a class="login-button" href=LOGIN_URL rel="external">"Continue with single sign-on"</a>
                    </Show>
                </Show>
            </div>
        </div>
    }
}
