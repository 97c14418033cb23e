//! Single share page: metadata, password prompt, and content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route. Metadata is requested with any cached password; a 401
//! switches to the password prompt, whose submission caches the password and
//! retries. Content links are built afterwards from the same cache.

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::share_content::ShareContent;
use crate::net::api::{self, ApiError};
use crate::net::types::Share;
use crate::state::passwords::SharePasswords;
use crate::util::forms::validate_password_input;

/// What the page currently shows.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum ShareStage {
    Loading,
    /// Password required; carries a message when a cached one was rejected.
    NeedsPassword(Option<String>),
    Ready(Share),
    Failed(String),
}

/// Map a metadata failure to the page stage.
pub(crate) fn stage_for_error(err: &ApiError, sent_password: bool) -> ShareStage {
    if err.is_unauthorized() {
        let hint = sent_password.then(|| "Incorrect password.".to_owned());
        return ShareStage::NeedsPassword(hint);
    }
    if err.is_not_found() {
        return ShareStage::Failed("This share does not exist or has expired.".to_owned());
    }
    ShareStage::Failed(err.to_string())
}

#[component]
pub fn SharePage() -> impl IntoView {
    let passwords = expect_context::<RwSignal<SharePasswords>>();
    let params = use_params_map();
    let name = Memo::new(move |_| params.read().get("name").unwrap_or_default());

    let stage = RwSignal::new(ShareStage::Loading);
    let reload = RwSignal::new(0_u32);
    let password_input = RwSignal::new(String::new());
    let prompt_error = RwSignal::new(None::<&'static str>);

    Effect::new(move || {
        reload.track();
        let name = name.get();
        if name.is_empty() {
            return;
        }
        let password = passwords.with_untracked(|p| p.get(&name).map(str::to_owned));
        stage.set(ShareStage::Loading);
        leptos::task::spawn_local(async move {
            let next = match api::fetch_share(&name, password.as_deref()).await {
                Ok(share) => ShareStage::Ready(share),
                Err(e) => {
                    log::warn!("failed to load share {name}: {e}");
                    if e.is_unauthorized() && password.is_some() {
                        passwords.update(|p| p.forget(&name));
                    }
                    stage_for_error(&e, password.is_some())
                }
            };
            stage.set(next);
        });
    });

    let on_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_password_input(&password_input.get()) {
            Ok(password) => {
                prompt_error.set(None);
                passwords.update(|p| p.remember(&name.get_untracked(), &password));
                password_input.set(String::new());
                reload.update(|n| *n += 1);
            }
            Err(message) => prompt_error.set(Some(message)),
        }
    };

    let body = move || match stage.get() {
        ShareStage::Loading => view! { <p class="share-loading">"Loading..."</p> }.into_any(),
        ShareStage::Failed(message) => view! { <p class="share-error">{message}</p> }.into_any(),
        ShareStage::Ready(share) => view! { <ShareContent share=share/> }.into_any(),
        ShareStage::NeedsPassword(hint) => view! {
            <form class="share-password" on:submit=on_password>
                <p>"This share is password protected."</p>
                {hint.map(|hint| view! { <p class="share-error">{hint}</p> })}
                <input
                    type="password"
                    autocomplete="off"
                    prop:value=move || password_input.get()
                    on:input=move |ev| password_input.set(event_target_value(&ev))
                />
                <button type="submit">"Unlock"</button>
                <Show when=move || prompt_error.get().is_some()>
                    <p class="share-error">{move || prompt_error.get().unwrap_or_default()}</p>
                </Show>
            </form>
        }
        .into_any(),
    };

    view! {
        <div class="share-page">
            <h1>{move || name.get()}</h1>
            {body}
        </div>
    }
}
