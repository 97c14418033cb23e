//! Create page for text, URL and file shares.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded route: only reachable with a loaded identity. On success the
//! chosen password is cached for the new share name so the share page opens
//! without prompting, then the browser moves to that share.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::types::ShareType;
use crate::routes;
use crate::state::passwords::SharePasswords;
use crate::util::forms::{
    EXPIRY_CHOICES, RANDOM_NAME_LENGTHS, ShareForm, expiry_label, kind_from_choice, validate_share_form,
};

#[component]
pub fn CreatePage() -> impl IntoView {
    let passwords = expect_context::<RwSignal<SharePasswords>>();
    let navigate = use_navigate();

    let form = RwSignal::new(ShareForm::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let uploading = RwSignal::new(false);

    // Picked files upload right away, one after another; the share request
    // only carries the finished upload ids.
    let on_files = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast as _;

            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            let Some(list) = input.files() else {
                return;
            };
            let picked: Vec<web_sys::File> = (0..list.length()).filter_map(|i| list.get(i)).collect();
            if picked.is_empty() {
                return;
            }
            uploading.set(true);
            leptos::task::spawn_local(async move {
                for file in picked {
                    info.set(format!("Uploading {}...", file.name()));
                    match api::upload_file(&file).await {
                        Ok(uploaded) => form.update(|f| f.files.push(uploaded)),
                        Err(e) => {
                            log::warn!("upload of {} failed: {e}", file.name());
                            info.set(format!("Could not upload {}: {e}", file.name()));
                            uploading.set(false);
                            return;
                        }
                    }
                }
                info.set(String::new());
                uploading.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = ev;
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() || uploading.get() {
            return;
        }
        let request = match validate_share_form(&form.get()) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating share...".to_owned());

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::create_share(&request).await {
                Ok(name) => {
                    log::info!("created {} share {name}", request.kind.label());
                    if !request.password.is_empty() {
                        passwords.update(|p| p.remember(&name, &request.password));
                    }
                    navigate(&routes::share_path(&name), NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("share creation failed: {e}");
                    info.set(format!("Could not create share: {e}"));
                    busy.set(false);
                }
            }
        });
    };

    let kind = move || form.with(|f| f.kind);

    view! {
        <div class="create-page">
            <h1>"New share"</h1>
            <form class="create-form" on:submit=on_submit>
                <label class="create-form__field">
                    "Type"
                    <select on:change=move |ev| {
                        let kind = kind_from_choice(&event_target_value(&ev));
                        form.update(|f| f.kind = kind);
                    }>
                        <option value="text" selected=move || kind() == ShareType::Text>"Text"</option>
                        <option value="url" selected=move || kind() == ShareType::Url>"URL"</option>
                        <option value="file" selected=move || kind() == ShareType::File>"Files"</option>
                    </select>
                </label>

                {move || match kind() {
                    ShareType::Url => {
                        view! {
                            <label class="create-form__field">
                                "URL"
                                <input
                                    type="url"
                                    placeholder="https://"
                                    prop:value=move || form.with(|f| f.text.clone())
                                    on:input=move |ev| form.update(|f| f.text = event_target_value(&ev))
                                />
                            </label>
                        }
                            .into_any()
                    }
                    ShareType::File | ShareType::Directory => {
                        view! {
                            <label class="create-form__field">
                                "Files"
                                <input type="file" multiple=true disabled=move || uploading.get() on:change=on_files />
                            </label>
                            <ul class="create-form__uploads">
                                {move || {
                                    form.with(|f| {
                                        f.files
                                            .iter()
                                            .map(|file| view! { <li>{file.path.clone()}</li> })
                                            .collect_view()
                                    })
                                }}
                            </ul>
                        }
                            .into_any()
                    }
                    ShareType::Text => {
                        view! {
                            <label class="create-form__field">
                                "Text"
                                <textarea
                                    rows="8"
                                    prop:value=move || form.with(|f| f.text.clone())
                                    on:input=move |ev| form.update(|f| f.text = event_target_value(&ev))
                                ></textarea>
                            </label>
                        }
                            .into_any()
                    }
                }}

                <label class="create-form__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.name_random)
                        on:change=move |ev| form.update(|f| f.name_random = event_target_checked(&ev))
                    />
                    "Random name"
                </label>
                <Show
                    when=move || form.with(|f| f.name_random)
                    fallback=move || {
                        view! {
                            <label class="create-form__field">
                                "Name"
                                <input
                                    type="text"
                                    maxlength="64"
                                    prop:value=move || form.with(|f| f.name.clone())
                                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                                />
                            </label>
                        }
                    }
                >
                    <label class="create-form__field">
                        "Name length"
                        <input
                            type="number"
                            min=RANDOM_NAME_LENGTHS.start().to_string()
                            max=RANDOM_NAME_LENGTHS.end().to_string()
                            prop:value=move || form.with(|f| f.name_random_length.to_string())
                            on:input=move |ev| {
                                if let Ok(length) = event_target_value(&ev).parse() {
                                    form.update(|f| f.name_random_length = length);
                                }
                            }
                        />
                    </label>
                </Show>

                <label class="create-form__field">
                    "Password (optional)"
                    <input
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                </label>

                <label class="create-form__field">
                    "Expires"
                    <select on:change=move |ev| {
                        if let Ok(days) = event_target_value(&ev).parse() {
                            form.update(|f| f.expiry = days);
                        }
                    }>
                        {EXPIRY_CHOICES
                            .into_iter()
                            .map(|days| {
                                view! {
                                    <option value=days.to_string() selected=move || form.with(|f| f.expiry == days)>
                                        {expiry_label(days)}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>

                <button class="create-form__submit" type="submit" disabled=move || busy.get() || uploading.get()>
                    "Create"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="create-message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
