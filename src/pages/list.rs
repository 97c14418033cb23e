//! Paged list of the current user's shares.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::api;
use crate::net::types::Share;
use crate::routes;
use crate::util::datetime::iso_to_relative_now;
use crate::util::filesize::format_size;

#[component]
pub fn ListPage() -> impl IntoView {
    let shares = RwSignal::new(Vec::<Share>::new());
    let cursor = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let load_page = move |from: Option<String>| {
        busy.set(true);
        leptos::task::spawn_local(async move {
            match api::list_shares(from.as_deref()).await {
                Ok(page) => {
                    cursor.set(page.next_cursor().map(str::to_owned));
                    shares.update(|list| list.extend(page.shares));
                    error.set(None);
                }
                Err(e) => {
                    log::warn!("failed to list shares: {e}");
                    error.set(Some(e.to_string()));
                }
            }
            busy.set(false);
        });
    };

    load_page(None);

    let rows = move || {
        shares
            .get()
            .into_iter()
            .map(|share| {
                let created = share.created_at.as_deref().map(iso_to_relative_now).unwrap_or_default();
                view! {
                    <tr>
                        <td><A href=routes::share_path(&share.name)>{share.name.clone()}</A></td>
                        <td>{share.kind.label()}</td>
                        <td>{format_size(share.size)}</td>
                        <td>{created}</td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="list-page">
            <h1>"My shares"</h1>
            <table class="share-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Type"</th>
                        <th>"Size"</th>
                        <th>"Created"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <Show when=move || !busy.get() && shares.with(Vec::is_empty) && error.get().is_none()>
                <p class="list-page__empty">"No shares yet."</p>
            </Show>
            <Show when=move || error.get().is_some()>
                <p class="share-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || cursor.get().is_some()>
                <button
                    class="list-page__more"
                    disabled=move || busy.get()
                    on:click=move |_| load_page(cursor.get_untracked())
                >
                    "Load more"
                </button>
            </Show>
        </div>
    }
}
