//! Renders the body of a loaded share according to its type.
//!
//! DESIGN
//! ======
//! File and directory shares render links immediately; a file's type is only
//! fetched when its preview is requested, then images, video and audio embed
//! inline while text and documents open the rendered preview.
//! Text and URL shares fetch their body from the content URL once on mount.
//! All URLs come from `util::share_url` so cached passwords ride along.

#[cfg(test)]
#[path = "share_content_test.rs"]
mod share_content_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{FileType, Share, ShareFile, ShareType};
use crate::state::passwords::SharePasswords;
use crate::util::filesize::format_size;
use crate::util::share_url::{content_type_url, content_url, preview_url};

/// How a file is shown once its type is known.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum InlinePreview {
    Image,
    Video,
    Audio,
    /// Open the rendered preview in a new tab.
    Link,
}

fn inline_preview(file_type: FileType) -> Option<InlinePreview> {
    match file_type {
        FileType::Image => Some(InlinePreview::Image),
        FileType::Video => Some(InlinePreview::Video),
        FileType::Audio => Some(InlinePreview::Audio),
        FileType::Text | FileType::Document => Some(InlinePreview::Link),
        FileType::Unknown => None,
    }
}

#[component]
pub fn ShareContent(share: Share) -> impl IntoView {
    let passwords = expect_context::<RwSignal<SharePasswords>>();
    let body = passwords.with_untracked(|p| match share.kind {
        ShareType::Text | ShareType::Url => {
            view! { <RemoteText kind=share.kind url=content_url(&share, None, p)/> }.into_any()
        }
        ShareType::File => {
            let href = content_url(&share, None, p);
            view! {
                <a class="share-download" href=href.clone() rel="external" download="">
                    {format!("Download ({})", format_size(share.size))}
                </a>
                <FilePreview
                    type_url=content_type_url(&share, None, p)
                    content_url=href
                    preview_url=preview_url(&share, None, p)
                />
            }
            .into_any()
        }
        ShareType::Directory => {
            let rows = share
                .file_list()
                .iter()
                .map(|file| file_row(&share, file, p))
                .collect_view();
            view! { <ul class="share-files">{rows}</ul> }.into_any()
        }
    });

    view! {
        <section class="share-content">
            <p class="share-content__meta">{format!("{} · {}", share.kind.label(), format_size(share.size))}</p>
            {body}
        </section>
    }
}

fn file_row(share: &Share, file: &ShareFile, passwords: &SharePasswords) -> impl IntoView + use<> {
    let id = Some(file.id.as_str());
    let href = content_url(share, id, passwords);
    let type_href = content_type_url(share, id, passwords);
    let preview_href = preview_url(share, id, passwords);
    let path = display_path(&file.path);
    let size = file.size.map(format_size).unwrap_or_default();
    view! {
        <li class="share-files__row">
            <a href=href.clone() rel="external" download="">{path}</a>
            <span class="share-files__size">{size}</span>
            <FilePreview type_url=type_href content_url=href preview_url=preview_href/>
        </li>
    }
}

#[component]
fn FilePreview(type_url: String, content_url: String, preview_url: String) -> impl IntoView {
    let requested = RwSignal::new(false);
    let file_type = RwSignal::new(None::<Result<FileType, String>>);

    let on_request = move |_: leptos::ev::MouseEvent| {
        if requested.get_untracked() {
            return;
        }
        requested.set(true);
        let type_url = type_url.clone();
        leptos::task::spawn_local(async move {
            let result = api::fetch_file_type(&type_url).await.map_err(|e| {
                log::warn!("failed to detect file type from {type_url}: {e}");
                e.to_string()
            });
            file_type.set(Some(result));
        });
    };

    move || match file_type.get() {
        None if !requested.get() => view! {
            <button class="share-files__preview" type="button" on:click=on_request.clone()>"Preview"</button>
        }
        .into_any(),
        None => view! { <span class="share-loading">"Checking file type..."</span> }.into_any(),
        Some(Err(message)) => view! { <span class="share-error">{message}</span> }.into_any(),
        Some(Ok(kind)) => match inline_preview(kind) {
            Some(InlinePreview::Image) => {
                view! { <img class="share-preview" src=content_url.clone() alt="preview"/> }.into_any()
            }
            Some(InlinePreview::Video) => {
                view! { <video class="share-preview" src=content_url.clone() controls=true></video> }.into_any()
            }
            Some(InlinePreview::Audio) => {
                view! { <audio class="share-preview" src=content_url.clone() controls=true></audio> }.into_any()
            }
            Some(InlinePreview::Link) => view! {
                <a class="share-files__preview" href=preview_url.clone() rel="external" target="_blank">
                    "Open preview"
                </a>
            }
            .into_any(),
            None => view! { <span class="share-preview-none">"No preview available."</span> }.into_any(),
        },
    }
}

/// Strip leading separators so absolute upload paths read as relative.
fn display_path(path: &str) -> String {
    path.trim_start_matches(['/', '\\']).to_owned()
}

/// Whether a fetched URL-share body can be rendered as a link.
fn is_linkable(body: &str) -> bool {
    let body = body.trim();
    body.starts_with("http://") || body.starts_with("https://")
}

#[component]
fn RemoteText(kind: ShareType, url: String) -> impl IntoView {
    let text = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);

    leptos::task::spawn_local(async move {
        match api::fetch_text(&url).await {
            Ok(body) => text.set(Some(body)),
            Err(e) => {
                log::warn!("failed to load share content from {url}: {e}");
                error.set(Some(e.to_string()));
            }
        }
    });

    move || {
        if let Some(message) = error.get() {
            return view! { <p class="share-error">{message}</p> }.into_any();
        }
        match (kind, text.get()) {
            (_, None) => view! { <p class="share-loading">"Loading..."</p> }.into_any(),
            (ShareType::Url, Some(body)) if is_linkable(&body) => {
                let href = body.trim().to_owned();
                let label = href.clone();
                view! { <a class="share-link" href=href rel="external noopener">{label}</a> }.into_any()
            }
            (_, Some(body)) => view! { <pre class="share-text">{body}</pre> }.into_any(),
        }
    }
}
