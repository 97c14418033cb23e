//! Content URLs for shares.
//!
//! Builds `/api/shares/{name}/content` and
//! `/api/shares/{name}/files/{id}[/{variant}]`, appending `?password=` when a
//! password is cached for the share. Pure: the result depends only on the
//! arguments and the cache snapshot passed in.

#[cfg(test)]
#[path = "share_url_test.rs"]
mod share_url_test;

use crate::config;
use crate::net::types::Share;
use crate::state::passwords::SharePasswords;

/// Sub-resource of a single file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UrlVariant {
    /// Detected content type.
    Type,
    /// Rendered preview.
    Preview,
}

impl UrlVariant {
    pub fn segment(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Preview => "preview",
        }
    }
}

/// Build the request path for a share's content.
///
/// An empty `file_id` is treated like `None`.
pub fn build_url(
    share_name: &str,
    file_id: Option<&str>,
    variant: Option<UrlVariant>,
    passwords: &SharePasswords,
) -> String {
    let mut url = config::api_path(&format!("/shares/{share_name}"));
    match file_id.filter(|id| !id.is_empty()) {
        Some(id) => {
            url.push_str("/files/");
            url.push_str(id);
        }
        None => url.push_str("/content"),
    }
    if let Some(variant) = variant {
        url.push('/');
        url.push_str(variant.segment());
    }
    if let Some(password) = passwords.get(share_name) {
        url.push_str("?password=");
        url.push_str(&urlencoding::encode(password));
    }
    url
}

pub fn content_url(share: &Share, file_id: Option<&str>, passwords: &SharePasswords) -> String {
    build_url(&share.name, file_id, None, passwords)
}

/// Sniffed file type; `file_id` of `None` addresses a single-file share.
pub fn content_type_url(share: &Share, file_id: Option<&str>, passwords: &SharePasswords) -> String {
    build_url(&share.name, file_id, Some(UrlVariant::Type), passwords)
}

pub fn preview_url(share: &Share, file_id: Option<&str>, passwords: &SharePasswords) -> String {
    build_url(&share.name, file_id, Some(UrlVariant::Preview), passwords)
}
