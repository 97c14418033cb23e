//! Wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Shares are read-only
//! projections; nothing here is mutated after decoding.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Identity returned by `GET /api/auth/userinfo`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Userinfo {
    /// OIDC subject; empty means "not logged in".
    pub subject: String,
    #[serde(default)]
    pub username: String,
}

/// Kind of content a share holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareType {
    File,
    Directory,
    Text,
    Url,
}

impl ShareType {
    pub fn label(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Directory => "directory",
            Self::Text => "text",
            Self::Url => "url",
        }
    }
}

/// A published unit of content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Share {
    #[serde(rename = "type")]
    pub kind: ShareType,
    /// Unique share identifier, also the URL segment.
    pub name: String,
    /// Hashed password; only present when the backend chooses to expose it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Expiry in days; absent or 0 means never.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<u32>,
    #[serde(default)]
    pub size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<ShareFile>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<ShareCreator>,
}

impl Share {
    /// Files of a directory share, empty for every other kind.
    pub fn file_list(&self) -> &[ShareFile] {
        self.files.as_deref().unwrap_or_default()
    }
}

/// One entry of a directory share.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareFile {
    pub id: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareCreator {
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// Sniffed kind of a stored file, from the content `/type` endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Text,
    Document,
    Image,
    Video,
    Audio,
    #[serde(other)]
    Unknown,
}

/// Page of shares from `GET /api/shares`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ShareListPage {
    #[serde(rename = "data", default)]
    pub shares: Vec<Share>,
    /// Opaque cursor for the next page; empty when exhausted.
    #[serde(default)]
    pub cursor: String,
}

impl ShareListPage {
    pub fn next_cursor(&self) -> Option<&str> {
        (!self.cursor.is_empty()).then_some(self.cursor.as_str())
    }
}

/// Response of `POST /api/upload`: a fresh upload id and the part size the
/// file must be split into.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadStart {
    pub id: String,
    pub part_size: u64,
}

/// Uploaded file reference attached to a file share request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareFileUpload {
    pub id: String,
    pub path: String,
}

/// Body of `POST /api/shares`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShareRequest {
    #[serde(rename = "type")]
    pub kind: ShareType,
    pub name: String,
    pub name_random: bool,
    pub name_random_length: u32,
    pub password: String,
    /// Days until expiry; 0 means never.
    pub expiry: u32,
    pub text: String,
    pub files: Vec<ShareFileUpload>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CreateShareResponse {
    pub name: String,
}
