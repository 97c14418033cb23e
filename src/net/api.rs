//! REST API helpers for communicating with the backend.
//!
//! Browser (`csr`): real HTTP calls via `gloo-net`.
//! Native builds (tests): every call returns [`ApiError::Unavailable`]
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`ApiError::Status`] carrying the backend's
//! `{"message": ...}` text so pages can show it inline. Callers that must
//! never fail (the session store) fold the error into state instead.
//!
//! UPLOADS
//! =======
//! A file is uploaded before the share exists: start an upload, post each
//! part planned by [`crate::util::upload::plan_parts`], then complete it.
//! The resulting id and file name go into the share request.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "csr")]
use super::types::{CreateShareResponse, ShareFileUpload};
use super::types::{CreateShareRequest, FileType, Share, ShareListPage, UploadStart, Userinfo};
#[cfg(any(test, feature = "csr"))]
use crate::config;

/// Header the backend reads a share password from on metadata requests.
pub const SHARE_PASSWORD_HEADER: &str = "X-Share-Password";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("{0}")]
    Rejected(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Build a status error from a response body, preferring the backend's
    /// JSON `message` field.
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Status { status, message: error_message_from_body(status, body) }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

fn error_message_from_body(status: u16, body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: String,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if !parsed.message.is_empty() {
            return parsed.message;
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() { format!("request failed with status {status}") } else { trimmed.to_owned() }
}

#[cfg(any(test, feature = "csr"))]
fn userinfo_endpoint() -> String {
    config::api_path("/auth/userinfo")
}

#[cfg(any(test, feature = "csr"))]
fn share_endpoint(name: &str) -> String {
    config::api_path(&format!("/shares/{name}"))
}

#[cfg(any(test, feature = "csr"))]
fn shares_endpoint() -> String {
    config::api_path("/shares")
}

#[cfg(any(test, feature = "csr"))]
fn upload_endpoint() -> String {
    config::api_path("/upload")
}

#[cfg(any(test, feature = "csr"))]
fn upload_part_endpoint(id: &str, part: u32) -> String {
    config::api_path(&format!("/upload/{id}/{part}"))
}

#[cfg(any(test, feature = "csr"))]
fn upload_complete_endpoint(id: &str) -> String {
    config::api_path(&format!("/upload/{id}/complete"))
}

#[cfg(feature = "csr")]
async fn expect_ok(resp: gloo_net::http::Response) -> Result<(), ApiError> {
    if resp.ok() {
        return Ok(());
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::from_status(status, &body))
}

#[cfg(feature = "csr")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::from_status(status, &body));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "csr")]
async fn read_text(resp: gloo_net::http::Response) -> Result<String, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::from_status(status, &body));
    }
    resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch the current identity from `GET /api/auth/userinfo`.
///
/// # Errors
///
/// A 404 status means authentication is not configured on the backend; any
/// other failure means the identity is unknown.
pub async fn fetch_userinfo() -> Result<Userinfo, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&userinfo_endpoint())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch share metadata from `GET /api/shares/{name}`.
///
/// `password` is sent in [`SHARE_PASSWORD_HEADER`] when present.
///
/// # Errors
///
/// Returns a 401 status error when the share needs a (different) password.
pub async fn fetch_share(name: &str, password: Option<&str>) -> Result<Share, ApiError> {
    #[cfg(feature = "csr")]
    {
        let mut req = gloo_net::http::Request::get(&share_endpoint(name));
        if let Some(password) = password.filter(|p| !p.is_empty()) {
            req = req.header(SHARE_PASSWORD_HEADER, password);
        }
        let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (name, password);
        Err(ApiError::Unavailable)
    }
}

/// List the caller's shares from `GET /api/shares`, continuing at `cursor`.
///
/// # Errors
///
/// Returns an error if the request fails or the caller is not logged in.
pub async fn list_shares(cursor: Option<&str>) -> Result<ShareListPage, ApiError> {
    #[cfg(feature = "csr")]
    {
        let mut req = gloo_net::http::Request::get(&shares_endpoint());
        if let Some(cursor) = cursor.filter(|c| !c.is_empty()) {
            req = req.query([("cursor", cursor)]);
        }
        let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = cursor;
        Err(ApiError::Unavailable)
    }
}

/// Create a share via `POST /api/shares` and return its final name.
///
/// # Errors
///
/// Returns the backend's validation message on a 4xx status.
pub async fn create_share(request: &CreateShareRequest) -> Result<String, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&shares_endpoint())
            .json(request)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let body: CreateShareResponse = read_json(resp).await?;
        Ok(body.name)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Fetch a content URL (built by `util::share_url`) as text.
///
/// Used for text and URL shares and for directory listings.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not text.
pub async fn fetch_text(url: &str) -> Result<String, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_text(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the sniffed type of a file from a content type URL (built by
/// `util::share_url::content_type_url`).
///
/// # Errors
///
/// Returns an error if the request fails or the body is not a type label.
pub async fn fetch_file_type(url: &str) -> Result<FileType, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
        Err(ApiError::Unavailable)
    }
}

/// Start an upload via `POST /api/upload`.
///
/// # Errors
///
/// Returns an error if the request fails or the caller may not upload.
pub async fn upload_start() -> Result<UploadStart, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&upload_endpoint())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Send one part of upload `id` via `POST /api/upload/{id}/{part}`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects the part.
#[cfg(feature = "csr")]
pub async fn upload_part(id: &str, part: u32, chunk: web_sys::Blob) -> Result<(), ApiError> {
    let resp = gloo_net::http::Request::post(&upload_part_endpoint(id, part))
        .body(chunk)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    expect_ok(resp).await
}

/// Finish upload `id` via `POST /api/upload/{id}/complete`.
///
/// # Errors
///
/// Returns an error if the request fails or parts are missing.
pub async fn upload_complete(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&upload_complete_endpoint(id))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        expect_ok(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Upload a picked file part by part and return the reference a file share
/// request carries.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] for files that cannot be split into parts,
/// otherwise the first failing request's error.
#[cfg(feature = "csr")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub async fn upload_file(file: &web_sys::File) -> Result<ShareFileUpload, ApiError> {
    let start = upload_start().await?;
    let size = file.size() as u64;
    let parts = crate::util::upload::plan_parts(size, start.part_size)
        .map_err(|msg| ApiError::Rejected(msg.to_owned()))?;
    log::debug!("uploading {} ({size} bytes) in {} parts", file.name(), parts.len());
    for part in parts {
        let chunk = file
            .slice_with_f64_and_f64(part.start as f64, part.end as f64)
            .map_err(|_| ApiError::Rejected(format!("could not read {}", file.name())))?;
        upload_part(&start.id, part.number, chunk).await?;
    }
    upload_complete(&start.id).await?;
    Ok(ShareFileUpload { id: start.id, path: file.name() })
}
