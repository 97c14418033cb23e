//! Input validation for the create-share and share-password forms.
//!
//! Rules mirror what the backend enforces so users get feedback before a
//! round-trip; the backend stays authoritative.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::types::{CreateShareRequest, ShareFileUpload, ShareType};

/// Allowed expiry choices in days; 0 means never.
pub const EXPIRY_CHOICES: [u32; 4] = [0, 1, 3, 7];
pub const RANDOM_NAME_LENGTHS: std::ops::RangeInclusive<u32> = 4..=32;
pub const PASSWORD_MAX_BYTES: usize = 72;
/// Most files one share may hold.
pub const MAX_SHARE_FILES: usize = 100;

/// Draft of a text, URL or file share.
///
/// `files` holds uploads that already completed; more than one file makes
/// the backend store a directory share.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareForm {
    pub kind: ShareType,
    pub name: String,
    pub name_random: bool,
    pub name_random_length: u32,
    pub password: String,
    pub expiry: u32,
    pub text: String,
    pub files: Vec<ShareFileUpload>,
}

impl Default for ShareForm {
    fn default() -> Self {
        Self {
            kind: ShareType::Text,
            name: String::new(),
            name_random: true,
            name_random_length: 6,
            password: String::new(),
            expiry: 0,
            text: String::new(),
            files: Vec::new(),
        }
    }
}

/// Share kind picked in the type select; directories come from multi-file
/// uploads, never from the select.
pub fn kind_from_choice(value: &str) -> ShareType {
    match value {
        "url" => ShareType::Url,
        "file" => ShareType::File,
        _ => ShareType::Text,
    }
}

/// 2 to 64 ASCII letters or digits.
pub fn is_valid_share_name(name: &str) -> bool {
    (2..=64).contains(&name.len()) && name.bytes().all(|b| b.is_ascii_alphanumeric())
}

pub fn expiry_label(days: u32) -> String {
    match days {
        0 => "Never".to_owned(),
        1 => "1 day".to_owned(),
        n => format!("{n} days"),
    }
}

/// Validate a draft and turn it into the request body.
///
/// # Errors
///
/// Returns the message to show next to the form.
pub fn validate_share_form(form: &ShareForm) -> Result<CreateShareRequest, &'static str> {
    if form.kind == ShareType::Directory {
        return Err("Upload several files to create a directory share.");
    }
    let name = form.name.trim();
    if !form.name_random {
        if name.is_empty() {
            return Err("Please choose a name for your share.");
        }
        if !is_valid_share_name(name) {
            return Err("Share names use 2-64 letters or digits.");
        }
    } else if !RANDOM_NAME_LENGTHS.contains(&form.name_random_length) {
        return Err("Random names must be 4-32 characters long.");
    }
    if form.password.len() > PASSWORD_MAX_BYTES {
        return Err("Password must be at most 72 bytes.");
    }
    if !EXPIRY_CHOICES.contains(&form.expiry) {
        return Err("Choose a supported expiry.");
    }
    if form.kind == ShareType::File {
        if form.files.is_empty() {
            return Err("Please upload at least one file first.");
        }
        if form.files.len() > MAX_SHARE_FILES {
            return Err("A share holds at most 100 files.");
        }
        return Ok(CreateShareRequest {
            text: String::new(),
            files: form.files.clone(),
            ..base_request(form, name)
        });
    }
    let text = form.text.trim();
    if text.is_empty() {
        return Err(match form.kind {
            ShareType::Url => "Enter a URL to share.",
            _ => "Enter some text to share.",
        });
    }
    if form.kind == ShareType::Url && !has_scheme(text) {
        return Err("Invalid URL.");
    }
    Ok(CreateShareRequest {
        text: if form.kind == ShareType::Url { text.to_owned() } else { form.text.clone() },
        ..base_request(form, name)
    })
}

fn base_request(form: &ShareForm, name: &str) -> CreateShareRequest {
    CreateShareRequest {
        kind: form.kind,
        name: if form.name_random { String::new() } else { name.to_owned() },
        name_random: form.name_random,
        name_random_length: form.name_random_length,
        password: form.password.clone(),
        expiry: form.expiry,
        text: String::new(),
        files: Vec::new(),
    }
}

/// Trim a submitted share password and require a value.
///
/// # Errors
///
/// Returns the message to show under the password prompt.
pub fn validate_password_input(raw: &str) -> Result<String, &'static str> {
    let password = raw.trim();
    if password.is_empty() { Err("Enter the share password.") } else { Ok(password.to_owned()) }
}

fn has_scheme(url: &str) -> bool {
    let Some((scheme, rest)) = url.split_once("://") else {
        return false;
    };
    !rest.is_empty()
        && scheme.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        && scheme.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
