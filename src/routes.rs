//! Static route table and per-route metadata.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app` registers one Leptos route per entry here and the navigation guard
//! looks metadata up by path, so this table is the single place that says
//! which pages need an identity.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::config::ROOT_PATH;

pub const HOME: &str = ROOT_PATH;
pub const CREATE: &str = "/create";
pub const SHARES: &str = "/shares";
pub const SHARE: &str = "/shares/:name";
pub const LOGIN: &str = "/login";

/// Guard-relevant metadata declared by a route.
///
/// `auth: None` means the route says nothing about authentication. A declared
/// value (even `false`) makes the guard wait for the identity fetch; only
/// `Some(true)` can cause a redirect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub auth: Option<bool>,
}

impl RouteMeta {
    pub const PUBLIC: Self = Self { auth: None };
    pub const AUTH_REQUIRED: Self = Self { auth: Some(true) };

    pub fn declares_auth(self) -> bool {
        self.auth.is_some()
    }

    pub fn requires_auth(self) -> bool {
        self.auth == Some(true)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    /// Pattern; `:name` segments match any single non-empty segment.
    pub path: &'static str,
    pub meta: RouteMeta,
}

pub const ROUTES: &[RouteEntry] = &[
    RouteEntry { path: HOME, meta: RouteMeta::PUBLIC },
    RouteEntry { path: CREATE, meta: RouteMeta::AUTH_REQUIRED },
    RouteEntry { path: SHARES, meta: RouteMeta::AUTH_REQUIRED },
    RouteEntry { path: SHARE, meta: RouteMeta::PUBLIC },
    RouteEntry { path: LOGIN, meta: RouteMeta::PUBLIC },
];

/// Client path of a single share's page.
pub fn share_path(name: &str) -> String {
    format!("{SHARES}/{name}")
}

/// Metadata of the first route matching `path`; unknown paths (the
/// not-found page) are public.
pub fn meta_for(path: &str) -> RouteMeta {
    ROUTES
        .iter()
        .find(|entry| pattern_matches(entry.path, path))
        .map_or(RouteMeta::PUBLIC, |entry| entry.meta)
}

fn pattern_matches(pattern: &str, path: &str) -> bool {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let mut pattern_segments = segments(pattern);
    let mut path_segments = segments(path);
    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return true,
            (Some(expected), Some(actual)) => {
                if !expected.starts_with(':') && expected != actual {
                    return false;
                }
            }
            _ => return false,
        }
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}
