//! Identity session for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard reads this to decide whether a page may render, and pages
//! read it for identity-dependent content. The identity is fetched at most
//! once per successful app load; nothing here invalidates it afterwards.
//!
//! ERROR HANDLING
//! ==============
//! Fetch failures never reach callers. A 404 from the identity endpoint marks
//! authentication as disabled; any other failure is logged and leaves the
//! user effectively logged out. Every fetch ends with `loaded = true`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api::{self, ApiError};
use crate::net::types::Userinfo;

/// Classified result of one identity request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserinfoOutcome {
    Found(Userinfo),
    /// The backend has no authentication configured (HTTP 404).
    AuthDisabled,
    Failed(ApiError),
}

impl UserinfoOutcome {
    pub fn from_result(result: Result<Userinfo, ApiError>) -> Self {
        match result {
            Ok(info) => Self::Found(info),
            Err(err) if err.is_not_found() => Self::AuthDisabled,
            Err(err) => Self::Failed(err),
        }
    }
}

/// Snapshot of the session store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub userinfo: Option<Userinfo>,
    /// Reflects the most recent fetch outcome only.
    pub auth_disabled: bool,
    /// Flips to `true` after the first fetch completes and never resets.
    pub loaded: bool,
    pub loading: bool,
}

impl SessionState {
    pub fn logged_in(&self) -> bool {
        self.userinfo.as_ref().is_some_and(|info| !info.subject.is_empty())
    }

    pub fn username(&self) -> Option<&str> {
        self.userinfo.as_ref().map(|info| info.username.as_str()).filter(|name| !name.is_empty())
    }

    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    /// Fold a fetch result into state.
    ///
    /// A non-404 failure resets `auth_disabled` to `false` even when an
    /// earlier fetch had set it.
    pub fn apply_outcome(&mut self, outcome: UserinfoOutcome) {
        match outcome {
            UserinfoOutcome::Found(info) => {
                log::debug!("userinfo loaded for subject {}", info.subject);
                self.userinfo = Some(info);
            }
            UserinfoOutcome::AuthDisabled => {
                log::info!("authentication is disabled on the backend");
                self.auth_disabled = true;
            }
            UserinfoOutcome::Failed(err) => {
                log::error!("failed to fetch userinfo: {err}");
                self.auth_disabled = false;
            }
        }
        self.loading = false;
        self.loaded = true;
    }
}

/// Session store handle provided to the router and every page via context.
#[derive(Clone, Copy, Debug)]
pub struct Session(RwSignal<SessionState>);

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self(RwSignal::new(SessionState::default()))
    }

    /// Tracked snapshot; re-runs the calling effect or view on change.
    pub fn state(self) -> SessionState {
        self.0.get()
    }

    pub fn state_untracked(self) -> SessionState {
        self.0.get_untracked()
    }

    pub fn logged_in(self) -> bool {
        self.0.with(SessionState::logged_in)
    }

    pub fn auth_disabled(self) -> bool {
        self.0.with(|s| s.auth_disabled)
    }

    pub fn loaded(self) -> bool {
        self.0.with(|s| s.loaded)
    }

    pub fn username(self) -> Option<String> {
        self.0.with(|s| s.username().map(str::to_owned))
    }

    /// Issue one identity request and fold its outcome into state.
    ///
    /// Concurrent calls are not coalesced; each one ends with `loaded = true`.
    pub async fn fetch_userinfo(self) {
        self.0.update(SessionState::begin_fetch);
        let outcome = UserinfoOutcome::from_result(api::fetch_userinfo().await);
        self.0.update(|s| s.apply_outcome(outcome));
    }

    /// Start [`Session::fetch_userinfo`] as a detached task.
    ///
    /// Nothing awaits it: reads of the session right after this call still
    /// see the previous state.
    pub fn spawn_fetch(self) {
        leptos::task::spawn_local(self.fetch_userinfo());
    }
}
