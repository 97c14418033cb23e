//! Navigation guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs before a route renders. [`fetch_mode`] says whether the identity
//! must be fetched first and whether rendering waits for it; [`decide`] says
//! whether the route may render. [`on_navigation`] combines both for a
//! concrete path and is the only entry point `components::route_guard`
//! calls, once per navigation for the fetch and again whenever the session
//! changes for the decision. Everything is pure over a session snapshot so
//! whole navigation sequences can be tested without a router.
//!
//! ORDERING
//! ========
//! For routes that declare no auth the fetch is detached and `decide` sees
//! pre-fetch state, which is harmless because only `auth: true` routes can
//! redirect. A hung identity request keeps auth-declaring routes pending
//! indefinitely; there is no timeout.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::config::ROOT_PATH;
use crate::routes::{self, RouteMeta};
use crate::state::session::SessionState;

/// How the identity fetch should be started for a navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchMode {
    /// Identity already loaded.
    Skip,
    /// Fire and forget; the route renders without waiting.
    Detached,
    /// The route stays pending until the fetch resolves.
    Awaited,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Redirect(&'static str),
    /// Identity not loaded yet; decide again once it is.
    AwaitThenDecide,
}

pub fn fetch_mode(meta: RouteMeta, session: &SessionState) -> FetchMode {
    if session.loaded {
        FetchMode::Skip
    } else if meta.declares_auth() {
        FetchMode::Awaited
    } else {
        FetchMode::Detached
    }
}

pub fn decide(path: &str, meta: RouteMeta, session: &SessionState) -> GuardDecision {
    if !session.loaded && meta.declares_auth() {
        return GuardDecision::AwaitThenDecide;
    }
    if path != ROOT_PATH && meta.requires_auth() && !session.logged_in() {
        return GuardDecision::Redirect(ROOT_PATH);
    }
    GuardDecision::Proceed
}

/// What the guard does for one navigation against one session snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationStep {
    pub fetch: FetchMode,
    pub decision: GuardDecision,
}

/// Look up the route for `path` and evaluate both guard functions.
pub fn on_navigation(path: &str, session: &SessionState) -> NavigationStep {
    let meta = routes::meta_for(path);
    NavigationStep { fetch: fetch_mode(meta, session), decision: decide(path, meta, session) }
}
