use super::*;
use crate::net::api::ApiError;
use crate::net::types::Userinfo;
use crate::state::session::UserinfoOutcome;
use crate::routes::{self, meta_for};

fn loaded(logged_in: bool) -> SessionState {
    SessionState {
        userinfo: logged_in.then(|| Userinfo { subject: "sub".to_owned(), username: "u".to_owned() }),
        auth_disabled: false,
        loaded: true,
        loading: false,
    }
}

// =============================================================
// fetch_mode
// =============================================================

#[test]
fn public_route_fetches_detached_when_unloaded() {
    let state = SessionState::default();
    assert_eq!(fetch_mode(RouteMeta::PUBLIC, &state), FetchMode::Detached);
}

#[test]
fn auth_route_awaits_fetch_when_unloaded() {
    let state = SessionState::default();
    assert_eq!(fetch_mode(RouteMeta::AUTH_REQUIRED, &state), FetchMode::Awaited);
    assert_eq!(fetch_mode(RouteMeta { auth: Some(false) }, &state), FetchMode::Awaited);
}

#[test]
fn loaded_session_skips_fetch() {
    for meta in [RouteMeta::PUBLIC, RouteMeta::AUTH_REQUIRED] {
        assert_eq!(fetch_mode(meta, &loaded(false)), FetchMode::Skip);
    }
}

// =============================================================
// decide
// =============================================================

#[test]
fn public_route_never_waits() {
    for path in ["/", "/login", "/shares/abc", "/missing"] {
        let meta = meta_for(path);
        assert_eq!(decide(path, meta, &SessionState::default()), GuardDecision::Proceed, "{path}");
        assert_eq!(decide(path, meta, &loaded(false)), GuardDecision::Proceed, "{path}");
    }
}

#[test]
fn auth_route_waits_until_loaded() {
    let mut state = SessionState::default();
    state.loading = true;
    assert_eq!(decide(routes::CREATE, RouteMeta::AUTH_REQUIRED, &state), GuardDecision::AwaitThenDecide);
}

#[test]
fn auth_route_redirects_to_root_when_logged_out() {
    for path in [routes::CREATE, routes::SHARES] {
        assert_eq!(decide(path, meta_for(path), &loaded(false)), GuardDecision::Redirect("/"));
    }
}

#[test]
fn auth_route_proceeds_when_logged_in() {
    assert_eq!(decide(routes::CREATE, RouteMeta::AUTH_REQUIRED, &loaded(true)), GuardDecision::Proceed);
}

#[test]
fn root_is_never_redirected_even_if_marked_auth() {
    assert_eq!(decide("/", RouteMeta::AUTH_REQUIRED, &loaded(false)), GuardDecision::Proceed);
}

#[test]
fn declared_false_waits_but_never_redirects() {
    let meta = RouteMeta { auth: Some(false) };
    assert_eq!(decide("/x", meta, &SessionState::default()), GuardDecision::AwaitThenDecide);
    assert_eq!(decide("/x", meta, &loaded(false)), GuardDecision::Proceed);
}

#[test]
fn auth_disabled_backend_still_redirects_protected_routes() {
    let mut state = loaded(false);
    state.auth_disabled = true;
    assert_eq!(decide(routes::CREATE, RouteMeta::AUTH_REQUIRED, &state), GuardDecision::Redirect("/"));
}

// =============================================================
// on_navigation sequences
// =============================================================

fn step(fetch: FetchMode, decision: GuardDecision) -> NavigationStep {
    NavigationStep { fetch, decision }
}

#[test]
fn protected_route_waits_then_redirects_when_fetch_fails() {
    let mut state = SessionState::default();
    assert_eq!(
        on_navigation(routes::CREATE, &state),
        step(FetchMode::Awaited, GuardDecision::AwaitThenDecide)
    );

    state.begin_fetch();
    assert_eq!(on_navigation(routes::CREATE, &state).decision, GuardDecision::AwaitThenDecide);

    state.apply_outcome(UserinfoOutcome::Failed(ApiError::Network("offline".to_owned())));
    assert_eq!(
        on_navigation(routes::CREATE, &state),
        step(FetchMode::Skip, GuardDecision::Redirect("/"))
    );
}

#[test]
fn protected_route_waits_then_renders_when_user_found() {
    let mut state = SessionState::default();
    state.begin_fetch();
    state.apply_outcome(UserinfoOutcome::Found(Userinfo {
        subject: "sub".to_owned(),
        username: "alice".to_owned(),
    }));
    assert_eq!(on_navigation(routes::SHARES, &state), step(FetchMode::Skip, GuardDecision::Proceed));
}

#[test]
fn auth_disabled_backend_redirects_after_wait() {
    let mut state = SessionState::default();
    state.begin_fetch();
    state.apply_outcome(UserinfoOutcome::AuthDisabled);
    assert!(state.auth_disabled);
    assert_eq!(on_navigation(routes::CREATE, &state).decision, GuardDecision::Redirect("/"));
}

#[test]
fn public_route_renders_while_fetch_runs_in_background() {
    let state = SessionState::default();
    assert_eq!(on_navigation("/shares/abc", &state), step(FetchMode::Detached, GuardDecision::Proceed));
    assert_eq!(on_navigation("/", &state), step(FetchMode::Detached, GuardDecision::Proceed));
}

#[test]
fn second_navigation_after_load_does_not_refetch() {
    let mut state = SessionState::default();
    assert_eq!(on_navigation("/", &state).fetch, FetchMode::Detached);
    state.begin_fetch();
    state.apply_outcome(UserinfoOutcome::AuthDisabled);
    for path in ["/", routes::CREATE, "/shares/abc", "/missing"] {
        assert_eq!(on_navigation(path, &state).fetch, FetchMode::Skip, "{path}");
    }
}
