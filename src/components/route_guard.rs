//! Global navigation guard wrapped around the route outlet.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every navigation changes `pathname`; the effect below starts the identity
//! fetch the way `util::guard::on_navigation` asks, and the memo re-evaluates
//! its decision whenever the path or the session changes. While the
//! decision is `AwaitThenDecide` the page is not rendered.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::state::session::Session;
use crate::util::guard::{FetchMode, GuardDecision, on_navigation};

#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<Session>();
    let pathname = use_location().pathname;

    Effect::new(move || {
        let path = pathname.get();
        match on_navigation(&path, &session.state_untracked()).fetch {
            FetchMode::Skip => {}
            FetchMode::Detached => {
                log::debug!("fetching userinfo in background for {path}");
                session.spawn_fetch();
            }
            FetchMode::Awaited => {
                log::debug!("holding {path} until userinfo loads");
                session.spawn_fetch();
            }
        }
    });

    let decision = Memo::new(move |_| {
        on_navigation(&pathname.get(), &session.state()).decision
    });

    move || match decision.get() {
        GuardDecision::Proceed => children().into_any(),
        GuardDecision::Redirect(to) => {
            log::info!("redirecting unauthenticated navigation to {to}");
            view! { <Redirect path=to/> }.into_any()
        }
        GuardDecision::AwaitThenDecide => view! { <p class="route-pending">"Checking sign-in..."</p> }.into_any(),
    }
}
