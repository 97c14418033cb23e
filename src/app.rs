//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{route_guard::RouteGuard, site_header::SiteHeader};
use crate::pages::{
    create::CreatePage, home::HomePage, list::ListPage, login::LoginPage, not_found::NotFoundPage,
    share::SharePage,
};
use crate::state::passwords::SharePasswords;
use crate::state::session::Session;

/// Root application component.
///
/// Provides the session store and the share password cache, then mounts the
/// router with every route behind the navigation guard. Paths mirror
/// `crate::routes`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(Session::new());
    provide_context(RwSignal::new(SharePasswords::load()));

    view! {
        <Title text="Simple Share"/>

        <Router>
            <SiteHeader/>
            <main class="page">
                <RouteGuard>
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("create") view=CreatePage/>
                        <Route path=StaticSegment("shares") view=ListPage/>
                        <Route path=(StaticSegment("shares"), ParamSegment("name")) view=SharePage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                    </Routes>
                </RouteGuard>
            </main>
        </Router>
    }
}
