//! Root application component with routing and the session context.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{dashboard::DashboardPage, home::HomePage, login::LoginPage};
use crate::state::session::SessionStore;
use crate::storage::BrowserStorage;

/// Root application component.
///
/// Provides the session store context and sets up client-side routing.
/// Route access rules live in `router::guard`; each page enforces its own
/// requirement in a mount effect.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionStore::new(Arc::new(BrowserStorage)));
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/studyboard.css"/>
        <Title text="StudyBoard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
