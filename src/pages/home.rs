//! Root path redirector.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::router::guard::{self, DASHBOARD_ROUTE, GuardOutcome, LOGIN_ROUTE};
use crate::state::session::SessionStore;

/// The `/` route never renders content: it rehydrates the session from the
/// stored snapshot and forwards to the dashboard or the login page.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let outcome = session
            .try_update(guard::resolve_root)
            .unwrap_or(GuardOutcome::RedirectToLogin);
        let target = match outcome {
            GuardOutcome::RedirectToDashboard => DASHBOARD_ROUTE.path,
            _ => LOGIN_ROUTE.path,
        };
        navigate(target, NavigateOptions::default());
    });

    view! { <div class="home-page"></div> }
}
