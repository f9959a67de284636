//! Login page with the name/email credential form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::router::guard::{self, DASHBOARD_ROUTE, GuardOutcome, LOGIN_ROUTE};
use crate::state::session::SessionStore;

/// Login page — guest-only.
///
/// The mount effect runs the navigation guard, so an already-authenticated
/// visitor (or one with a stored snapshot) is sent straight to the
/// dashboard. Submitting runs the async login and publishes the in-flight
/// `loading` flag to the session signal.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let outcome = session
            .try_update(|s| guard::before_each(s, LOGIN_ROUTE.access))
            .unwrap_or(GuardOutcome::Allow);
        if outcome == GuardOutcome::RedirectToDashboard {
            navigate(DASHBOARD_ROUTE.path, NavigateOptions::default());
        }
    });

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    let navigate_submit = use_navigate();

    let submit = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let name = name.get_untracked();
            let email = email.get_untracked();
            let navigate = navigate_submit.clone();
            leptos::task::spawn_local(async move {
                let mut store = session.get_untracked();
                store.loading = true;
                store.error = None;
                session.set(store.clone());

                let ok = store.login(&crate::net::api::Api, &name, &email).await;
                session.set(store);
                if ok {
                    navigate(DASHBOARD_ROUTE.path, NavigateOptions::default());
                }
            });
        }
    });

    let loading = move || session.with(|s| s.loading);
    let error = move || session.with(|s| s.error.clone());

    view! {
        <div class="login-page">
            <h1>"StudyBoard"</h1>
            <p>"Track your study tasks"</p>

            <label class="login-page__label">
                "Name"
                <input
                    class="login-page__input"
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label class="login-page__label">
                "Email"
                <input
                    class="login-page__input"
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit.run(());
                        }
                    }
                />
            </label>

            <Show when=move || error().is_some()>
                <p class="login-page__error">{move || error().unwrap_or_default()}</p>
            </Show>

            <button
                class="btn btn--primary login-page__submit"
                disabled=loading
                on:click=move |_| submit.run(())
            >
                {move || if loading() { "Logging in..." } else { "Log in" }}
            </button>
        </div>
    }
}
