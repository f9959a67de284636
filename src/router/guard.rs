//! Navigation guard evaluated before every route transition.
//!
//! The guard is a pure function of (session state, route access); pages run
//! it in a mount effect and translate the outcome into a client-side
//! navigation. It never panics — the fall-through branch allows.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::session::SessionStore;

/// Access requirement a route declares. Never both; `Public` is the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RouteAccess {
    #[default]
    Public,
    RequiresAuth,
    RequiresGuest,
}

/// Static metadata for a named route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteMeta {
    pub name: &'static str,
    pub path: &'static str,
    pub access: RouteAccess,
}

/// `/login` — reachable only while logged out.
pub const LOGIN_ROUTE: RouteMeta = RouteMeta {
    name: "Login",
    path: "/login",
    access: RouteAccess::RequiresGuest,
};

/// `/dashboard` — reachable only while logged in.
pub const DASHBOARD_ROUTE: RouteMeta = RouteMeta {
    name: "Dashboard",
    path: "/dashboard",
    access: RouteAccess::RequiresAuth,
};

/// Verdict for a route transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    RedirectToLogin,
    RedirectToDashboard,
}

/// Gate a transition to a route with the given access requirement.
///
/// A fresh page load with a durable snapshot counts as logged in: when the
/// in-memory session is empty but a snapshot exists, the session is
/// rehydrated before the requirement is checked. A redirected destination
/// is discarded, not queued for post-login resumption.
pub fn before_each(session: &mut SessionStore, access: RouteAccess) -> GuardOutcome {
    if !session.is_logged_in() && session.has_snapshot() {
        session.check_login_status();
    }

    match access {
        RouteAccess::RequiresAuth if !session.is_logged_in() => GuardOutcome::RedirectToLogin,
        RouteAccess::RequiresGuest if session.is_logged_in() => GuardOutcome::RedirectToDashboard,
        _ => GuardOutcome::Allow,
    }
}

/// Resolve the root path: rehydrate eagerly, then send the visitor to the
/// dashboard or the login page. Root itself is never rendered.
pub fn resolve_root(session: &mut SessionStore) -> GuardOutcome {
    session.check_login_status();
    if session.is_logged_in() {
        GuardOutcome::RedirectToDashboard
    } else {
        GuardOutcome::RedirectToLogin
    }
}
