use std::sync::Arc;

use super::*;
use crate::net::types::Student;
use crate::state::session::SessionStore;
use crate::storage::{MemoryStorage, STUDENT_KEY, StorageBackend};

fn logged_out_store() -> SessionStore {
    SessionStore::new(Arc::new(MemoryStorage::default()))
}

fn logged_in_store() -> SessionStore {
    let mut store = logged_out_store();
    store.student = Some(Student {
        id: 1,
        name: "Ada Lovelace".to_owned(),
        email: "ada@example.edu".to_owned(),
    });
    store
}

fn store_with_snapshot() -> SessionStore {
    let storage = Arc::new(MemoryStorage::default());
    let ada = Student {
        id: 1,
        name: "Ada Lovelace".to_owned(),
        email: "ada@example.edu".to_owned(),
    };
    storage.set(STUDENT_KEY, &serde_json::to_string(&ada).unwrap());
    SessionStore::new(storage)
}

// =============================================================
// before_each
// =============================================================

#[test]
fn auth_route_redirects_to_login_when_logged_out() {
    let mut session = logged_out_store();
    let outcome = before_each(&mut session, RouteAccess::RequiresAuth);
    assert_eq!(outcome, GuardOutcome::RedirectToLogin);
}

#[test]
fn auth_route_allows_when_logged_in() {
    let mut session = logged_in_store();
    let outcome = before_each(&mut session, RouteAccess::RequiresAuth);
    assert_eq!(outcome, GuardOutcome::Allow);
}

#[test]
fn auth_route_rehydrates_from_snapshot_and_allows() {
    let mut session = store_with_snapshot();
    assert!(!session.is_logged_in());
    let outcome = before_each(&mut session, RouteAccess::RequiresAuth);
    assert_eq!(outcome, GuardOutcome::Allow);
    assert!(session.is_logged_in());
}

#[test]
fn guest_route_redirects_to_dashboard_when_logged_in() {
    let mut session = logged_in_store();
    let outcome = before_each(&mut session, RouteAccess::RequiresGuest);
    assert_eq!(outcome, GuardOutcome::RedirectToDashboard);
}

#[test]
fn guest_route_allows_when_logged_out() {
    let mut session = logged_out_store();
    let outcome = before_each(&mut session, RouteAccess::RequiresGuest);
    assert_eq!(outcome, GuardOutcome::Allow);
}

#[test]
fn guest_route_redirects_when_a_snapshot_rehydrates() {
    let mut session = store_with_snapshot();
    let outcome = before_each(&mut session, RouteAccess::RequiresGuest);
    assert_eq!(outcome, GuardOutcome::RedirectToDashboard);
}

#[test]
fn public_route_is_always_allowed() {
    let mut logged_out = logged_out_store();
    let mut logged_in = logged_in_store();
    assert_eq!(
        before_each(&mut logged_out, RouteAccess::Public),
        GuardOutcome::Allow
    );
    assert_eq!(
        before_each(&mut logged_in, RouteAccess::Public),
        GuardOutcome::Allow
    );
}

#[test]
fn corrupt_snapshot_still_redirects_auth_route_to_login() {
    let storage = Arc::new(MemoryStorage::default());
    storage.set(STUDENT_KEY, "{broken");
    let mut session = SessionStore::new(storage);
    let outcome = before_each(&mut session, RouteAccess::RequiresAuth);
    assert_eq!(outcome, GuardOutcome::RedirectToLogin);
}

// =============================================================
// resolve_root
// =============================================================

#[test]
fn root_redirects_to_dashboard_with_snapshot() {
    let mut session = store_with_snapshot();
    assert_eq!(resolve_root(&mut session), GuardOutcome::RedirectToDashboard);
    assert!(session.is_logged_in());
}

#[test]
fn root_redirects_to_login_without_snapshot() {
    let mut session = logged_out_store();
    assert_eq!(resolve_root(&mut session), GuardOutcome::RedirectToLogin);
}

// =============================================================
// Route table
// =============================================================

#[test]
fn named_routes_declare_expected_access() {
    assert_eq!(LOGIN_ROUTE.access, RouteAccess::RequiresGuest);
    assert_eq!(LOGIN_ROUTE.path, "/login");
    assert_eq!(DASHBOARD_ROUTE.access, RouteAccess::RequiresAuth);
    assert_eq!(DASHBOARD_ROUTE.path, "/dashboard");
    assert_eq!(RouteAccess::default(), RouteAccess::Public);
}
