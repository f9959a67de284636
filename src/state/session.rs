//! Session store: the single source of truth for "is someone logged in".
//!
//! The store keeps the authenticated student in memory and mirrors it to a
//! durable key-value slot so a page reload stays logged in. Login matches
//! credentials client-side against the full student collection; the backend
//! has no login endpoint yet.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::Arc;

use crate::net::api::StudentDirectory;
use crate::net::types::Student;
use crate::storage::{STUDENT_KEY, StorageBackend};

/// Error message shown when no student matches the entered credentials.
pub const INVALID_CREDENTIALS: &str = "Invalid name or email.";

/// Authentication state plus the persistence slot it mirrors to.
///
/// Deployed as an `RwSignal<SessionStore>` context. `student` is `Some` iff
/// the session is logged in; `loading` is true only while a login attempt
/// is in flight.
#[derive(Clone)]
pub struct SessionStore {
    pub student: Option<Student>,
    pub error: Option<String>,
    pub loading: bool,
    storage: Arc<dyn StorageBackend>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("student", &self.student)
            .field("error", &self.error)
            .field("loading", &self.loading)
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    pub fn new(storage: Arc<dyn StorageBackend>) -> Self {
        Self {
            student: None,
            error: None,
            loading: false,
            storage,
        }
    }

    /// Attempt to log in by matching `name` and `email` against the student
    /// collection. Exact, case-sensitive equality on both fields.
    ///
    /// Returns true on success. On failure the reason lands in `error` and
    /// `student` is left unchanged; nothing is thrown to the caller.
    /// `loading` is false again on every exit path.
    pub async fn login<D: StudentDirectory>(
        &mut self,
        directory: &D,
        name: &str,
        email: &str,
    ) -> bool {
        self.loading = true;
        self.error = None;

        // TODO: replace with a real login endpoint once the backend grows one.
        let logged_in = match directory.list_students().await {
            Ok(students) => {
                let found = students
                    .into_iter()
                    .find(|s| s.name == name && s.email == email);
                match found {
                    Some(student) => {
                        if let Ok(json) = serde_json::to_string(&student) {
                            self.storage.set(STUDENT_KEY, &json);
                        }
                        self.student = Some(student);
                        true
                    }
                    None => {
                        self.error = Some(INVALID_CREDENTIALS.to_owned());
                        false
                    }
                }
            }
            Err(err) => {
                log::error!("login error: {err}");
                self.error = Some(format!("An error occurred during login. {err}"));
                false
            }
        };

        self.loading = false;
        logged_in
    }

    /// Clear the session and drop the durable snapshot. No network call.
    pub fn logout(&mut self) {
        self.student = None;
        self.storage.remove(STUDENT_KEY);
    }

    /// Rehydrate the session from the durable snapshot, if one exists.
    ///
    /// A present snapshot overwrites any in-memory student unconditionally
    /// and is not re-validated against the backend. An unparseable snapshot
    /// is logged and otherwise treated as absent.
    pub fn check_login_status(&mut self) {
        if let Some(raw) = self.storage.get(STUDENT_KEY) {
            match serde_json::from_str::<Student>(&raw) {
                Ok(student) => self.student = Some(student),
                Err(err) => log::warn!("ignoring unparseable session snapshot: {err}"),
            }
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.student.is_some()
    }

    pub fn student_id(&self) -> Option<i64> {
        self.student.as_ref().map(|s| s.id)
    }

    pub fn student_name(&self) -> Option<&str> {
        self.student.as_ref().map(|s| s.name.as_str())
    }

    /// Whether a durable snapshot exists, logged in or not. The navigation
    /// guard uses this to decide when to rehydrate eagerly.
    pub fn has_snapshot(&self) -> bool {
        self.storage.get(STUDENT_KEY).is_some()
    }
}
