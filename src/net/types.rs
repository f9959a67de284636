//! Wire types shared with the backend.
//!
//! Field names follow the backend's Jackson conventions (camelCase, with
//! the completion flag serialized as `completed`).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// A student record as returned by `GET /students`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Payload for `POST /students`.
#[derive(Clone, Debug, serde::Serialize)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
}

/// A task as returned by the task endpoints.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub due_date: String,
    pub completed: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Create/update payload for a task.
///
/// The backend's PUT only touches fields present in the body, so absent
/// fields are skipped rather than sent as null.
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    pub completed: bool,
}
