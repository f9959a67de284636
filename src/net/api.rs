//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Native builds get
//! stubs returning a transport error since these endpoints are only
//! reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Non-OK responses prefer the
//! backend's JSON `message` field so login failures can show the server's
//! own diagnostic.

#![allow(clippy::unused_async)]

#[cfg(feature = "hydrate")]
use crate::config::API_BASE_URL;
use crate::net::error::ApiError;
use crate::net::types::{NewStudent, Student, Task, TaskPayload};

/// Source of the student collection used for credential matching.
///
/// The session store depends on this seam instead of the concrete client so
/// tests can fake the directory. It is also where a server-side credential
/// check would slot in later.
#[allow(async_fn_in_trait)]
pub trait StudentDirectory {
    async fn list_students(&self) -> Result<Vec<Student>, ApiError>;
}

/// The real backend client.
#[derive(Clone, Copy, Debug, Default)]
pub struct Api;

impl StudentDirectory for Api {
    async fn list_students(&self) -> Result<Vec<Student>, ApiError> {
        fetch_students().await
    }
}

#[cfg(feature = "hydrate")]
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Turn a non-OK response into an [`ApiError`], preferring the server's
/// `message` body over the bare status code.
#[cfg(feature = "hydrate")]
async fn response_error(resp: gloo_net::http::Response) -> ApiError {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: String,
    }
    let status = resp.status();
    match resp.json::<ErrorBody>().await {
        Ok(body) => ApiError::Server(body.message),
        Err(_) => ApiError::Transport(format!("request failed with status {status}")),
    }
}

/// Fetch the full student collection from `GET /students`.
pub async fn fetch_students() -> Result<Vec<Student>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{API_BASE_URL}/students");
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(response_error(resp).await);
        }
        resp.json::<Vec<Student>>().await.map_err(transport)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::unavailable())
    }
}

/// Register a new student via `POST /students`.
pub async fn create_student(payload: &NewStudent) -> Result<Student, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{API_BASE_URL}/students");
        let resp = gloo_net::http::Request::post(&url)
            .json(payload)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(response_error(resp).await);
        }
        resp.json::<Student>().await.map_err(transport)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::unavailable())
    }
}

/// Fetch all tasks for a student.
pub async fn fetch_tasks(student_id: i64) -> Result<Vec<Task>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{API_BASE_URL}/tasks/students/{student_id}/tasks");
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(response_error(resp).await);
        }
        resp.json::<Vec<Task>>().await.map_err(transport)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = student_id;
        Err(ApiError::unavailable())
    }
}

/// Fetch a single task by id.
pub async fn fetch_task(task_id: i64) -> Result<Task, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{API_BASE_URL}/tasks/{task_id}");
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(response_error(resp).await);
        }
        resp.json::<Task>().await.map_err(transport)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = task_id;
        Err(ApiError::unavailable())
    }
}

/// Create a task for a student.
pub async fn create_task(student_id: i64, payload: &TaskPayload) -> Result<Task, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{API_BASE_URL}/tasks/students/{student_id}/tasks");
        let resp = gloo_net::http::Request::post(&url)
            .json(payload)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(response_error(resp).await);
        }
        resp.json::<Task>().await.map_err(transport)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (student_id, payload);
        Err(ApiError::unavailable())
    }
}

/// Update a task. Only the fields present in the payload are changed.
pub async fn update_task(task_id: i64, payload: &TaskPayload) -> Result<Task, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{API_BASE_URL}/tasks/update/{task_id}");
        let resp = gloo_net::http::Request::put(&url)
            .json(payload)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(response_error(resp).await);
        }
        resp.json::<Task>().await.map_err(transport)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (task_id, payload);
        Err(ApiError::unavailable())
    }
}

/// Delete a task.
pub async fn delete_task(task_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{API_BASE_URL}/tasks/delete/{task_id}");
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(response_error(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = task_id;
        Err(ApiError::unavailable())
    }
}

/// Fetch the number of a student's pending (not completed) tasks.
pub async fn fetch_pending_count(student_id: i64) -> Result<i64, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{API_BASE_URL}/tasks/students/{student_id}/tasks/pending-count");
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(response_error(resp).await);
        }
        resp.json::<i64>().await.map_err(transport)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = student_id;
        Err(ApiError::unavailable())
    }
}
