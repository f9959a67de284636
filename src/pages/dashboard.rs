//! Dashboard page listing the student's tasks with create, toggle, and
//! delete actions.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::task_item::TaskItem;
use crate::net::api;
use crate::net::types::Task;
#[cfg(feature = "hydrate")]
use crate::net::types::TaskPayload;
use crate::router::guard::{self, DASHBOARD_ROUTE, GuardOutcome, LOGIN_ROUTE};
use crate::state::session::SessionStore;
use crate::util::dates::{is_valid_future_date, today_date_string};

/// Dashboard page — auth-only.
///
/// The mount effect runs the navigation guard: a logged-out visitor without
/// a stored snapshot is redirected to `/login` before anything loads.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let outcome = session
            .try_update(|s| guard::before_each(s, DASHBOARD_ROUTE.access))
            .unwrap_or(GuardOutcome::Allow);
        if outcome == GuardOutcome::RedirectToLogin {
            navigate(LOGIN_ROUTE.path, NavigateOptions::default());
        }
    });

    // Task list and pending count — refetched after every mutation.
    let tasks = LocalResource::new(move || {
        let id = session.with(|s| s.student_id());
        load_tasks(id)
    });
    let pending = LocalResource::new(move || {
        let id = session.with(|s| s.student_id());
        load_pending_count(id)
    });

    let student_name = move || {
        session.with(|s| s.student_name().map(str::to_owned).unwrap_or_default())
    };

    let navigate_logout = use_navigate();
    let on_logout = move |_| {
        session.update(|s| s.logout());
        navigate_logout(LOGIN_ROUTE.path, NavigateOptions::default());
    };

    let toggle_task = Callback::new(move |(task_id, completed): (i64, bool)| {
        #[cfg(feature = "hydrate")]
        {
            let tasks = tasks.clone();
            let pending = pending.clone();
            leptos::task::spawn_local(async move {
                let payload = TaskPayload {
                    completed,
                    ..TaskPayload::default()
                };
                if let Err(err) = api::update_task(task_id, &payload).await {
                    log::error!("failed to update task {task_id}: {err}");
                }
                tasks.refetch();
                pending.refetch();
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (task_id, completed);
        }
    });

    let delete_task = Callback::new(move |task_id: i64| {
        #[cfg(feature = "hydrate")]
        {
            let tasks = tasks.clone();
            let pending = pending.clone();
            leptos::task::spawn_local(async move {
                if let Err(err) = api::delete_task(task_id).await {
                    log::error!("failed to delete task {task_id}: {err}");
                }
                tasks.refetch();
                pending.refetch();
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = task_id;
        }
    });

    // Create-task dialog state.
    let show_create = RwSignal::new(false);
    let on_cancel = Callback::new(move |()| show_create.set(false));

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"My Tasks"</h1>
                <span class="dashboard-page__student">{student_name}</span>
                <Suspense fallback=|| ()>
                    {move || {
                        pending
                            .get()
                            .map(|count| {
                                view! {
                                    <span class="dashboard-page__pending">
                                        {format!("{count} pending")}
                                    </span>
                                }
                            })
                    }}
                </Suspense>
                <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                    "+ New Task"
                </button>
                <button class="btn" on:click=on_logout>
                    "Log out"
                </button>
            </header>

            <Suspense fallback=move || view! { <p>"Loading tasks..."</p> }>
                {move || {
                    tasks
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! {
                                    <p class="dashboard-page__empty">
                                        "No tasks yet. Create your first one."
                                    </p>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <ul class="dashboard-page__list">
                                        {list
                                            .into_iter()
                                            .map(|task| {
                                                view! {
                                                    <TaskItem
                                                        task=task
                                                        on_toggle=toggle_task
                                                        on_delete=delete_task
                                                    />
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            <Show when=move || show_create.get()>
                <CreateTaskDialog on_cancel=on_cancel tasks=tasks pending=pending/>
            </Show>
        </div>
    }
}

async fn load_tasks(student_id: Option<i64>) -> Vec<Task> {
    match student_id {
        Some(id) => api::fetch_tasks(id).await.unwrap_or_else(|err| {
            log::error!("failed to load tasks: {err}");
            Vec::new()
        }),
        None => Vec::new(),
    }
}

async fn load_pending_count(student_id: Option<i64>) -> i64 {
    match student_id {
        Some(id) => api::fetch_pending_count(id).await.unwrap_or_else(|err| {
            log::error!("failed to load pending count: {err}");
            0
        }),
        None => 0,
    }
}

/// Modal dialog for creating a new task.
///
/// The due date must be today or later; validation failures stay local to
/// the form.
#[component]
fn CreateTaskDialog(
    on_cancel: Callback<()>,
    tasks: LocalResource<Vec<Task>>,
    pending: LocalResource<i64>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let due_date = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<&'static str>);

    let submit = Callback::new(move |()| {
        let title_value = title.get_untracked();
        if title_value.trim().is_empty() {
            form_error.set(Some("Title is required."));
            return;
        }
        let due_value = due_date.get_untracked();
        if !is_valid_future_date(&due_value) {
            form_error.set(Some("Due date must be today or later."));
            return;
        }
        form_error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let Some(student_id) = session.with_untracked(|s| s.student_id()) else {
                return;
            };
            let description_value = description.get_untracked();
            let tasks = tasks.clone();
            let pending = pending.clone();
            leptos::task::spawn_local(async move {
                let payload = TaskPayload {
                    title: Some(title_value.trim().to_owned()),
                    description: (!description_value.trim().is_empty())
                        .then(|| description_value.trim().to_owned()),
                    due_date: Some(due_value),
                    completed: false,
                };
                match api::create_task(student_id, &payload).await {
                    Ok(_) => {
                        tasks.refetch();
                        pending.refetch();
                        on_cancel.run(());
                    }
                    Err(err) => log::error!("failed to create task: {err}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, &tasks, &pending, due_value, title_value);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create Task"</h2>
                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="dialog__label">
                    "Due date"
                    <input
                        class="dialog__input"
                        type="date"
                        min=today_date_string()
                        prop:value=move || due_date.get()
                        on:input=move |ev| due_date.set(event_target_value(&ev))
                    />
                </label>

                <Show when=move || form_error.get().is_some()>
                    <p class="dialog__error">{move || form_error.get().unwrap_or_default()}</p>
                </Show>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}
