//! Row component for a single task in the dashboard list.

use leptos::prelude::*;

use crate::net::types::Task;

/// A task row with a completion checkbox and a delete button.
///
/// `on_toggle` receives `(task id, new completed value)`.
#[component]
pub fn TaskItem(
    task: Task,
    on_toggle: Callback<(i64, bool)>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let id = task.id;
    let completed = task.completed;

    view! {
        <li class="task-item" class=("task-item--done", completed)>
            <input
                class="task-item__toggle"
                type="checkbox"
                prop:checked=completed
                on:change=move |_| on_toggle.run((id, !completed))
            />
            <div class="task-item__body">
                <span class="task-item__title">{task.title.clone()}</span>
                {task
                    .description
                    .clone()
                    .map(|d| view! { <p class="task-item__description">{d}</p> })}
                <span class="task-item__due">{format!("Due {}", task.due_date)}</span>
            </div>
            <button class="btn task-item__delete" on:click=move |_| on_delete.run(id)>
                "Delete"
            </button>
        </li>
    }
}
