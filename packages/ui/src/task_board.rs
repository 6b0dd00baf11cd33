use dioxus::prelude::*;
use store::{NewTask, Priority, Project, Task, TaskPatch};

use crate::board::{display_order, TaskDraft};
use crate::dialogs::{PrioritySelect, TaskEditDialog};
use crate::views::ProjectsPlaceholder;

/// The selected project's tasks plus the "add task" form.
#[component]
pub fn TaskBoard(
    project: Option<Project>,
    tasks: Vec<Task>,
    on_add: EventHandler<NewTask>,
    on_toggle: EventHandler<String>,
    on_update: EventHandler<(String, TaskPatch)>,
    on_delete: EventHandler<String>,
) -> Element {
    let mut draft = use_signal(TaskDraft::default);
    let mut editing = use_signal(|| Option::<Task>::None);

    let Some(project) = project else {
        return rsx! {
            ProjectsPlaceholder {}
        };
    };

    let handle_add = move |evt: FormEvent| {
        evt.prevent_default();
        let new_task = draft.read().to_new_task();
        if let Some(new_task) = new_task {
            on_add.call(new_task);
            draft.set(TaskDraft::default());
        }
    };

    let ordered = display_order(&tasks);

    rsx! {
        section {
            class: "card board",
            div { class: "board-title", "{project.name}" }

            form {
                class: "task-form",
                onsubmit: handle_add,
                input {
                    class: "field",
                    r#type: "text",
                    placeholder: "Title",
                    value: draft.read().title.clone(),
                    oninput: move |evt: FormEvent| draft.write().title = evt.value(),
                }
                input {
                    class: "field",
                    r#type: "date",
                    value: draft.read().due.clone(),
                    oninput: move |evt: FormEvent| draft.write().due = evt.value(),
                }
                PrioritySelect {
                    value: draft.read().priority,
                    on_change: move |priority: Priority| draft.write().priority = priority,
                }
                button { class: "btn btn-primary", r#type: "submit", "Add" }
                textarea {
                    class: "field task-form-notes",
                    rows: "2",
                    placeholder: "Notes (optional)",
                    value: draft.read().notes.clone(),
                    oninput: move |evt: FormEvent| draft.write().notes = evt.value(),
                }
            }

            div {
                class: "task-list",
                if ordered.is_empty() {
                    div { class: "empty-state", "No tasks" }
                }
                for task in ordered {
                    div {
                        key: "{task.id}",
                        class: "task-row",
                        div {
                            class: "task-main",
                            input {
                                r#type: "checkbox",
                                checked: task.done,
                                onchange: {
                                    let id = task.id.clone();
                                    move |_| on_toggle.call(id.clone())
                                },
                            }
                            div {
                                class: "task-body",
                                div {
                                    class: if task.done { "task-title done" } else { "task-title" },
                                    "{task.title}"
                                }
                                div {
                                    class: "task-meta",
                                    if !task.due.is_empty() {
                                        span { "{task.due}" }
                                    }
                                    span { class: "badge badge-{task.priority}", "{task.priority}" }
                                }
                                if !task.notes.is_empty() {
                                    div { class: "task-notes", "{task.notes}" }
                                }
                            }
                        }
                        div {
                            class: "task-actions",
                            button {
                                class: "btn btn-outline btn-small",
                                onclick: {
                                    let task = task.clone();
                                    move |_| editing.set(Some(task.clone()))
                                },
                                "Edit"
                            }
                            button {
                                class: "btn btn-outline btn-small",
                                onclick: {
                                    let id = task.id.clone();
                                    move |_| on_delete.call(id.clone())
                                },
                                "Delete"
                            }
                        }
                    }
                }
            }
        }

        if let Some(task) = editing() {
            TaskEditDialog {
                task: task.clone(),
                on_save: {
                    let id = task.id.clone();
                    move |patch: TaskPatch| {
                        if !patch.is_empty() {
                            on_update.call((id.clone(), patch));
                        }
                        editing.set(None);
                    }
                },
                on_cancel: move |_| editing.set(None),
            }
        }
    }
}
