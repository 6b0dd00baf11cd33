//! Confirm/cancel dialogs for the edit flows. Each one only reports the
//! user's decision; cancelling calls `on_cancel` and nothing else.

use dioxus::prelude::*;
use store::{Priority, Project, Task, TaskPatch};

use crate::board::TaskEdit;
use crate::views::ModalOverlay;

/// `<select>` over the three priorities.
#[component]
pub fn PrioritySelect(value: Priority, on_change: EventHandler<Priority>) -> Element {
    rsx! {
        select {
            class: "field",
            value: "{value}",
            onchange: move |evt: FormEvent| {
                if let Ok(priority) = evt.value().parse::<Priority>() {
                    on_change.call(priority);
                }
            },
            for priority in Priority::ALL {
                option {
                    key: "{priority}",
                    value: "{priority}",
                    selected: priority == value,
                    "{priority.label()}"
                }
            }
        }
    }
}

#[component]
pub fn RenameProjectDialog(
    project: Project,
    on_rename: EventHandler<String>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut name = use_signal({
        let initial = project.name.clone();
        move || initial
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        on_rename.call(name());
    };

    rsx! {
        ModalOverlay {
            title: "Rename project",
            on_close: move |_| on_cancel.call(()),
            form {
                class: "dialog-form",
                onsubmit: handle_submit,
                label { class: "field-label", r#for: "rename-project", "New name" }
                input {
                    id: "rename-project",
                    class: "field",
                    r#type: "text",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
                div {
                    class: "dialog-actions",
                    button { class: "btn btn-primary", r#type: "submit", "Save" }
                    button {
                        class: "btn btn-outline",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}

#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            title: title,
            on_close: move |_| on_cancel.call(()),
            p { class: "dialog-message", "{message}" }
            div {
                class: "dialog-actions",
                button {
                    class: "btn btn-danger",
                    onclick: move |_| on_confirm.call(()),
                    "{confirm_label}"
                }
                button {
                    class: "btn btn-outline",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}

/// Edit title, notes, due date and priority of a task. Saving reports only
/// the fields that changed.
#[component]
pub fn TaskEditDialog(
    task: Task,
    on_save: EventHandler<TaskPatch>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut edit = use_signal({
        let initial = TaskEdit::from_task(&task);
        move || initial
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let patch = edit.read().to_patch(&task);
        on_save.call(patch);
    };

    rsx! {
        ModalOverlay {
            title: "Edit task",
            on_close: move |_| on_cancel.call(()),
            form {
                class: "dialog-form",
                onsubmit: handle_submit,
                label { class: "field-label", r#for: "edit-task-title", "Title" }
                input {
                    id: "edit-task-title",
                    class: "field",
                    r#type: "text",
                    value: edit.read().title.clone(),
                    oninput: move |evt: FormEvent| edit.write().title = evt.value(),
                }
                label { class: "field-label", r#for: "edit-task-due", "Date" }
                input {
                    id: "edit-task-due",
                    class: "field",
                    r#type: "date",
                    value: edit.read().due.clone(),
                    oninput: move |evt: FormEvent| edit.write().due = evt.value(),
                }
                label { class: "field-label", "Priority" }
                PrioritySelect {
                    value: edit.read().priority,
                    on_change: move |priority: Priority| edit.write().priority = priority,
                }
                label { class: "field-label", r#for: "edit-task-notes", "Notes" }
                textarea {
                    id: "edit-task-notes",
                    class: "field",
                    rows: "3",
                    value: edit.read().notes.clone(),
                    oninput: move |evt: FormEvent| edit.write().notes = evt.value(),
                }
                div {
                    class: "dialog-actions",
                    button { class: "btn btn-primary", r#type: "submit", "Save" }
                    button {
                        class: "btn btn-outline",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
