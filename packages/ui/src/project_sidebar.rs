use dioxus::prelude::*;
use store::Project;

use crate::dialogs::{ConfirmDialog, RenameProjectDialog};
use crate::icons::{FaPen, FaPlus, FaTrashCan};
use crate::Icon;

#[component]
pub fn ProjectSidebar(
    projects: Vec<Project>,
    active_id: Option<String>,
    on_select: EventHandler<String>,
    on_create: EventHandler<String>,
    on_rename: EventHandler<(String, String)>,
    on_delete: EventHandler<String>,
) -> Element {
    let mut creating = use_signal(|| false);
    let mut name = use_signal(String::new);
    let mut renaming = use_signal(|| Option::<Project>::None);
    let mut deleting = use_signal(|| Option::<Project>::None);

    let handle_create = move |evt: FormEvent| {
        evt.prevent_default();
        on_create.call(name());
        name.set(String::new());
        creating.set(false);
    };

    rsx! {
        aside {
            class: "sidebar",
            div {
                class: "card",
                div { class: "sidebar-title", "Projects" }

                if creating() {
                    form {
                        class: "sidebar-create",
                        onsubmit: handle_create,
                        input {
                            class: "field",
                            r#type: "text",
                            placeholder: "Project name",
                            value: name(),
                            oninput: move |evt: FormEvent| name.set(evt.value()),
                        }
                        button { class: "btn btn-outline", r#type: "submit", "Save" }
                    }
                } else {
                    button {
                        class: "btn btn-outline sidebar-new",
                        onclick: move |_| creating.set(true),
                        Icon { icon: FaPlus, width: 12, height: 12 }
                        span { "New Project" }
                    }
                }

                if projects.is_empty() {
                    div { class: "empty-state", "No projects" }
                } else {
                    for project in projects.iter() {
                        div {
                            key: "{project.id}",
                            class: if active_id.as_ref() == Some(&project.id) { "project-item active" } else { "project-item" },
                            onclick: {
                                let id = project.id.clone();
                                move |_| on_select.call(id.clone())
                            },
                            span {
                                class: "project-name",
                                title: "{project.name}",
                                "{project.name}"
                            }
                            div {
                                class: "project-actions",
                                button {
                                    class: "link-button",
                                    title: "Rename",
                                    onclick: {
                                        let project = project.clone();
                                        move |evt: Event<MouseData>| {
                                            evt.stop_propagation();
                                            renaming.set(Some(project.clone()));
                                        }
                                    },
                                    Icon { icon: FaPen, width: 12, height: 12 }
                                }
                                button {
                                    class: "link-button danger",
                                    title: "Delete",
                                    onclick: {
                                        let project = project.clone();
                                        move |evt: Event<MouseData>| {
                                            evt.stop_propagation();
                                            deleting.set(Some(project.clone()));
                                        }
                                    },
                                    Icon { icon: FaTrashCan, width: 12, height: 12 }
                                }
                            }
                        }
                    }
                }
            }
        }

        if let Some(project) = renaming() {
            RenameProjectDialog {
                project: project.clone(),
                on_rename: {
                    let id = project.id.clone();
                    move |new_name: String| {
                        on_rename.call((id.clone(), new_name));
                        renaming.set(None);
                    }
                },
                on_cancel: move |_| renaming.set(None),
            }
        }
        if let Some(project) = deleting() {
            ConfirmDialog {
                title: "Delete project",
                message: "Delete \"{project.name}\" and all of its tasks?",
                on_confirm: {
                    let id = project.id.clone();
                    move |_| {
                        on_delete.call(id.clone());
                        deleting.set(None);
                    }
                },
                on_cancel: move |_| deleting.set(None),
            }
        }
    }
}
