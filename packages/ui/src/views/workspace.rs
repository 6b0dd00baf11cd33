use dioxus::prelude::*;
use store::{NewTask, TaskPatch};

use crate::board::active_project;
use crate::{use_app, Navbar, ProjectSidebar, TaskBoard};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Signed-in layout: header, project sidebar and the task board.
///
/// The selected project id is local, never persisted. If it points at a
/// project that no longer exists the board falls back to the first project.
#[component]
pub fn WorkspaceView() -> Element {
    let app = use_app();
    let mut selected = use_signal(|| Option::<String>::None);

    let email = app.session.cloned().map(|s| s.email).unwrap_or_default();
    let data = app.data.cloned();
    let active = active_project(&data.projects, selected.read().as_deref()).cloned();
    let active_id = active.as_ref().map(|p| p.id.clone());
    let board_key = active_id.clone().unwrap_or_default();
    let tasks = active
        .as_ref()
        .map(|p| data.tasks_of(&p.id).to_vec())
        .unwrap_or_default();

    let on_create = {
        let app = app.clone();
        move |name: String| {
            app.create_project(&name);
        }
    };

    let on_rename = {
        let app = app.clone();
        move |(id, name): (String, String)| app.rename_project(&id, &name)
    };

    let on_delete = {
        let app = app.clone();
        move |id: String| {
            let was_selected = selected.read().as_deref() == Some(id.as_str());
            if was_selected {
                selected.set(None);
            }
            app.delete_project(&id);
        }
    };

    let on_add = {
        let app = app.clone();
        let project_id = active_id.clone();
        move |fields: NewTask| {
            if let Some(project_id) = &project_id {
                app.add_task(project_id, fields);
            }
        }
    };

    let on_toggle = {
        let app = app.clone();
        let project_id = active_id.clone();
        move |task_id: String| {
            if let Some(project_id) = &project_id {
                app.toggle_task(project_id, &task_id);
            }
        }
    };

    let on_update = {
        let app = app.clone();
        let project_id = active_id.clone();
        move |(task_id, patch): (String, TaskPatch)| {
            if let Some(project_id) = &project_id {
                app.update_task(project_id, &task_id, patch);
            }
        }
    };

    let on_delete_task = {
        let app = app.clone();
        let project_id = active_id.clone();
        move |task_id: String| {
            if let Some(project_id) = &project_id {
                app.delete_task(project_id, &task_id);
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "app-shell",
            Navbar { email: email }
            main {
                class: "workspace",
                ProjectSidebar {
                    projects: data.projects.clone(),
                    active_id: active_id.clone(),
                    on_select: move |id: String| selected.set(Some(id)),
                    on_create: on_create,
                    on_rename: on_rename,
                    on_delete: on_delete,
                }
                TaskBoard {
                    key: "{board_key}",
                    project: active,
                    tasks: tasks,
                    on_add: on_add,
                    on_toggle: on_toggle,
                    on_update: on_update,
                    on_delete: on_delete_task,
                }
            }
        }
    }
}
