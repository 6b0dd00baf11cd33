//! Presentation state that does not need a renderer: display ordering,
//! selection fallback and the form models behind the task dialogs.

use store::{NewTask, Priority, Project, Task, TaskPatch};

/// Tasks in render order: open before done, then by due date with undated
/// tasks first. Stored order breaks ties and is never modified.
pub fn display_order(tasks: &[Task]) -> Vec<&Task> {
    let mut sorted: Vec<&Task> = tasks.iter().collect();
    sorted.sort_by(|a, b| a.done.cmp(&b.done).then_with(|| a.due.cmp(&b.due)));
    sorted
}

/// The project the board shows: the selected one if it still exists,
/// otherwise the first project, otherwise none.
pub fn active_project<'a>(projects: &'a [Project], selected: Option<&str>) -> Option<&'a Project> {
    selected
        .and_then(|id| projects.iter().find(|p| p.id == id))
        .or_else(|| projects.first())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign in",
            AuthMode::SignUp => "Create an account",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign In",
            AuthMode::SignUp => "Sign Up",
        }
    }

    pub fn switch_label(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Create account",
            AuthMode::SignUp => "I already have an account",
        }
    }
}

/// Contents of the "add task" form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub notes: String,
    pub due: String,
    pub priority: Priority,
}

impl TaskDraft {
    /// `None` while the title is blank; such a submit is ignored.
    pub fn to_new_task(&self) -> Option<NewTask> {
        if self.title.trim().is_empty() {
            return None;
        }
        Some(NewTask {
            title: self.title.clone(),
            notes: self.notes.clone(),
            due: self.due.clone(),
            priority: self.priority,
        })
    }
}

/// Contents of the edit dialog for one task.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskEdit {
    pub title: String,
    pub notes: String,
    pub due: String,
    pub priority: Priority,
}

impl TaskEdit {
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            notes: task.notes.clone(),
            due: task.due.clone(),
            priority: task.priority,
        }
    }

    /// Only the fields that differ from `original`. A blank title keeps the
    /// old one.
    pub fn to_patch(&self, original: &Task) -> TaskPatch {
        let title = self.title.trim();
        TaskPatch {
            title: (!title.is_empty() && title != original.title).then(|| title.to_string()),
            notes: (self.notes != original.notes).then(|| self.notes.clone()),
            due: (self.due != original.due).then(|| self.due.clone()),
            priority: (self.priority != original.priority).then_some(self.priority),
            done: None,
        }
    }
}
