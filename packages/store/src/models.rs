//! # Domain models for accounts, projects and tasks
//!
//! Everything here is `Serialize + Deserialize` with camelCase field names, the
//! shape kept in localStorage. Timestamps are milliseconds since the Unix epoch.
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Account`] | A registered user: normalized email, password digest, creation time. |
//! | [`Session`] | The signed-in account. Doubles as the capability every [`crate::UserDataStore`] call takes. |
//! | [`Project`] | A named list of tasks. |
//! | [`Task`] | One to-do item inside a project. |
//! | [`UserData`] | The per-account bundle: projects plus a project id → tasks map. |
//! | [`NewTask`] / [`TaskPatch`] | Input for creating a task and for partially updating one. |

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub email: String,
    pub password_hash: String,
    pub created_at: i64,
}

/// The signed-in account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub created_at: i64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Normal, Priority::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Normal => "normal",
            Priority::High => "high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Normal => "Normal",
            Priority::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPriority(pub String);

impl fmt::Display for UnknownPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown priority: {}", self.0)
    }
}

impl std::error::Error for UnknownPriority {}

impl FromStr for Priority {
    type Err = UnknownPriority;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "normal" => Ok(Priority::Normal),
            "high" => Ok(Priority::High),
            _ => Err(UnknownPriority(s.to_string())),
        }
    }
}

/// Older builds stored whatever the user typed; anything unrecognised reads as normal.
fn lenient_priority<'de, D>(deserializer: D) -> Result<Priority, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()).unwrap_or_default())
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub notes: String,
    /// `YYYY-MM-DD`, or empty when there is no due date.
    #[serde(default)]
    pub due: String,
    #[serde(default, deserialize_with = "lenient_priority")]
    pub priority: Priority,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub created_at: i64,
}

impl Task {
    /// Merge the fields present in `patch`, leaving the rest alone.
    pub fn apply(&mut self, patch: TaskPatch) {
        let TaskPatch {
            title,
            notes,
            due,
            priority,
            done,
        } = patch;
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(notes) = notes {
            self.notes = notes;
        }
        if let Some(due) = due {
            self.due = due;
        }
        if let Some(priority) = priority {
            self.priority = priority;
        }
        if let Some(done) = done {
            self.done = done;
        }
    }
}

/// Fields supplied when creating a task.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub notes: String,
    pub due: String,
    pub priority: Priority,
}

/// A partial task update. `None` means "leave unchanged".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub notes: Option<String>,
    pub due: Option<String>,
    pub priority: Option<Priority>,
    pub done: Option<bool>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        *self == TaskPatch::default()
    }
}

/// One account's projects and their task lists.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub tasks: BTreeMap<String, Vec<Task>>,
}

impl UserData {
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Tasks of a project in stored order; empty for an unknown id.
    pub fn tasks_of(&self, project_id: &str) -> &[Task] {
        self.tasks.get(project_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Restore the invariant that `tasks` has exactly one entry per project.
    /// Returns true if anything had to change.
    pub fn repair(&mut self) -> bool {
        let mut changed = false;
        for project in &self.projects {
            if !self.tasks.contains_key(&project.id) {
                self.tasks.insert(project.id.clone(), Vec::new());
                changed = true;
            }
        }
        let before = self.tasks.len();
        let projects = &self.projects;
        self.tasks
            .retain(|id, _| projects.iter().any(|p| &p.id == id));
        changed || self.tasks.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task() -> Task {
        Task {
            id: "t1".to_string(),
            title: "Write report".to_string(),
            notes: String::new(),
            due: "2024-05-01".to_string(),
            priority: Priority::Normal,
            done: false,
            created_at: 1,
        }
    }

    #[test]
    fn test_patch_only_touches_named_fields() {
        let mut t = task();
        t.apply(TaskPatch {
            priority: Some(Priority::High),
            ..TaskPatch::default()
        });
        assert_eq!(t.priority, Priority::High);
        assert_eq!(t.title, "Write report");
        assert_eq!(t.due, "2024-05-01");
        assert!(!t.done);
    }

    #[test]
    fn test_task_json_shape() {
        let value = serde_json::to_value(task()).unwrap();
        assert_eq!(value["createdAt"], 1);
        assert_eq!(value["priority"], "normal");
        assert_eq!(value["done"], false);
    }

    #[test]
    fn test_task_defaults_and_unknown_priority() {
        let t: Task = serde_json::from_str(r#"{"id":"a","title":"x","priority":"urgent"}"#).unwrap();
        assert_eq!(t.priority, Priority::Normal);
        assert_eq!(t.notes, "");
        assert_eq!(t.due, "");
        assert!(!t.done);

        let t: Task = serde_json::from_str(r#"{"id":"a","priority":"HIGH"}"#).unwrap();
        assert_eq!(t.priority, Priority::High);
    }

    #[test]
    fn test_account_json_shape() {
        let account: Account = serde_json::from_str(
            r#"{"email":"a@b.co","passwordHash":"5e918d2","createdAt":1700000000000}"#,
        )
        .unwrap();
        assert_eq!(account.password_hash, "5e918d2");
        assert_eq!(account.created_at, 1_700_000_000_000);
    }

    #[test]
    fn test_repair_restores_invariant() {
        let mut data = UserData {
            projects: vec![Project {
                id: "p1".to_string(),
                name: "Home".to_string(),
                created_at: 0,
            }],
            tasks: BTreeMap::new(),
        };
        data.tasks.insert("ghost".to_string(), vec![task()]);

        assert!(data.repair());
        assert_eq!(data.tasks.len(), 1);
        assert!(data.tasks_of("p1").is_empty());
        assert!(data.tasks.get("ghost").is_none());
        assert!(!data.repair());
    }
}
