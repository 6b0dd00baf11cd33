//! # Per-account projects and tasks
//!
//! All accounts' bundles live under one key as a map `email → UserData`.
//! [`UserDataStore`] never holds a bundle in memory between calls: every
//! mutation loads the whole map, edits the signed-in account's bundle, and
//! saves the whole map back. The [`Session`] passed to each call is the only
//! way to pick a bundle, so a caller cannot touch another account's data
//! without holding its session.
//!
//! Operations on ids that do not exist are no-ops that still succeed, which
//! keeps UI handlers simple when a stale id arrives after a delete.

use std::collections::BTreeMap;

use crate::config::TodoConfig;
use crate::error::StoreError;
use crate::ids::{new_id, now_millis};
use crate::kv::KeyValueStore;
use crate::models::{NewTask, Project, Session, Task, TaskPatch, UserData};

#[derive(Clone, Debug)]
pub struct UserDataStore<S: KeyValueStore> {
    store: S,
    key: String,
    default_project_name: String,
}

impl<S: KeyValueStore> UserDataStore<S> {
    pub fn new(store: S, config: &TodoConfig) -> Self {
        Self {
            store,
            key: config.storage_keys().user_data,
            default_project_name: config.projects.default_name.clone(),
        }
    }

    fn load_all(&self) -> BTreeMap<String, UserData> {
        self.store.load(&self.key, BTreeMap::new())
    }

    /// The account's bundle, or an empty one if it has none yet.
    pub fn bundle(&self, account: &Session) -> UserData {
        let mut data = self
            .load_all()
            .remove(&account.email)
            .unwrap_or_default();
        data.repair();
        data
    }

    /// Read-modify-write the account's bundle.
    fn update<T>(
        &self,
        account: &Session,
        f: impl FnOnce(&mut UserData) -> T,
    ) -> Result<T, StoreError> {
        let mut all = self.load_all();
        let data = all.entry(account.email.clone()).or_default();
        data.repair();
        let out = f(data);
        self.store.save(&self.key, &all)?;
        Ok(out)
    }

    pub fn create_project(&self, account: &Session, name: &str) -> Result<Project, StoreError> {
        let name = match name.trim() {
            "" => self.default_project_name.clone(),
            trimmed => trimmed.to_string(),
        };
        let project = Project {
            id: new_id(),
            name,
            created_at: now_millis(),
        };
        tracing::debug!(id = %project.id, "creating project");
        self.update(account, |data| {
            data.projects.push(project.clone());
            data.tasks.insert(project.id.clone(), Vec::new());
        })?;
        Ok(project)
    }

    /// Returns whether a project was renamed. A blank name keeps the old one.
    pub fn rename_project(&self, account: &Session, id: &str, name: &str) -> Result<bool, StoreError> {
        let name = name.trim();
        self.update(account, |data| {
            match data.projects.iter_mut().find(|p| p.id == id) {
                Some(project) if !name.is_empty() => {
                    project.name = name.to_string();
                    true
                }
                _ => false,
            }
        })
    }

    /// Removes the project and its task list in one write.
    pub fn delete_project(&self, account: &Session, id: &str) -> Result<bool, StoreError> {
        tracing::debug!(id, "deleting project");
        self.update(account, |data| {
            let before = data.projects.len();
            data.projects.retain(|p| p.id != id);
            data.tasks.remove(id);
            data.projects.len() != before
        })
    }

    /// Appends a task. Returns `None` if the project does not exist.
    pub fn add_task(
        &self,
        account: &Session,
        project_id: &str,
        fields: NewTask,
    ) -> Result<Option<Task>, StoreError> {
        let NewTask {
            title,
            notes,
            due,
            priority,
        } = fields;
        let task = Task {
            id: new_id(),
            title: title.trim().to_string(),
            notes,
            due,
            priority,
            done: false,
            created_at: now_millis(),
        };
        self.update(account, |data| {
            data.project(project_id)?;
            data.tasks
                .entry(project_id.to_string())
                .or_default()
                .push(task.clone());
            Some(task)
        })
    }

    /// Returns the updated task, or `None` if it was not found.
    pub fn update_task(
        &self,
        account: &Session,
        project_id: &str,
        task_id: &str,
        patch: TaskPatch,
    ) -> Result<Option<Task>, StoreError> {
        self.update(account, |data| {
            let task = data
                .tasks
                .get_mut(project_id)?
                .iter_mut()
                .find(|t| t.id == task_id)?;
            task.apply(patch);
            Some(task.clone())
        })
    }

    /// Flips `done`. Returns the updated task, or `None` if it was not found.
    pub fn toggle_task(
        &self,
        account: &Session,
        project_id: &str,
        task_id: &str,
    ) -> Result<Option<Task>, StoreError> {
        self.update(account, |data| {
            let task = data
                .tasks
                .get_mut(project_id)?
                .iter_mut()
                .find(|t| t.id == task_id)?;
            task.done = !task.done;
            Some(task.clone())
        })
    }

    pub fn delete_task(
        &self,
        account: &Session,
        project_id: &str,
        task_id: &str,
    ) -> Result<bool, StoreError> {
        self.update(account, |data| {
            let Some(tasks) = data.tasks.get_mut(project_id) else {
                return false;
            };
            let before = tasks.len();
            tasks.retain(|t| t.id != task_id);
            tasks.len() != before
        })
    }
}
