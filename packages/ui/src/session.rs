//! Application context: the store handles plus the reactive session and bundle.

use dioxus::prelude::*;
use store::{
    Accounts, Error, NewTask, Project, Session, StoreError, Task, TaskPatch, TodoConfig, UserData,
    UserDataStore,
};

use crate::platform::{make_store, AppStore};

/// Shared app handle provided via context by [`AppProvider`].
///
/// `session` and `data` are the only reactive state. Every mutation goes
/// through the store, then re-reads the bundle into `data`, so what is on
/// screen is always what was persisted.
#[derive(Clone)]
pub struct TodoApp {
    accounts: Accounts<AppStore>,
    user_data: UserDataStore<AppStore>,
    pub session: Signal<Option<Session>>,
    pub data: Signal<UserData>,
}

impl TodoApp {
    fn new(store: AppStore, config: &TodoConfig) -> Self {
        let accounts = Accounts::new(store.clone(), config);
        let user_data = UserDataStore::new(store, config);
        let session = accounts.current_session();
        let data = session
            .as_ref()
            .map(|s| user_data.bundle(s))
            .unwrap_or_default();
        Self {
            accounts,
            user_data,
            session: Signal::new(session),
            data: Signal::new(data),
        }
    }

    pub fn login(&self, email: &str, password: &str) -> Result<(), Error> {
        let session = self.accounts.login(email, password)?;
        self.enter(session);
        Ok(())
    }

    pub fn register(&self, email: &str, password: &str) -> Result<(), Error> {
        let session = self.accounts.register(email, password)?;
        self.enter(session);
        Ok(())
    }

    pub fn logout(&self) {
        if let Err(e) = self.accounts.logout() {
            tracing::error!("Failed to clear session: {}", e);
        }
        let mut session = self.session;
        let mut data = self.data;
        session.set(None);
        data.set(UserData::default());
    }

    fn enter(&self, account: Session) {
        let mut session = self.session;
        let mut data = self.data;
        data.set(self.user_data.bundle(&account));
        session.set(Some(account));
    }

    /// Run a user-data mutation for the signed-in account and refresh `data`.
    /// Without a session this does nothing.
    fn mutate<T>(
        &self,
        f: impl FnOnce(&UserDataStore<AppStore>, &Session) -> Result<T, StoreError>,
    ) -> Option<T> {
        let account = self.session.cloned()?;
        let result = f(&self.user_data, &account);
        let mut data = self.data;
        data.set(self.user_data.bundle(&account));
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!("Failed to save changes: {}", e);
                None
            }
        }
    }

    pub fn create_project(&self, name: &str) -> Option<Project> {
        self.mutate(|store, account| store.create_project(account, name))
    }

    pub fn rename_project(&self, id: &str, name: &str) {
        self.mutate(|store, account| store.rename_project(account, id, name));
    }

    pub fn delete_project(&self, id: &str) {
        self.mutate(|store, account| store.delete_project(account, id));
    }

    pub fn add_task(&self, project_id: &str, fields: NewTask) -> Option<Task> {
        self.mutate(|store, account| store.add_task(account, project_id, fields))
            .flatten()
    }

    pub fn update_task(&self, project_id: &str, task_id: &str, patch: TaskPatch) {
        self.mutate(|store, account| store.update_task(account, project_id, task_id, patch));
    }

    pub fn toggle_task(&self, project_id: &str, task_id: &str) {
        self.mutate(|store, account| store.toggle_task(account, project_id, task_id));
    }

    pub fn delete_task(&self, project_id: &str, task_id: &str) {
        self.mutate(|store, account| store.delete_task(account, project_id, task_id));
    }
}

/// Get the app handle. Must be called below an [`AppProvider`].
pub fn use_app() -> TodoApp {
    use_context::<TodoApp>()
}

/// Provider component that opens the platform store and restores the session.
/// Wrap your app with this component.
#[component]
pub fn AppProvider(config: TodoConfig, children: Element) -> Element {
    use_context_provider(move || TodoApp::new(make_store(), &config));

    rsx! {
        {children}
    }
}

/// Button that ends the session.
#[component]
pub fn SignOutButton(
    #[props(default = "Sign out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let app = use_app();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| app.logout(),
            "{label}"
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Debug, Default)]
    struct Outcome {
        created_without_session: bool,
        data_without_session: UserData,
        projects_while_signed_in: usize,
        session_after_logout: Option<Session>,
        data_after_logout: UserData,
        created_after_logout: bool,
        bundle_on_disk: usize,
    }

    thread_local! {
        static OUTCOME: RefCell<Option<Outcome>> = const { RefCell::new(None) };
    }

    /// Signals need a live runtime, so the app is driven from inside a component.
    #[component]
    fn Harness(base: String) -> Element {
        use_hook(move || {
            let config = TodoConfig::default();
            let store = store::FileStore::new(base.into());
            let app = TodoApp::new(store.clone(), &config);
            let mut outcome = Outcome::default();

            outcome.created_without_session = app.create_project("Orphan").is_some();
            app.rename_project("missing", "Other");
            app.delete_project("missing");
            outcome.data_without_session = app.data.cloned();

            if app.register("ada@example.com", "hunter22").is_ok() {
                app.create_project("Home");
                outcome.projects_while_signed_in = app.data.read().projects.len();
            }

            app.logout();
            outcome.session_after_logout = app.session.cloned();
            outcome.data_after_logout = app.data.cloned();
            outcome.created_after_logout = app.create_project("Late").is_some();

            let ada = Session {
                email: "ada@example.com".to_string(),
            };
            outcome.bundle_on_disk = UserDataStore::new(store, &config)
                .bundle(&ada)
                .projects
                .len();

            OUTCOME.with(|cell| *cell.borrow_mut() = Some(outcome));
        });
        rsx! {}
    }

    fn run_harness() -> Outcome {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("apollogs").to_string_lossy().into_owned();
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { base });
        dom.rebuild_in_place();
        OUTCOME.with(|cell| cell.borrow_mut().take()).unwrap()
    }

    #[test]
    fn test_mutations_need_a_session() {
        let outcome = run_harness();
        assert!(!outcome.created_without_session);
        assert_eq!(outcome.data_without_session, UserData::default());
        assert!(!outcome.created_after_logout);
    }

    #[test]
    fn test_logout_clears_session_and_data() {
        let outcome = run_harness();
        assert_eq!(outcome.projects_while_signed_in, 1);
        assert_eq!(outcome.session_after_logout, None);
        assert_eq!(outcome.data_after_logout, UserData::default());
        // Only the project created while signed in was written.
        assert_eq!(outcome.bundle_on_disk, 1);
    }
}
