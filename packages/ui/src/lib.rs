//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

/// Shown in the navbar and on the sign-in card.
pub const APP_TITLE: &str = "ApolloGS – To-Do";

mod platform;
pub use platform::{make_store, AppStore};

mod session;
pub use session::{use_app, AppProvider, SignOutButton, TodoApp};

pub mod board;

mod dialogs;
pub use dialogs::{ConfirmDialog, PrioritySelect, RenameProjectDialog, TaskEditDialog};

mod navbar;
pub use navbar::Navbar;

mod auth_form;
pub use auth_form::AuthForm;

mod project_sidebar;
pub use project_sidebar::ProjectSidebar;

mod task_board;
pub use task_board::TaskBoard;

pub mod views;
