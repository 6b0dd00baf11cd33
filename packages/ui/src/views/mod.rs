mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod projects_placeholder;
pub use projects_placeholder::ProjectsPlaceholder;

mod workspace;
pub use workspace::WorkspaceView;
