use dioxus::prelude::*;
use ui::views::WorkspaceView;

/// Signed-in page: projects on the left, the selected project's tasks on the right.
#[component]
pub fn Todos() -> Element {
    rsx! {
        WorkspaceView {}
    }
}
