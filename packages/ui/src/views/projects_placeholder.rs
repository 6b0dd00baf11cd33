use dioxus::prelude::*;

/// Empty state shown when no project is selected.
#[component]
pub fn ProjectsPlaceholder() -> Element {
    rsx! {
        section {
            class: "card board placeholder",
            h2 { class: "placeholder-title", "Select a project from the left" }
            p { class: "placeholder-hint", "Or create one with \"New Project\"." }
        }
    }
}
