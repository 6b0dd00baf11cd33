use dioxus::prelude::*;

use crate::{SignOutButton, APP_TITLE};

/// Sticky top bar with the signed-in email and a sign-out button.
#[component]
pub fn Navbar(email: String) -> Element {
    rsx! {
        header {
            class: "navbar",
            div {
                class: "navbar-inner",
                strong { "{APP_TITLE}" }
                div {
                    class: "navbar-account",
                    span { class: "navbar-email", "{email}" }
                    SignOutButton { class: "btn btn-outline btn-small" }
                }
            }
        }
    }
}
