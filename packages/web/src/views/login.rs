//! Login page view with the email/password form.

use dioxus::prelude::*;
use ui::AuthForm;

#[component]
pub fn Login() -> Element {
    rsx! {
        AuthForm {}
    }
}
