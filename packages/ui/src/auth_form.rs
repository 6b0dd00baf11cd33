//! Sign-in / registration form shown while nobody is signed in.

use dioxus::prelude::*;

use crate::board::AuthMode;
use crate::{use_app, APP_TITLE};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[component]
pub fn AuthForm() -> Element {
    let app = use_app();
    let mut mode = use_signal(AuthMode::default);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        let result = match mode() {
            AuthMode::SignIn => app.login(&email(), &password()),
            AuthMode::SignUp => app.register(&email(), &password()),
        };
        if let Err(e) = result {
            if !e.is_user_facing() {
                tracing::error!("Sign-in failed: {}", e);
            }
            error.set(Some(e.to_string()));
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "auth-page",
            div {
                class: "card auth-card",
                h1 { class: "auth-title", "{APP_TITLE}" }
                div { class: "auth-subtitle", "{mode().heading()}" }

                form {
                    class: "auth-form",
                    onsubmit: handle_submit,

                    label { class: "field-label", r#for: "auth-email", "Email" }
                    input {
                        id: "auth-email",
                        class: "field",
                        r#type: "email",
                        placeholder: "you@example.com",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }

                    label { class: "field-label", r#for: "auth-password", "Password" }
                    input {
                        id: "auth-password",
                        class: "field",
                        r#type: "password",
                        placeholder: "••••••••",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    div {
                        class: "auth-actions",
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            "{mode().submit_label()}"
                        }
                        button {
                            class: "btn btn-outline",
                            r#type: "button",
                            onclick: move |_| mode.set(mode().toggled()),
                            "{mode().switch_label()}"
                        }
                    }
                }
            }
        }
    }
}
