//! Login page component.
//!
//! Exchanges credentials for a bearer token and writes it to the session
//! store. Failures stay on screen - the page renders the error instead of
//! dropping it.

use dioxus::prelude::*;

use crate::app::api::{self, ApiError};
use crate::app::components::Layout;
use crate::app::session::use_session;
use crate::app::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let nav = navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    // Already signed in - straight to the dashboard
    use_effect(move || {
        if session.is_authenticated() {
            nav.replace(Route::Dashboard {});
        }
    });

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if busy() {
            return;
        }
        busy.set(true);
        error.set(None);

        let user = username();
        let pass = password();
        spawn(async move {
            match api::login(&user, &pass).await {
                Ok(token) => {
                    session.set_token(token);
                    nav.replace(Route::Dashboard {});
                }
                Err(ApiError::Unauthorized) => {
                    error.set(Some("Invalid username or password".to_string()));
                }
                Err(err) => {
                    error.set(Some(format!("Login failed: {err}")));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        Layout {
            title: "Login".to_string(),

            article { class: "login-card",
                h2 { "Login" }
                form { onsubmit: submit,
                    input {
                        placeholder: "Username",
                        value: "{username}",
                        oninput: move |evt| username.set(evt.value()),
                    }
                    input {
                        r#type: "password",
                        placeholder: "Password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                    if let Some(message) = error() {
                        p { class: "status-err", "{message}" }
                    }
                    button {
                        r#type: "submit",
                        aria_busy: if busy() { "true" } else { "false" },
                        "Login"
                    }
                }
            }
        }
    }
}
