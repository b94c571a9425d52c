//! Navigation bar with the logout control.

use dioxus::prelude::*;

use crate::app::session::use_session;
use crate::app::Route;

/// Top navigation. The logout control clears the session store explicitly,
/// which routes back to the login view.
#[component]
pub fn Nav() -> Element {
    let mut session = use_session();
    let nav = navigator();

    rsx! {
        nav {
            ul {
                li { strong { "BlueLink" } }
            }
            ul {
                if session.is_authenticated() {
                    li {
                        Link { to: Route::Dashboard {}, "Dashboard" }
                    }
                    li {
                        button {
                            class: "outline secondary",
                            onclick: move |_| {
                                session.clear();
                                nav.replace(Route::Login {});
                            },
                            "Log out"
                        }
                    }
                }
            }
        }
    }
}
