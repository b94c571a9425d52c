//! Dioxus fullstack application entry point.
//!
//! This module provides the main App component that serves as the root
//! of the Dioxus application with client-side hydration.

use dioxus::prelude::*;

pub mod api;
pub mod components;
pub mod pages;
pub mod session;

use pages::{Dashboard, Login};
use session::use_session_provider;

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // Initialize the session context at app root (single owner of the token)
    use_session_provider();

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/login")]
    Login {},
}
