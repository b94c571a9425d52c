//! Layout component wrapping all pages with Pico CSS and common elements.

use dioxus::prelude::*;

use super::nav::Nav;

/// CSS styles for the application (extends Pico CSS).
const CUSTOM_STYLES: &str = r#"
:root { --pico-font-size: 15px; }
.status-err { color: var(--pico-del-color); }
.login-card { max-width: 22rem; margin: 4rem auto; }
.mapping-canvas { background: #111; border: 1px solid var(--pico-muted-border-color); border-radius: 6px; max-width: 100%; }
small { color: var(--pico-muted-color); }
"#;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("CARGO_PKG_VERSION");
    let full_title = format!("{} - BlueLink Dashboard", props.title);

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Link { rel: "stylesheet", href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css" }
        document::Style { {CUSTOM_STYLES} }

        // Body content
        header { class: "container",
            Nav {}
        }
        main { class: "container",
            {props.children}
        }
        footer { class: "container",
            small { "BlueLink Dashboard v{version}" }
        }
    }
}
