//! Dashboard page component.
//!
//! Fetches the device and mapping collections whenever the token changes
//! and renders them. The two fetches are independent: each resolves into
//! its own loading/error/loaded state, in whichever order the responses
//! arrive.

use dioxus::prelude::*;

use crate::app::api::{self, ApiError, Device, Mapping};
use crate::app::components::{DeviceList, Layout, MappingCanvas};
use crate::app::session::use_session;
use crate::app::Route;

/// Dashboard page component.
#[component]
pub fn Dashboard() -> Element {
    let mut session = use_session();
    let nav = navigator();

    // No token - back to the login view
    use_effect(move || {
        if !session.is_authenticated() {
            nav.replace(Route::Login {});
        }
    });

    // Both resources read the token signal, so a login or logout restarts
    // them and drops whatever fetch was still in flight. A stale response
    // can never land on newer state.
    let devices = use_resource(move || {
        let token = session.token();
        async move {
            match token {
                Some(token) => api::fetch_json::<Vec<Device>>("/arduinos", Some(&token)).await,
                None => Ok(Vec::new()),
            }
        }
    });
    let mappings = use_resource(move || {
        let token = session.token();
        async move {
            match token {
                Some(token) => api::fetch_json::<Vec<Mapping>>("/mappings", Some(&token)).await,
                None => Ok(Vec::new()),
            }
        }
    });

    // A 401 from either fetch means the token is dead - drop the session
    use_effect(move || {
        let unauthorized = matches!(&*devices.read(), Some(Err(ApiError::Unauthorized)))
            || matches!(&*mappings.read(), Some(Err(ApiError::Unauthorized)));
        if unauthorized {
            session.clear();
        }
    });

    let devices_content = match devices.read().clone() {
        None => rsx! {
            article { aria_busy: "true", "Loading devices..." }
        },
        Some(Err(err)) => rsx! {
            article {
                p { class: "status-err", "Could not load devices: {err}" }
            }
        },
        Some(Ok(devices)) => rsx! {
            DeviceList { devices }
        },
    };

    let mappings_content = match mappings.read().clone() {
        None => rsx! {
            article { aria_busy: "true", "Loading mappings..." }
        },
        Some(Err(err)) => rsx! {
            article {
                p { class: "status-err", "Could not load mappings: {err}" }
            }
        },
        Some(Ok(mappings)) => rsx! {
            MappingCanvas { mappings }
        },
    };

    rsx! {
        Layout {
            title: "Dashboard".to_string(),

            h1 { "Arduino Controller Dashboard" }

            {devices_content}
            {mappings_content}
        }
    }
}
