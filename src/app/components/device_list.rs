//! Connected-device list view.

use dioxus::prelude::*;

use crate::app::api::Device;

/// Label shown for one device row.
pub fn device_label(device: &Device) -> String {
    format!("{} ({})", device.name, device.port)
}

/// Renders the fetched device collection in response order, keyed by id.
#[component]
pub fn DeviceList(devices: Vec<Device>) -> Element {
    rsx! {
        section { id: "devices",
            h2 { "Connected Arduinos" }
            if devices.is_empty() {
                article {
                    p { "No devices connected." }
                }
            } else {
                article {
                    ul {
                        for device in &devices {
                            li { key: "{device.id}", {device_label(device)} }
                        }
                    }
                }
            }
        }
    }
}
