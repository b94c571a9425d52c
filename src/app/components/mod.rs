//! Shared UI components for the Dioxus fullstack web UI.

pub mod device_list;
pub mod layout;
pub mod mapping_canvas;
pub mod nav;

pub use device_list::DeviceList;
pub use layout::Layout;
pub use mapping_canvas::MappingCanvas;
pub use nav::Nav;
