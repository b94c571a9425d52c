//! BlueLink Controller Dashboard
//!
//! Browser dashboard for BlueLink Arduino controllers: shows the connected
//! devices and the controller-button → pin mappings, rendered as text on a
//! canvas.
//!
//! This library provides:
//! - The Dioxus web UI (login, device list, mapping canvas)
//! - Session/token persistence across reloads
//! - An authenticated API client for the BlueLink backend
//! - A thin server that serves the UI and forwards API calls upstream

// =============================================================================
// Lints - Enforce code quality and consistency
// =============================================================================

// Deny truly dangerous patterns (these will fail the build)
#![deny(unsafe_code)]
#![deny(unused_must_use)]

// Dioxus UI app (shared between server SSR and WASM client)
pub mod app;

// Server-only modules (excluded from WASM build)
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod proxy;
