//! Competitive Landscape Monitor
//!
//! Browser dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Feed of competitor insight cards, newest as the backend orders them
//! - Pie chart of insights per category
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It fetches `<api base>/api/insights/` once on mount; the API
//! base is fixed at build time through `MONITOR_API_URL`.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
