//! LoanSewa Web UI
//!
//! Browser front end of the LoanSewa digital loan platform, built with Leptos
//! (WASM).
//!
//! # Features
//!
//! - Applicant signup, login and loan applications
//! - Credit analytics and score improvement suggestions
//! - Admin back-office: approvals, history, insights and user management
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Every page fetches JSON from the LoanSewa API over HTTP; the
//! only state shared between pages is the logged-in identity in local storage.

use leptos::*;

mod api;
mod app;
mod components;
mod dialogs;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
