//! API Layer
//!
//! HTTP calls to the LoanSewa API.

pub mod client;

pub use client::*;
