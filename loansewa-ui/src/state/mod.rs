//! State Management
//!
//! Toast state shared by every page and the stored login session.

pub mod global;
pub mod session;

pub use global::{provide_global_state, GlobalState};
