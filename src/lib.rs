//! # LoanSewa
//!
//! Native side of the LoanSewa web UI: the host server that serves the
//! compiled browser bundle and forwards its API calls, and the typed client
//! behind the back-office CLI.
//!
//! ## Modules
//!
//! - [`config`]: TOML configuration with environment overrides
//! - [`logging`]: tracing subscriber setup
//! - [`host`]: static UI hosting, `/api` forwarding and health probes
//! - [`client`]: LoanSewa API client
//! - [`report`]: terminal tables and CSV exports
//!
//! Shared API records and view logic live in [`loansewa_core`].

pub mod client;
pub mod config;
pub mod host;
pub mod logging;
pub mod report;

pub use client::{ClientConfig, ClientError, LoanSewaClient};
pub use config::{BackendConfig, Config, ConfigError, LoggingConfig, ServerConfig};
pub use host::{build_router, serve, AppState, HostError};
pub use report::{OutputFormat, ReportError};
