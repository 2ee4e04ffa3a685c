//! # Project Marketplace Search - Infrastructure Layer
//!
//! Cross-cutting concerns and wiring for the search subsystem.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based layered configuration (`pms.toml` + `PMS__*` env) |
//! | [`logging`] | tracing subscriber setup |
//! | [`factory`] | Provider construction from configuration |
//! | [`bootstrap`] | Composition root building the services |
//! | [`error_ext`] | Context helpers for foreign errors |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod factory;
pub mod logging;

pub use bootstrap::{SearchContext, init_search, init_search_with_providers};
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
pub use logging::init_logging;
