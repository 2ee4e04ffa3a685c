//! Application Layer - Project Marketplace Search
//!
//! This crate contains the application layer of the semantic project
//! search subsystem, orchestrating the domain ports into use cases.
//!
//! ## Architecture
//!
//! The application layer:
//! - Contains use case implementations (application services)
//! - Defines the service interfaces the enclosing application calls
//! - Bounds every blocking port call with a configurable timeout
//! - Has no dependencies on infrastructure or concrete providers
//!
//! ## Use Cases
//!
//! - Semantic project search (embed, fetch, rank, resolve)
//! - Keeping project embeddings in step with catalog mutations
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `pms-domain`: For entities, value objects, ports and ranking
//! - Pure Rust libraries for async and logging

pub mod ports;
pub mod use_cases;

mod timeout;

pub use ports::*;
pub use use_cases::*;
