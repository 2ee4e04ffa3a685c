//! Project Catalog Implementations
//!
//! The catalog is owned by the enclosing application; the search core only
//! reads it. `InMemoryProjectCatalog` serves tests and applications that
//! keep their project list in memory.

pub mod in_memory;

pub use in_memory::InMemoryProjectCatalog;
