//! Use Case Implementations
//!
//! | Use Case | Interface |
//! |----------|-----------|
//! | [`SearchServiceImpl`] | [`SearchServiceInterface`](crate::ports::SearchServiceInterface) |
//! | [`IndexingServiceImpl`] | [`IndexingServiceInterface`](crate::ports::IndexingServiceInterface) |

pub mod indexing_service;
pub mod search_service;

pub use indexing_service::IndexingServiceImpl;
pub use search_service::SearchServiceImpl;
