//! In-memory storage backend for testing and local development.
//!
//! Stores appointments in a HashMap wrapped in `Arc<RwLock<_>>`. Data is not
//! persisted and is lost when the repository is dropped.

mod repository;

pub use repository::InMemoryRepository;
