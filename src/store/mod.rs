// Public API
pub use repository::{FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore};

// Internal modules
mod repository;
