// skyportal/src/storage/mod.rs

//! Persistence boundary: where images come from and go back to.

/// Filesystem store
pub mod directory;
/// Storage-to-slot management
pub mod library;
/// In-memory store
pub mod memory;
/// Store trait
pub mod traits;

pub use directory::DirectoryStore;
pub use library::Library;
pub use memory::MemoryStore;
pub use traits::ImageStore;
