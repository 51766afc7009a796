// skyportal/src/storage/traits.rs

use crate::Result;

/// Image persistence abstracts the storage medium away from the slot
/// store. Names are opaque to the core; an implementation is responsible
/// for refusing names it cannot store safely.
pub trait ImageStore: Send + Sync {
    /// Read the stored bytes for `name`.
    fn load(&self, name: &str) -> Result<Vec<u8>>;

    /// Replace the stored bytes for `name`.
    fn save(&self, name: &str, bytes: &[u8]) -> Result<()>;

    /// Names of the images available for loading.
    fn list(&self) -> Result<Vec<String>>;
}
