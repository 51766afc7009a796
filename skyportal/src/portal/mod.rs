// skyportal/src/portal/mod.rs

/// Portal construction
pub mod builder;
/// Engine and serve loop
pub mod handle;

pub use builder::PortalBuilder;
pub use handle::{Outcome, Portal};
