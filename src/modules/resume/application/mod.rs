pub mod ownership_guard;
pub mod ports;

pub use ownership_guard::{OwnershipError, OwnershipGuard};
