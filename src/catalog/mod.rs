//! Static page content. Read-only for the lifetime of the process.
pub mod rank;
pub use rank::*;

pub mod staff;
pub use staff::*;

pub mod standing;
pub use standing::*;
