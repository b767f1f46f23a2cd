//! Persistent key-value storage and the records kept in it.
pub mod memory;
pub use memory::*;

pub mod session;
pub use session::*;

pub mod storage;
pub use storage::*;
