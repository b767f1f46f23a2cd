//! Session state machine and page actions.
//!
//! The [`Controller`] owns the chosen [`crate::auth::AuthProvider`] and a
//! [`Page`], the DOM surface it writes to. Clicks are resolved into
//! [`Action`]s by one delegated listener, so re-rendered fragments never
//! carry handlers of their own.
pub mod action;
pub use action::*;

pub mod controller;
pub use controller::*;

pub mod page;
pub use page::*;

pub mod state;
pub use state::*;
