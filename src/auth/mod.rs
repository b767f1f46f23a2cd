//! Accounts, sessions and the two authentication backends.
//!
//! ## Identity Types
//!
//! - [`User`] — Public profile, also the persisted session record
//! - [`Account`] — Registry entry: a user plus its Argon2 hashword
//! - [`Registry`] — Locally registered accounts in insertion order
//!
//! ## Backends
//!
//! - [`AuthProvider`] — Capability the UI controller depends on
//! - [`LocalProvider`] — Accounts kept entirely in client storage
//! - [`RemoteProvider`] — Adapter over a remote [`Identity`] service
//! - [`Backend`] — The variant chosen once at startup from [`RemoteConfig`]
mod account;
mod backend;
mod config;
mod credentials;
mod error;
mod identity;
mod local;
pub mod password;
mod provider;
mod registry;
mod remote;
mod user;

pub use account::*;
pub use backend::*;
pub use config::*;
pub use credentials::*;
pub use error::*;
pub use identity::*;
pub use local::*;
pub use provider::*;
pub use registry::*;
pub use remote::*;
pub use user::*;
