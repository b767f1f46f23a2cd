//! HTML fragments for the static sections of the page.
//!
//! Every fragment is a pure function of a catalog table and a selector,
//! exposed as a [`std::fmt::Display`] type so callers decide where the
//! markup ends up. None of them read session state.
pub mod countdown;
pub use countdown::*;

pub mod escape;
pub use escape::*;

pub mod leaderboard;
pub use leaderboard::*;

pub mod ranks;
pub use ranks::*;

pub mod roster;
pub use roster::*;

pub mod term;
pub use term::*;

pub mod window;
pub use window::*;
