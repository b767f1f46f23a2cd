//! Community page for the HCN game server.
//!
//! Renders rank cards, the staff roster, the leaderboard and the event
//! countdown, and drives a small account/session state machine backed
//! either by browser storage or by a remote identity provider.
//!
//! ## Modules
//!
//! - [`catalog`] — Static rank, staff and leaderboard tables
//! - [`render`] — HTML fragments and the event countdown
//! - [`store`] — Key-value storage and the persisted session/registry
//! - [`auth`] — Local and remote authentication behind one capability
//! - [`ui`] — Session state machine and action dispatch over a [`ui::Page`]
//! - `web` — Browser bindings (feature `client`)
pub mod auth;
pub mod catalog;
pub mod render;
pub mod store;
pub mod ui;

#[cfg(feature = "client")]
pub mod web;

#[cfg(test)]
pub(crate) mod fixtures;

// ============================================================================
// PERSISTENCE
// ============================================================================
/// Storage key of the registered-accounts list.
pub const USERS_KEY: &str = "hcn_users_v1";
/// Storage key of the current-session user.
pub const CURRENT_KEY: &str = "hcn_current_v1";

// ============================================================================
// ACCOUNTS
// ============================================================================
/// Avatar shown for users without one.
pub const DEFAULT_AVATAR: &str = "assets/myskin.png";
/// Fallback image for staff photos that fail to load.
pub const PLACEHOLDER_PHOTO: &str = "assets/placeholder.png";
/// Display name of last resort.
pub const DEFAULT_NAME: &str = "Player";
/// Welcome credits granted to locally registered accounts.
pub const LOCAL_CREDITS: u32 = 50;
/// Remote accounts start empty; credits are not synced from the provider.
pub const REMOTE_CREDITS: u32 = 0;
/// Prefix of locally generated user ids.
pub const LOCAL_ID_PREFIX: &str = "local_";
/// Domain appended to bare usernames when registering with the provider.
pub const SYNTHETIC_EMAIL_DOMAIN: &str = "example.com";

// ============================================================================
// REMOTE PROVIDER
// ============================================================================
/// API key shipped in the page template. Remote auth is off until replaced.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY";

// ============================================================================
// TIMING
// ============================================================================
/// Countdown refresh period.
pub const TICK_INTERVAL: std::time::Duration = std::time::Duration::from_millis(1000);
/// Wait after the window load event before fading the loader.
pub const LOADER_DELAY: std::time::Duration = std::time::Duration::from_millis(300);
/// Hide the loader this long after boot even if `load` never fires.
pub const LOADER_BOOT: std::time::Duration = std::time::Duration::from_millis(800);
/// Loader fade-out duration.
pub const LOADER_FADE: std::time::Duration = std::time::Duration::from_millis(450);
/// Delay before the faded loader is removed from the DOM.
pub const LOADER_REMOVE: std::time::Duration = std::time::Duration::from_millis(500);
/// Hide the loader regardless of load events after this long.
pub const LOADER_FALLBACK: std::time::Duration = std::time::Duration::from_millis(6000);
