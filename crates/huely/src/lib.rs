// huely: Async Rust client for the Philips Hue bridge.
//
// Covers the three phases of talking to a bridge: finding it (mDNS with
// a cloud-directory fallback), pairing with it (link-button flow), and
// driving its CLIP v2 resources over pinned-root TLS.

pub mod auth;
pub mod config;
pub mod discovery;
pub mod error;
pub mod home;
pub mod models;

mod transport;

pub use auth::{Authenticator, PairingOutcome};
pub use config::BridgeConfig;
pub use discovery::{BridgeDiscovery, BridgeInfo};
pub use error::{ApiError, ApiErrorKind, Error};
pub use home::Home;
pub use models::Toggleable;
pub use transport::APPLICATION_KEY_HEADER;
