//! `storefront-auth` — purchasers and their (toy) password check.
//!
//! The password scheme here is NOT cryptographic. See [`password`].

pub mod authorize;
pub mod password;
pub mod user;

pub use authorize::AuthOutcome;
pub use password::PasswordDigest;
pub use user::User;
