//! Authentication module: credentials and the session that holds the token.
//!
//! This module provides:
//! - `Credentials`: the immutable set supplied at startup
//! - `AccessToken`: the bearer string, redacted in `Debug`
//! - `Session`: the one token obtained for the run
//!
//! Tokens are not refreshed; a run is expected to finish well inside the
//! provider's token lifetime.

pub mod credentials;
pub mod session;

pub use credentials::{AccessToken, Credentials};
pub use session::Session;
