//! Core library for snaprotate.
//!
//! Authenticates against the Contabo API, then for every compute instance
//! deletes its existing snapshots and takes one fresh, dated snapshot.
//!
//! - `api`: typed REST client, one method per endpoint
//! - `auth`: credentials and the single session token of a run
//! - `rotation`: the per-instance List -> Delete(*) -> Create sequence
//! - `config`: file + environment configuration
//! - `models`: provider payload types

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod rotation;

pub use api::{ApiClient, ApiError};
pub use auth::{AccessToken, Credentials, Session};
pub use config::{Config, ConfigError};
pub use models::{Instance, NewSnapshot, Snapshot};
pub use rotation::{rotate_all, rotate_instance, run, InstanceOutcome, RotateError, RotationReport};
