//! Snapshot rotation: for every instance, delete what is there, then take
//! one fresh dated snapshot.
//!
//! - `rotate_instance`: the per-instance List -> Delete(*) -> Create sequence
//! - `run`: one full pass, authenticating first and failing fast when no
//!   token or no instance list can be obtained
//! - `RotationReport`: per-instance outcomes gathered across the pass

pub mod controller;
pub mod error;
pub mod report;

pub use controller::{rotate_all, rotate_instance, run};
pub use error::RotateError;
pub use report::{InstanceOutcome, RotationReport};
