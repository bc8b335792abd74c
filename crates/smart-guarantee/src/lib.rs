//! Small-business loan-guarantee diagnosis.
//!
//! The [`diagnosis`] module holds the scoring engine and everything that feeds or renders
//! it; [`config`], [`telemetry`] and [`error`] carry the service plumbing shared with the
//! API binary.

pub mod config;
pub mod diagnosis;
pub mod error;
pub mod telemetry;
