//! # Domain Models
//!
//! Pure types shared by every crate in the workspace: configuration, profile
//! names and documentation markers. Only `serde` is allowed here.

pub mod config;
pub mod constants;
pub mod marker;
pub mod profiles;
