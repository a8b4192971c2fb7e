//! Kernel utilities shared across slices.
//! Keep this crate lightweight: config loading plus the documentation filter
//! that hides marked operations while the production profile is active.
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! use salute_kernel::config::load_config;
//! let cfg: salute_kernel::domain::config::ApiConfig = load_config(Some("server"))?;
//! ```
//!
//! ## Documentation filtering
//! ```rust
//! use salute_kernel::docs::should_include;
//!
//! assert!(should_include(false, true, false));
//! assert!(!should_include(true, true, false));
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod docs;
pub mod prelude;

pub use salute_domain as domain;
