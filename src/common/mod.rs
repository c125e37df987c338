//! # Common Components
//!
//! Shared utilities used by the binary.
//!
//! ## Modules
//!
//! - [`config`]: Configuration loading and defaults

pub mod config;
