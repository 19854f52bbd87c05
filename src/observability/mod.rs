//! Structured logging.
//!
//! Every layer logs through `tracing` macros and `debug_span!` spans with
//! structured fields. This module installs the subscriber that turns them
//! into compact lines on stderr.
//!
//! # Configuration
//!
//! The level is controlled by:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` in the site configuration
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! ```
//! use avsite::observability::init_tracing;
//! use avsite::Config;
//!
//! init_tracing(&Config::default());
//! tracing::info!("site tooling started");
//! ```

mod init;

pub use init::init_tracing;
