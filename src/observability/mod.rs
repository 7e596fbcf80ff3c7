//! Structured logging built on `tracing`.
//!
//! # Features
//!
//! - **Level filtering**: `RUST_LOG` syntax via `EnvFilter`
//! - **Stderr or file output**: stdout stays free for the host protocol
//! - **Automatic rotation**: log files rotate at 10MB with 3-backup retention
//!
//! # Usage
//!
//! Initialize tracing early, before the first event is handled:
//!
//! ```rust
//! use tickoff::observability::init_tracing;
//! use tickoff::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("host started");
//! ```
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

pub mod file_writer;
pub mod init;

pub use file_writer::RotatingFile;
pub use init::init_tracing;
