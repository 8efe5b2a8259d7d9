//! SecureFileGuard desktop client library.
//!
//! The binary in `main.rs` owns the iced application shell; this library
//! holds everything the shell drives:
//! - Upload pipeline (upload.rs)
//! - Scan verdict model (scan.rs)
//! - Configuration (config.rs)
//! - Logging setup (logging.rs)
//! - Blocking user notifications (notify.rs)

pub mod config;
pub mod logging;
pub mod notify;
pub mod scan;
pub mod upload;
