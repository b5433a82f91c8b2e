//! Background Tasks Module
//!
//! Contains background tasks that run periodically while the process is up.
//!
//! # Tasks
//! - Stats reporter: logs a cache statistics snapshot at configured intervals

mod reporter;

pub use reporter::spawn_stats_reporter;
