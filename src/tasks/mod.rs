//! Background Tasks Module
//!
//! # Tasks
//! - Cache cleanup: purges expired responses at the configured interval

mod cleanup;

pub use cleanup::spawn_cleanup_task;
