//! Route modules for the script-runner service.
//!
//! All routes are mounted at the root: the hosting platform's probes and
//! the upload form both use fixed absolute paths.

pub mod execute;
pub mod health;
