//! Script execution domain logic.
//!
//! Each runtime (Python, shell) has its own executor implementing
//! [`executor::ScriptExecutor`]; shared spawn and stream-capture logic sits
//! in [`subprocess`], and [`runner::ScriptRunner`] ties the executors to
//! the transient-file lifecycle used by the upload endpoint.

pub mod executor;
pub mod python;
pub mod runner;
pub mod shell;
pub mod subprocess;
