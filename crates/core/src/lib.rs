//! runcell domain logic.
//!
//! Everything that touches subprocesses and transient script files lives
//! here, away from HTTP types, so it can be tested without a server.

pub mod scripting;
