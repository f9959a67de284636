//! Route metadata and the session-gated navigation guard.

pub mod guard;
