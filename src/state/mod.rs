//! Shared client-side state.
//!
//! DESIGN
//! ======
//! State lives in plain structs deployed as `RwSignal` contexts by the app
//! shell. The session store is the only stateful domain here; each piece of
//! browser I/O it needs is injected so tests run on isolated instances.

pub mod session;
