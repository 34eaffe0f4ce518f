//! # System Lifecycle
//!
//! Starting and stopping the booking core.
//!
//! [`BreakfastSystem`] spawns the booking store actor and opens role-gated
//! sessions on top of it. Shutdown works by channel closure:
//!
//! 1. Drop every session (each holds a store client)
//! 2. [`BreakfastSystem::shutdown`] drops the last client
//! 3. The actor's `recv()` returns `None` and its loop ends
//! 4. `shutdown` awaits the actor task
//!
//! [`setup_tracing`] installs the log subscriber; see the [`tracing`] module.

pub mod breakfast_system;
pub mod tracing;

pub use breakfast_system::*;
pub use self::tracing::*;
