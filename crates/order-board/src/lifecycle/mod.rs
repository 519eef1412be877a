//! # System Lifecycle
//!
//! Starting and stopping the Order Store, and process-wide tracing setup.
//!
//! ## Context Injection
//!
//! The Order actor is built without dependencies and receives its
//! [`OrderContext`](crate::order_actor::OrderContext) (the clock) through
//! `run(context)` when it is spawned. Tests pass a
//! [`ManualClock`](crate::clock::ManualClock); the binary passes a
//! [`SystemClock`](crate::clock::SystemClock).
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the mailbox
//! 2. **Actor detects closure** - `receiver.recv()` returns `None` once queued requests are handled
//! 3. **Actor logs its final size** and the task ends
//! 4. **Await completion** - a panicked actor is reported as an error
//!
//! Orders are held in memory only and are gone after shutdown.

pub mod board_system;
pub mod tracing;

pub use self::board_system::*;
pub use self::tracing::*;
