//! Synchronization and Concurrency Support
//!
//! The core driver needs no locking: the status handler and the dispatcher
//! share [`ControllerState`](crate::driver::ControllerState) through atomics.
//! This module adds wrappers for applications that want more:
//!
//! - **Primitives** (`primitives`): Low-level synchronization types
//!   - [`CriticalSectionCell`] - ISR-safe interior mutability
//!   - [`AtomicWaker`] - Async waker storage for interrupts
//!
//! - **Shared Wrapper** (`shared`):
//!   - [`SharedCec`] - Critical-section protected command half
//!
//! - **Async Support** (`asynch`): Running the dispatcher as an async task
//!   - [`AsyncCecState`] - Controller state paired with a waker
//!   - [`async_interrupt_handler`] - Status handler that wakes the task
//!   - [`DeferredFuture`] - Future resolving when completions were delivered
//!
//! # Feature Flags
//!
//! - `critical-section`: Enables `primitives` and `shared` modules
//! - `async`: Enables `asynch` module (also requires `critical-section`)

// Primitives module (requires critical-section)
mod primitives;

#[cfg(feature = "async")]
pub use primitives::AtomicWaker;
pub use primitives::CriticalSectionCell;

// Shared wrapper (requires critical-section)
mod shared;

pub use shared::SharedCec;

// Async support (requires async feature)
#[cfg(feature = "async")]
pub mod asynch;

#[cfg(feature = "async")]
pub use asynch::{AsyncCecState, DeferredFuture, async_interrupt_handler};
