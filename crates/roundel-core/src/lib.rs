//! Core systems for Roundel.
//!
//! This crate provides the foundational plumbing shared by the Roundel
//! sectioned-list and refresh-indicator widgets:
//!
//! - **Signal/Slot System**: Type-safe observer connections with RAII guards
//! - **Media Clock**: Monotonic time source driving compositor-style animations
//! - **Logging**: `tracing` targets and helpers
//! - **Errors**: Shared error types
//!
//! # Signal/Slot Example
//!
//! ```
//! use roundel_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```

pub mod clock;
mod error;
pub mod logging;
pub mod signal;

pub use clock::{ManualClock, MediaClock, SharedClock, SystemClock};
pub use error::{ConfigError, SignalError};
pub use logging::PerfSpan;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
