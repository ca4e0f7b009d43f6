//! Logging seam for the flight-plan sync.
//!
//! The sync runs inside whatever host drives the per-tick poll (a simulator
//! plugin, the `ofplink` CLI, a test). The host decides where messages go, so
//! library code only talks to the [`Logger`] trait:
//!
//! - [`TracingLogger`] forwards to `tracing`, optionally prefixing every line
//!   with the host's name (`"autodgs: "`)
//! - [`MemoryLogger`] keeps every message so tests can assert on them
//! - [`NoOpLogger`] drops everything
//!
//! ```
//! use ofplink::log::{Logger, MemoryLogger};
//! use ofplink::{log_info, log_warn};
//! use std::sync::Arc;
//!
//! let logger = Arc::new(MemoryLogger::new());
//! log_info!(logger, "producer data changed: seqno {}, cdm {}", 3, 1);
//! log_warn!(logger, "producer data may be stale");
//! assert_eq!(logger.len(), 2);
//! ```

mod memory;
mod noop;
mod tracing_adapter;
mod r#trait;

pub use memory::MemoryLogger;
pub use noop::NoOpLogger;
pub use r#trait::{LogLevel, Logger};
pub use tracing_adapter::TracingLogger;
