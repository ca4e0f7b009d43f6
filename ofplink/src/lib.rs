//! ofplink - flight-plan synchronization for simulator add-ons
//!
//! Reads the flight plan a cooperating plugin publishes in a shared
//! named-value registry, detects changes through the producer's sequence
//! counters and renders a one-line departure status:
//!
//! ```text
//! DLH401 A359 TO KJFK TOBT 1230 TSAT 1245 RWY 25C SID MARUN7F
//! ```
//!
//! # Quick start
//!
//! ```
//! use std::sync::Arc;
//! use ofplink::flight_plan::FlightPlanSync;
//! use ofplink::log::TracingLogger;
//! use ofplink::registry::MemoryRegistry;
//!
//! let registry = Arc::new(MemoryRegistry::new());
//! let mut sync = FlightPlanSync::new(registry, Arc::new(TracingLogger::new()));
//!
//! // Once per UI tick:
//! if let Some(snapshot) = sync.load_if_newer() {
//!     println!("{}", snapshot.render_departure_line());
//! }
//! ```

pub mod config;
pub mod flight_plan;
pub mod log;
pub mod logging;
pub mod registry;

/// Version of the ofplink library and CLI.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
