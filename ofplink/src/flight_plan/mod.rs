//! Flight-plan synchronization and departure-line formatting.
//!
//! A cooperating producer publishes the current flight plan as a set of
//! registry entries plus two sequence counters, one for the operational
//! flight plan (OFP) fields and one for the collaborative decision making
//! (CDM) fields. [`FlightPlanSync`] polls those counters and, when either
//! moved, reads every field into an immutable [`FlightPlanSnapshot`] whose
//! [`render_departure_line`](FlightPlanSnapshot::render_departure_line) gives
//! the status line shown by the UI.
//!
//! # Components
//!
//! - [`fields`] - entry names and the snapshot slot each one fills
//! - [`binding`] - lazy, one-shot resolution of entry names to handles
//! - [`sync`] - change detection and the size-probe / read fetch
//! - [`snapshot`] - the record and its rendering rules
//!
//! # Lifetime rules
//!
//! Both capability checks happen once, on the first poll. If the producer is
//! not loaded then, the sync stays inert until it is dropped. If the
//! producer has no CDM entries then, CDM fields stay empty even if they
//! appear later.

pub mod binding;
pub mod fields;
pub mod snapshot;
pub mod sync;

pub use binding::{BindingState, BoundField, BoundHandles, RegistryBinding};
pub use fields::{Field, FieldDescriptor};
pub use snapshot::{format_hhmm, FlightPlanSnapshot, FlightPlanSnapshotBuilder};
pub use sync::{fetch_text, FlightPlanSync};
