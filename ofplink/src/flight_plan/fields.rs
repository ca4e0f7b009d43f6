//! Registry layout of the flight-plan entries.
//!
//! Every text field the producer publishes is described once here: the
//! entry name (relative to the configured prefix) and the [`Field`] slot of
//! the snapshot it fills. Binding, fetching and logging all iterate these
//! tables instead of spelling out each field.

/// Integer entry that is non-zero while the producer's data may be outdated.
/// Its presence is what tells us the producer is loaded at all.
pub const STALE_ENTRY: &str = "stale";

/// Integer entry bumped by the producer on every operational flight plan change.
pub const OFP_SEQUENCE_ENTRY: &str = "seqno";

/// Integer entry bumped by the producer on every CDM change.
pub const CDM_SEQUENCE_ENTRY: &str = "cdm/seqno";

/// A text slot of a [`FlightPlanSnapshot`](super::FlightPlanSnapshot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    AirlineCode,
    FlightNumber,
    AircraftType,
    Destination,
    PassengerCount,
    EstimatedOutTime,
    EstimatedOffTime,
    EstimatedOnTime,
    EstimatedInTime,
    TargetOffBlockTime,
    TargetStartupApprovalTime,
    Runway,
    StandardInstrumentDeparture,
}

/// Binds a registry entry name to the snapshot slot it fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub field: Field,
    /// Entry name relative to the registry prefix.
    pub entry: &'static str,
}

impl FieldDescriptor {
    const fn new(field: Field, entry: &'static str) -> Self {
        Self { field, entry }
    }
}

/// Operational flight plan fields. Assumed present once the producer is.
pub const OFP_FIELDS: [FieldDescriptor; 9] = [
    FieldDescriptor::new(Field::AirlineCode, "icao_airline"),
    FieldDescriptor::new(Field::FlightNumber, "flight_number"),
    FieldDescriptor::new(Field::AircraftType, "aircraft_icao"),
    FieldDescriptor::new(Field::Destination, "destination"),
    FieldDescriptor::new(Field::PassengerCount, "pax_count"),
    FieldDescriptor::new(Field::EstimatedOutTime, "est_out"),
    FieldDescriptor::new(Field::EstimatedOffTime, "est_off"),
    FieldDescriptor::new(Field::EstimatedOnTime, "est_on"),
    FieldDescriptor::new(Field::EstimatedInTime, "est_in"),
];

/// CDM fields. The first entry is the capability gate for the whole group.
pub const CDM_FIELDS: [FieldDescriptor; 4] = [
    FieldDescriptor::new(Field::TargetOffBlockTime, "cdm/tobt"),
    FieldDescriptor::new(Field::TargetStartupApprovalTime, "cdm/tsat"),
    FieldDescriptor::new(Field::Runway, "cdm/runway"),
    FieldDescriptor::new(Field::StandardInstrumentDeparture, "cdm/sid"),
];

/// The CDM entry whose presence decides whether the producer supports CDM.
pub const CDM_LEAD: FieldDescriptor = CDM_FIELDS[0];

/// All fields in snapshot order: OFP first, then CDM.
pub fn all_fields() -> impl Iterator<Item = &'static FieldDescriptor> {
    OFP_FIELDS.iter().chain(CDM_FIELDS.iter())
}

/// Join the registry prefix and a relative entry name.
pub fn entry_name(prefix: &str, entry: &str) -> String {
    format!("{prefix}{entry}")
}
