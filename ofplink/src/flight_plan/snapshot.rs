//! Immutable flight-plan record and departure-line rendering.

use std::fmt;

use chrono::DateTime;

use super::fields::{all_fields, Field};

/// One flight plan as published by the producer at a given moment.
///
/// Produced by [`FlightPlanSync::load_if_newer`](super::FlightPlanSync::load_if_newer)
/// each time a change is detected. All fields are private and there are no
/// setters, so a snapshot held by the UI never changes underfoot.
///
/// Time fields hold Unix epoch seconds as text, exactly as published. CDM
/// fields are empty when the producer has no CDM support.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlightPlanSnapshot {
    sequence_id: u64,
    airline_code: String,
    flight_number: String,
    aircraft_type: String,
    destination: String,
    passenger_count: String,
    estimated_out_time: String,
    estimated_off_time: String,
    estimated_on_time: String,
    estimated_in_time: String,
    target_off_block_time: String,
    target_startup_approval_time: String,
    runway: String,
    standard_instrument_departure: String,
}

impl FlightPlanSnapshot {
    /// Start building a snapshot stamped with `sequence_id`.
    pub fn builder(sequence_id: u64) -> FlightPlanSnapshotBuilder {
        FlightPlanSnapshotBuilder {
            snapshot: Self {
                sequence_id,
                ..Self::default()
            },
        }
    }

    /// Locally assigned id, strictly increasing across snapshots of one sync.
    pub fn sequence_id(&self) -> u64 {
        self.sequence_id
    }

    pub fn airline_code(&self) -> &str {
        &self.airline_code
    }

    pub fn flight_number(&self) -> &str {
        &self.flight_number
    }

    pub fn aircraft_type(&self) -> &str {
        &self.aircraft_type
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn passenger_count(&self) -> &str {
        &self.passenger_count
    }

    pub fn estimated_out_time(&self) -> &str {
        &self.estimated_out_time
    }

    pub fn estimated_off_time(&self) -> &str {
        &self.estimated_off_time
    }

    pub fn estimated_on_time(&self) -> &str {
        &self.estimated_on_time
    }

    pub fn estimated_in_time(&self) -> &str {
        &self.estimated_in_time
    }

    /// TOBT, as published (typically `HHMM`).
    pub fn target_off_block_time(&self) -> &str {
        &self.target_off_block_time
    }

    /// TSAT, as published (typically `HHMM`).
    pub fn target_startup_approval_time(&self) -> &str {
        &self.target_startup_approval_time
    }

    pub fn runway(&self) -> &str {
        &self.runway
    }

    pub fn standard_instrument_departure(&self) -> &str {
        &self.standard_instrument_departure
    }

    /// Value of any field by slot.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::AirlineCode => &self.airline_code,
            Field::FlightNumber => &self.flight_number,
            Field::AircraftType => &self.aircraft_type,
            Field::Destination => &self.destination,
            Field::PassengerCount => &self.passenger_count,
            Field::EstimatedOutTime => &self.estimated_out_time,
            Field::EstimatedOffTime => &self.estimated_off_time,
            Field::EstimatedOnTime => &self.estimated_on_time,
            Field::EstimatedInTime => &self.estimated_in_time,
            Field::TargetOffBlockTime => &self.target_off_block_time,
            Field::TargetStartupApprovalTime => &self.target_startup_approval_time,
            Field::Runway => &self.runway,
            Field::StandardInstrumentDeparture => &self.standard_instrument_departure,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::AirlineCode => &mut self.airline_code,
            Field::FlightNumber => &mut self.flight_number,
            Field::AircraftType => &mut self.aircraft_type,
            Field::Destination => &mut self.destination,
            Field::PassengerCount => &mut self.passenger_count,
            Field::EstimatedOutTime => &mut self.estimated_out_time,
            Field::EstimatedOffTime => &mut self.estimated_off_time,
            Field::EstimatedOnTime => &mut self.estimated_on_time,
            Field::EstimatedInTime => &mut self.estimated_in_time,
            Field::TargetOffBlockTime => &mut self.target_off_block_time,
            Field::TargetStartupApprovalTime => &mut self.target_startup_approval_time,
            Field::Runway => &mut self.runway,
            Field::StandardInstrumentDeparture => &mut self.standard_instrument_departure,
        }
    }

    /// Every field as `(registry entry, value)`, OFP fields first.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        all_fields().map(move |d| (d.entry, self.get(d.field)))
    }

    /// Whether the snapshot carries CDM data. Decided by TOBT alone.
    pub fn has_cdm(&self) -> bool {
        !self.target_off_block_time.is_empty()
    }

    /// Render the one-line departure status shown by the UI.
    ///
    /// `DLH401 A359 TO KJFK OUT 0945 OFF 1000 RWY 25C SID MARUN7F`
    ///
    /// Without CDM the estimated OUT and OFF times are shown. With CDM they
    /// are replaced by TOBT (only when it differs from TSAT) and TSAT (only
    /// when set).
    pub fn render_departure_line(&self) -> String {
        let mut line = format!(
            "{}{} {} TO {}",
            self.airline_code, self.flight_number, self.aircraft_type, self.destination
        );

        if self.has_cdm() {
            if self.target_startup_approval_time != self.target_off_block_time {
                line.push_str(" TOBT ");
                line.push_str(&self.target_off_block_time);
            }
            if !self.target_startup_approval_time.is_empty() {
                line.push_str(" TSAT ");
                line.push_str(&self.target_startup_approval_time);
            }
        } else {
            line.push_str(" OUT ");
            line.push_str(&format_hhmm(&self.estimated_out_time));
            line.push_str(" OFF ");
            line.push_str(&format_hhmm(&self.estimated_off_time));
        }

        if !self.runway.is_empty() {
            line.push_str(" RWY ");
            line.push_str(&self.runway);
        }
        if !self.standard_instrument_departure.is_empty() {
            line.push_str(" SID ");
            line.push_str(&self.standard_instrument_departure);
        }

        line
    }
}

impl fmt::Display for FlightPlanSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_departure_line())
    }
}

/// Builder for [`FlightPlanSnapshot`]. Unset fields stay empty.
#[derive(Debug, Clone)]
pub struct FlightPlanSnapshotBuilder {
    snapshot: FlightPlanSnapshot,
}

impl FlightPlanSnapshotBuilder {
    /// Set one field.
    pub fn field(mut self, field: Field, value: impl Into<String>) -> Self {
        *self.snapshot.slot_mut(field) = value.into();
        self
    }

    /// Set one field in place (used when filling from a descriptor table).
    pub fn set(&mut self, field: Field, value: String) {
        *self.snapshot.slot_mut(field) = value;
    }

    pub fn build(self) -> FlightPlanSnapshot {
        self.snapshot
    }
}

/// Format epoch seconds given as text as a UTC `HHMM` clock time.
///
/// Parsing follows C `atol`: leading whitespace in the C `isspace` sense
/// (ASCII only, vertical tab included) and an optional sign are accepted,
/// digits are read up to the first non-digit, and text without a leading
/// number (including the empty string) counts as epoch 0.
///
/// ```
/// use ofplink::flight_plan::format_hhmm;
///
/// assert_eq!(format_hhmm("3600"), "0100");
/// assert_eq!(format_hhmm("1700000000"), "2213");
/// assert_eq!(format_hhmm(""), "0000");
/// assert_eq!(format_hhmm("soon"), "0000");
/// ```
pub fn format_hhmm(epoch_text: &str) -> String {
    let secs = parse_epoch_seconds(epoch_text);
    DateTime::from_timestamp(secs, 0)
        .or_else(|| DateTime::from_timestamp(0, 0))
        .map(|t| t.format("%H%M").to_string())
        .unwrap_or_else(|| "0000".to_string())
}

fn parse_epoch_seconds(text: &str) -> i64 {
    let text = text.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b');
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    let value = digits[..end].parse::<i64>().unwrap_or(0);
    if negative {
        -value
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ofp_only() -> FlightPlanSnapshotBuilder {
        FlightPlanSnapshot::builder(1)
            .field(Field::AirlineCode, "DLH")
            .field(Field::FlightNumber, "401")
            .field(Field::AircraftType, "A359")
            .field(Field::Destination, "KJFK")
    }

    #[test]
    fn test_no_cdm_renders_out_and_off() {
        let snapshot = ofp_only()
            .field(Field::EstimatedOutTime, "3600")
            .field(Field::EstimatedOffTime, "4500")
            .build();

        assert_eq!(
            snapshot.render_departure_line(),
            "DLH401 A359 TO KJFK OUT 0100 OFF 0115"
        );
    }

    #[test]
    fn test_no_cdm_has_no_cdm_tokens() {
        let line = ofp_only()
            .field(Field::EstimatedOutTime, "3600")
            .build()
            .render_departure_line();

        for token in [" TOBT ", " TSAT ", " RWY ", " SID "] {
            assert!(!line.contains(token), "unexpected {token:?} in {line:?}");
        }
        assert!(line.ends_with("OUT 0100 OFF 0000"));
    }

    #[test]
    fn test_cdm_equal_tobt_tsat_shows_tsat_only() {
        let line = ofp_only()
            .field(Field::EstimatedOutTime, "3600")
            .field(Field::EstimatedOffTime, "4500")
            .field(Field::TargetOffBlockTime, "1230")
            .field(Field::TargetStartupApprovalTime, "1230")
            .build()
            .render_departure_line();

        assert_eq!(line, "DLH401 A359 TO KJFK TSAT 1230");
    }

    #[test]
    fn test_cdm_different_tobt_tsat_shows_both() {
        let line = ofp_only()
            .field(Field::TargetOffBlockTime, "1230")
            .field(Field::TargetStartupApprovalTime, "1245")
            .build()
            .render_departure_line();

        assert_eq!(line, "DLH401 A359 TO KJFK TOBT 1230 TSAT 1245");
        assert!(!line.contains(" OFF "));
        assert!(!line.contains(" OUT "));
    }

    #[test]
    fn test_cdm_without_tsat_shows_tobt_only() {
        let line = ofp_only()
            .field(Field::TargetOffBlockTime, "1230")
            .build()
            .render_departure_line();

        assert_eq!(line, "DLH401 A359 TO KJFK TOBT 1230");
    }

    #[test]
    fn test_tsat_without_tobt_is_not_cdm() {
        let snapshot = ofp_only()
            .field(Field::TargetStartupApprovalTime, "1245")
            .build();

        assert!(!snapshot.has_cdm());
        assert_eq!(
            snapshot.render_departure_line(),
            "DLH401 A359 TO KJFK OUT 0000 OFF 0000"
        );
    }

    #[test]
    fn test_runway_and_sid() {
        let line = ofp_only()
            .field(Field::TargetOffBlockTime, "1230")
            .field(Field::TargetStartupApprovalTime, "1245")
            .field(Field::Runway, "25C")
            .field(Field::StandardInstrumentDeparture, "MARUN7F")
            .build()
            .render_departure_line();

        assert_eq!(
            line,
            "DLH401 A359 TO KJFK TOBT 1230 TSAT 1245 RWY 25C SID MARUN7F"
        );
    }

    #[test]
    fn test_runway_without_cdm_times() {
        let line = ofp_only()
            .field(Field::EstimatedOutTime, "0")
            .field(Field::Runway, "07R")
            .build()
            .render_departure_line();

        assert_eq!(line, "DLH401 A359 TO KJFK OUT 0000 OFF 0000 RWY 07R");
    }

    #[test]
    fn test_empty_out_time_renders_midnight() {
        let line = ofp_only().build().render_departure_line();
        assert!(line.contains("OUT 0000"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let snapshot = ofp_only()
            .field(Field::EstimatedOutTime, "1700000000")
            .field(Field::Runway, "25C")
            .build();

        assert_eq!(snapshot.render_departure_line(), snapshot.render_departure_line());
        assert_eq!(snapshot.to_string(), snapshot.render_departure_line());
    }

    #[test]
    fn test_format_hhmm_parsing() {
        assert_eq!(format_hhmm("0"), "0000");
        assert_eq!(format_hhmm("86399"), "2359");
        assert_eq!(format_hhmm("86400"), "0000");
        assert_eq!(format_hhmm("  3600"), "0100");
        assert_eq!(format_hhmm("+3600"), "0100");
        assert_eq!(format_hhmm("3600abc"), "0100");
        assert_eq!(format_hhmm("3600\n"), "0100");
        assert_eq!(format_hhmm("-60"), "2359");
        assert_eq!(format_hhmm("abc3600"), "0000");
        assert_eq!(format_hhmm("-"), "0000");
        assert_eq!(format_hhmm("\t\r\n3600"), "0100");
        assert_eq!(format_hhmm("\x0b3600"), "0100");
        assert_eq!(format_hhmm("\x0c3600"), "0100");
    }

    #[test]
    fn test_format_hhmm_non_ascii_whitespace_is_not_skipped() {
        assert_eq!(format_hhmm("\u{a0}3600"), "0000");
        assert_eq!(format_hhmm("\u{2003}3600"), "0000");
    }

    #[test]
    fn test_format_hhmm_out_of_range_falls_back_to_epoch() {
        assert_eq!(format_hhmm("99999999999999999"), "0000");
        assert_eq!(format_hhmm("999999999999999999999999"), "0000");
    }

    #[test]
    fn test_get_matches_accessors() {
        let snapshot = ofp_only()
            .field(Field::PassengerCount, "293")
            .field(Field::EstimatedInTime, "40000")
            .build();

        assert_eq!(snapshot.get(Field::PassengerCount), snapshot.passenger_count());
        assert_eq!(snapshot.get(Field::EstimatedInTime), "40000");
        assert_eq!(snapshot.get(Field::Destination), snapshot.destination());
    }

    #[test]
    fn test_fields_lists_all_entries_in_order() {
        let snapshot = ofp_only().build();
        let fields: Vec<_> = snapshot.fields().collect();

        assert_eq!(fields.len(), 13);
        assert_eq!(fields[0], ("icao_airline", "DLH"));
        assert_eq!(fields[3], ("destination", "KJFK"));
        assert_eq!(fields[12], ("cdm/sid", ""));
    }

    #[test]
    fn test_builder_sets_sequence_id() {
        let snapshot = FlightPlanSnapshot::builder(42).build();
        assert_eq!(snapshot.sequence_id(), 42);
        assert_eq!(snapshot.airline_code(), "");
    }
}
