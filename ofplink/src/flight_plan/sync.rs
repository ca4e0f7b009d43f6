//! Change detection and snapshot assembly.

use std::sync::Arc;

use crate::config::SyncConfig;
use crate::log::Logger;
use crate::registry::{DataRegistry, RegistryHandle};
use crate::{log_debug, log_info, log_warn};

use super::binding::{BoundField, RegistryBinding};
use super::snapshot::{FlightPlanSnapshot, FlightPlanSnapshotBuilder};

/// Polls the producer's registry entries and yields a new snapshot whenever
/// the producer reports a change.
///
/// Change detection relies on the producer's two sequence counters (one for
/// the OFP fields, one for the CDM fields): a snapshot is built when either
/// differs from the value seen at the previous accepted change. Field
/// contents are never compared.
///
/// The sync is meant to be created once by the host and polled from its
/// update callback:
///
/// ```
/// use std::sync::Arc;
/// use ofplink::flight_plan::FlightPlanSync;
/// use ofplink::log::NoOpLogger;
/// use ofplink::registry::MemoryRegistry;
///
/// let registry = Arc::new(MemoryRegistry::new());
/// registry.set_int("sbh/stale", 0);
/// registry.set_int("sbh/seqno", 1);
/// registry.set_str("sbh/icao_airline", "DLH");
///
/// let mut sync = FlightPlanSync::new(registry.clone(), Arc::new(NoOpLogger));
/// let snapshot = sync.load_if_newer().expect("first change");
/// assert_eq!(snapshot.airline_code(), "DLH");
/// assert!(sync.load_if_newer().is_none());
/// ```
pub struct FlightPlanSync<R: DataRegistry> {
    registry: R,
    binding: RegistryBinding,
    last_ofp_sequence: i32,
    last_cdm_sequence: i32,
    local_sequence: u64,
    logger: Arc<dyn Logger>,
}

impl<R: DataRegistry> FlightPlanSync<R> {
    /// Create a sync reading entries under the default `sbh/` prefix.
    pub fn new(registry: R, logger: Arc<dyn Logger>) -> Self {
        Self::with_config(registry, &SyncConfig::default(), logger)
    }

    pub fn with_config(registry: R, config: &SyncConfig, logger: Arc<dyn Logger>) -> Self {
        Self {
            registry,
            binding: RegistryBinding::new(config.prefix(), Arc::clone(&logger)),
            last_ofp_sequence: 0,
            last_cdm_sequence: 0,
            local_sequence: 0,
            logger,
        }
    }

    /// Return a fresh snapshot if the producer changed anything since the
    /// last accepted change, `None` otherwise.
    ///
    /// `None` also covers "producer not loaded"; in that case every later
    /// call returns `None` immediately without touching the registry.
    pub fn load_if_newer(&mut self) -> Option<FlightPlanSnapshot> {
        if self.binding.is_unavailable() || !self.binding.ensure_bound(&self.registry) {
            return None;
        }
        let handles = self.binding.handles()?;

        let ofp_sequence = read_counter(&self.registry, handles.ofp_sequence);
        let cdm_sequence = read_counter(&self.registry, handles.cdm_sequence);
        if ofp_sequence == self.last_ofp_sequence && cdm_sequence == self.last_cdm_sequence {
            return None;
        }

        self.last_ofp_sequence = ofp_sequence;
        self.last_cdm_sequence = cdm_sequence;
        self.local_sequence += 1;

        let mut builder = FlightPlanSnapshot::builder(self.local_sequence);
        fetch_group(&self.registry, &handles.ofp_fields, &mut builder);
        if let Some(cdm_fields) = &handles.cdm_fields {
            fetch_group(&self.registry, cdm_fields, &mut builder);
        }
        let snapshot = builder.build();

        if self.registry.read_int(handles.stale) != 0 {
            log_warn!(self.logger, "flight plan producer data may be stale");
        }

        log_info!(
            self.logger,
            "flight plan changed: seqno {}, cdm {}",
            ofp_sequence,
            cdm_sequence
        );
        for (entry, value) in snapshot.fields() {
            log_debug!(self.logger, " {}: '{}'", entry, value);
        }

        Some(snapshot)
    }

    /// True once the producer was found missing; final for this sync.
    pub fn is_unavailable(&self) -> bool {
        self.binding.is_unavailable()
    }

    /// Whether CDM support was detected at bind time.
    pub fn has_cdm(&self) -> bool {
        self.binding.has_cdm()
    }

    /// Sequence counters seen at the last accepted change, `(ofp, cdm)`.
    pub fn last_sequences(&self) -> (i32, i32) {
        (self.last_ofp_sequence, self.last_cdm_sequence)
    }

    /// Number of snapshots produced so far.
    pub fn snapshots_produced(&self) -> u64 {
        self.local_sequence
    }

    pub fn binding(&self) -> &RegistryBinding {
        &self.binding
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }
}

impl<R: DataRegistry> std::fmt::Debug for FlightPlanSync<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlightPlanSync")
            .field("binding", &self.binding)
            .field("last_ofp_sequence", &self.last_ofp_sequence)
            .field("last_cdm_sequence", &self.last_cdm_sequence)
            .field("local_sequence", &self.local_sequence)
            .finish_non_exhaustive()
    }
}

fn read_counter<R: DataRegistry + ?Sized>(registry: &R, handle: Option<RegistryHandle>) -> i32 {
    handle.map_or(0, |h| registry.read_int(h))
}

fn fetch_group<R: DataRegistry + ?Sized>(
    registry: &R,
    fields: &[BoundField],
    builder: &mut FlightPlanSnapshotBuilder,
) {
    for field in fields {
        let value = field
            .handle
            .map(|h| fetch_text(registry, h))
            .unwrap_or_default();
        builder.set(field.descriptor.field, value);
    }
}

/// Read a byte entry as text using the size-probe / read protocol.
///
/// The buffer has room for one byte more than reported so a producer that
/// NUL-terminates its value and one that does not yield the same text; the
/// value is cut at the first NUL either way.
pub fn fetch_text<R: DataRegistry + ?Sized>(registry: &R, handle: RegistryHandle) -> String {
    let len = registry.query_len(handle);
    if len == 0 {
        return String::new();
    }

    let mut buf = vec![0u8; len + 1];
    let read = registry.read_into(handle, &mut buf[..len]);
    buf.truncate(read.min(len));
    if let Some(nul) = buf.iter().position(|&b| b == 0) {
        buf.truncate(nul);
    }

    String::from_utf8_lossy(&buf).into_owned()
}
