//! One-shot resolution of registry entry names to handles.

use std::sync::Arc;

use crate::log::Logger;
use crate::registry::{DataRegistry, RegistryHandle};
use crate::{log_debug, log_info};

use super::fields::{
    entry_name, FieldDescriptor, CDM_FIELDS, CDM_LEAD, CDM_SEQUENCE_ENTRY, OFP_FIELDS,
    OFP_SEQUENCE_ENTRY, STALE_ENTRY,
};

/// A field descriptor together with its resolved handle.
///
/// The handle is `None` when an individual entry was missing at bind time;
/// such a field always reads as empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundField {
    pub descriptor: FieldDescriptor,
    pub handle: Option<RegistryHandle>,
}

/// Handles resolved by a successful bind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundHandles {
    pub stale: RegistryHandle,
    pub ofp_sequence: Option<RegistryHandle>,
    pub cdm_sequence: Option<RegistryHandle>,
    pub ofp_fields: Vec<BoundField>,
    /// `None` when the producer has no CDM support.
    pub cdm_fields: Option<Vec<BoundField>>,
}

impl BoundHandles {
    pub fn has_cdm(&self) -> bool {
        self.cdm_fields.is_some()
    }
}

/// Lifecycle of the binding.
///
/// `Unbound` moves to `Bound` or `Unavailable` exactly once; both are final.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingState {
    Unbound,
    Bound(BoundHandles),
    Unavailable,
}

/// Lazily resolves the producer's registry entries on first use.
///
/// If the producer is not loaded when the first bind happens the binding
/// becomes permanently unavailable; a producer loaded later is not picked
/// up. The same holds for CDM support: it is detected once, at bind time.
pub struct RegistryBinding {
    prefix: String,
    state: BindingState,
    logger: Arc<dyn Logger>,
}

impl RegistryBinding {
    pub fn new(prefix: impl Into<String>, logger: Arc<dyn Logger>) -> Self {
        Self {
            prefix: prefix.into(),
            state: BindingState::Unbound,
            logger,
        }
    }

    /// Bind on first call; afterwards return the cached outcome.
    ///
    /// Returns `true` when handles are available. Once unavailable, returns
    /// `false` without touching the registry.
    pub fn ensure_bound<R: DataRegistry + ?Sized>(&mut self, registry: &R) -> bool {
        if matches!(self.state, BindingState::Unbound) {
            self.state = self.bind(registry);
        }
        matches!(self.state, BindingState::Bound(_))
    }

    /// Resolved handles, if bound.
    pub fn handles(&self) -> Option<&BoundHandles> {
        match &self.state {
            BindingState::Bound(handles) => Some(handles),
            _ => None,
        }
    }

    pub fn state(&self) -> &BindingState {
        &self.state
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self.state, BindingState::Unavailable)
    }

    /// Whether CDM entries were found at bind time. `false` while unbound.
    pub fn has_cdm(&self) -> bool {
        self.handles().is_some_and(BoundHandles::has_cdm)
    }

    /// The single `Unbound` transition.
    fn bind<R: DataRegistry + ?Sized>(&self, registry: &R) -> BindingState {
        let find = |entry: &str| registry.find(&entry_name(&self.prefix, entry));

        let Some(stale) = find(STALE_ENTRY) else {
            log_info!(
                self.logger,
                "flight plan producer is not loaded ({}{} missing), giving up",
                self.prefix,
                STALE_ENTRY
            );
            return BindingState::Unavailable;
        };

        let bind_group = |group: &[FieldDescriptor]| -> Vec<BoundField> {
            group
                .iter()
                .map(|descriptor| BoundField {
                    descriptor: *descriptor,
                    handle: find(descriptor.entry),
                })
                .collect()
        };

        let ofp_fields = bind_group(&OFP_FIELDS);
        let cdm_fields = match find(CDM_LEAD.entry) {
            Some(_) => Some(bind_group(&CDM_FIELDS)),
            None => {
                log_debug!(self.logger, "producer publishes no CDM data");
                None
            }
        };

        BindingState::Bound(BoundHandles {
            stale,
            ofp_sequence: find(OFP_SEQUENCE_ENTRY),
            cdm_sequence: find(CDM_SEQUENCE_ENTRY),
            ofp_fields,
            cdm_fields,
        })
    }
}

impl std::fmt::Debug for RegistryBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryBinding")
            .field("prefix", &self.prefix)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
