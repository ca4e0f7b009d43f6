//! In-process registry backed by a hash map.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::RwLock;

use super::r#trait::{DataRegistry, RegistryHandle};

/// A value stored in a [`MemoryRegistry`] entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryValue {
    Int(i32),
    Bytes(Vec<u8>),
}

#[derive(Debug, Default)]
struct Entries {
    values: HashMap<String, RegistryValue>,
    /// Handle index -> entry name. Slots are never reused.
    slots: Vec<String>,
    handles: HashMap<String, RegistryHandle>,
}

/// Thread-safe in-memory registry.
///
/// The producer side writes with [`set_int`](Self::set_int),
/// [`set_bytes`](Self::set_bytes) and [`set_str`](Self::set_str); the sync
/// reads through [`DataRegistry`]. Share it between both sides with an
/// `Arc<MemoryRegistry>`.
///
/// Handles are assigned on the first successful [`find`](DataRegistry::find)
/// and stay stable even if the entry is later removed and re-added.
///
/// ```
/// use ofplink::registry::{DataRegistry, MemoryRegistry};
///
/// let registry = MemoryRegistry::new();
/// registry.set_str("sbh/destination", "EDDF");
///
/// let handle = registry.find("sbh/destination").unwrap();
/// assert_eq!(registry.query_len(handle), 4);
/// assert!(registry.find("sbh/origin").is_none());
/// ```
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    entries: RwLock<Entries>,
    accesses: AtomicUsize,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish an integer entry.
    pub fn set_int(&self, name: &str, value: i32) {
        self.set(name, RegistryValue::Int(value));
    }

    /// Publish a byte entry.
    pub fn set_bytes(&self, name: &str, value: impl Into<Vec<u8>>) {
        self.set(name, RegistryValue::Bytes(value.into()));
    }

    /// Publish a text entry (stored as its UTF-8 bytes, not NUL-terminated).
    pub fn set_str(&self, name: &str, value: &str) {
        self.set_bytes(name, value.as_bytes());
    }

    /// Remove an entry. Existing handles to it read as empty / zero.
    pub fn remove(&self, name: &str) -> Option<RegistryValue> {
        self.entries.write().values.remove(name)
    }

    /// Current value of an entry, bypassing the handle protocol.
    pub fn get(&self, name: &str) -> Option<RegistryValue> {
        self.entries.read().values.get(name).cloned()
    }

    /// Number of [`DataRegistry`] calls made against this registry so far.
    pub fn access_count(&self) -> usize {
        self.accesses.load(Ordering::Relaxed)
    }

    fn set(&self, name: &str, value: RegistryValue) {
        self.entries.write().values.insert(name.to_string(), value);
    }

    fn with_value<T>(&self, handle: RegistryHandle, f: impl FnOnce(&RegistryValue) -> T) -> Option<T> {
        self.accesses.fetch_add(1, Ordering::Relaxed);
        let entries = self.entries.read();
        let name = entries.slots.get(handle.index())?;
        entries.values.get(name).map(f)
    }
}

impl DataRegistry for MemoryRegistry {
    fn find(&self, name: &str) -> Option<RegistryHandle> {
        self.accesses.fetch_add(1, Ordering::Relaxed);
        let mut entries = self.entries.write();
        if !entries.values.contains_key(name) {
            return None;
        }
        if let Some(handle) = entries.handles.get(name) {
            return Some(*handle);
        }

        let handle = RegistryHandle::new(entries.slots.len());
        entries.slots.push(name.to_string());
        entries.handles.insert(name.to_string(), handle);
        Some(handle)
    }

    fn read_int(&self, handle: RegistryHandle) -> i32 {
        self.with_value(handle, |value| match value {
            RegistryValue::Int(v) => *v,
            RegistryValue::Bytes(_) => 0,
        })
        .unwrap_or(0)
    }

    fn query_len(&self, handle: RegistryHandle) -> usize {
        self.with_value(handle, |value| match value {
            RegistryValue::Bytes(bytes) => bytes.len(),
            RegistryValue::Int(_) => 0,
        })
        .unwrap_or(0)
    }

    fn read_into(&self, handle: RegistryHandle, buf: &mut [u8]) -> usize {
        self.with_value(handle, |value| match value {
            RegistryValue::Bytes(bytes) => {
                let n = bytes.len().min(buf.len());
                buf[..n].copy_from_slice(&bytes[..n]);
                n
            }
            RegistryValue::Int(_) => 0,
        })
        .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_missing_entry() {
        let registry = MemoryRegistry::new();
        assert!(registry.find("sbh/stale").is_none());
    }

    #[test]
    fn test_handles_are_stable() {
        let registry = MemoryRegistry::new();
        registry.set_int("sbh/seqno", 1);
        registry.set_int("sbh/stale", 0);

        let seqno = registry.find("sbh/seqno").unwrap();
        let stale = registry.find("sbh/stale").unwrap();
        assert_ne!(seqno, stale);
        assert_eq!(registry.find("sbh/seqno"), Some(seqno));
    }

    #[test]
    fn test_read_int_follows_updates() {
        let registry = MemoryRegistry::new();
        registry.set_int("sbh/seqno", 4);
        let handle = registry.find("sbh/seqno").unwrap();
        assert_eq!(registry.read_int(handle), 4);

        registry.set_int("sbh/seqno", 5);
        assert_eq!(registry.read_int(handle), 5);
    }

    #[test]
    fn test_type_mismatch_reads_as_zero() {
        let registry = MemoryRegistry::new();
        registry.set_str("sbh/destination", "EDDF");
        registry.set_int("sbh/seqno", 9);

        let dest = registry.find("sbh/destination").unwrap();
        let seqno = registry.find("sbh/seqno").unwrap();
        assert_eq!(registry.read_int(dest), 0);
        assert_eq!(registry.query_len(seqno), 0);
        assert_eq!(registry.read_into(seqno, &mut [0u8; 4]), 0);
    }

    #[test]
    fn test_read_into_truncates_to_buffer() {
        let registry = MemoryRegistry::new();
        registry.set_str("sbh/icao_airline", "DLH");
        let handle = registry.find("sbh/icao_airline").unwrap();

        let mut buf = [0u8; 2];
        assert_eq!(registry.read_into(handle, &mut buf), 2);
        assert_eq!(&buf, b"DL");

        let mut buf = [0xffu8; 5];
        assert_eq!(registry.read_into(handle, &mut buf), 3);
        assert_eq!(&buf[..3], b"DLH");
        assert_eq!(buf[3], 0xff);
    }

    #[test]
    fn test_removed_entry_reads_empty() {
        let registry = MemoryRegistry::new();
        registry.set_str("sbh/cdm/sid", "MARUN7F");
        let handle = registry.find("sbh/cdm/sid").unwrap();

        assert_eq!(
            registry.remove("sbh/cdm/sid"),
            Some(RegistryValue::Bytes(b"MARUN7F".to_vec()))
        );
        assert_eq!(registry.query_len(handle), 0);
        assert!(registry.find("sbh/cdm/sid").is_none());

        registry.set_str("sbh/cdm/sid", "TOBAK7F");
        assert_eq!(registry.find("sbh/cdm/sid"), Some(handle));
        assert_eq!(registry.query_len(handle), 7);
    }

    #[test]
    fn test_access_count() {
        let registry = MemoryRegistry::new();
        registry.set_int("sbh/seqno", 1);
        assert_eq!(registry.access_count(), 0);

        let handle = registry.find("sbh/seqno").unwrap();
        registry.read_int(handle);
        registry.query_len(handle);
        assert_eq!(registry.access_count(), 3);

        // Producer-side writes are not counted
        registry.set_int("sbh/seqno", 2);
        assert_eq!(registry.access_count(), 3);
    }
}
