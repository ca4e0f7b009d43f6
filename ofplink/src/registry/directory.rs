//! File-per-entry registry rooted at a directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use parking_lot::RwLock;

use super::error::RegistryError;
use super::r#trait::{DataRegistry, RegistryHandle};

/// Registry whose entries are files below a root directory.
///
/// The entry `sbh/cdm/tobt` lives at `<root>/sbh/cdm/tobt`. A producer
/// publishes a value by rewriting the file; integer entries hold decimal
/// text. One trailing line ending is not part of the value, so files written
/// with `echo` behave like values written with `printf`.
///
/// [`find`](DataRegistry::find) succeeds only for files that exist at lookup
/// time. Files that disappear afterwards read as empty / zero.
///
/// [`query_len`](DataRegistry::query_len) reads the file once and keeps the
/// bytes; the next [`read_into`](DataRegistry::read_into) on the same handle
/// copies from them. A producer rewriting the file between the two calls
/// cannot leave a value cut to the old length.
#[derive(Debug)]
pub struct DirectoryRegistry {
    root: PathBuf,
    slots: RwLock<Vec<Slot>>,
}

#[derive(Debug)]
struct Slot {
    path: PathBuf,
    /// Value read by the last `query_len`, consumed by the next `read_into`.
    probed: Option<Vec<u8>>,
}

impl DirectoryRegistry {
    /// Open a registry rooted at `root`, which must be an existing directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, RegistryError> {
        let root = root.into();
        let metadata = fs::metadata(&root).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                RegistryError::NotADirectory(root.clone())
            } else {
                RegistryError::Io {
                    path: root.clone(),
                    source,
                }
            }
        })?;
        if !metadata.is_dir() {
            return Err(RegistryError::NotADirectory(root));
        }

        Ok(Self {
            root,
            slots: RwLock::new(Vec::new()),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map an entry name to its file. Names that would escape the root are
    /// rejected.
    fn entry_path(&self, name: &str) -> Option<PathBuf> {
        let relative = Path::new(name);
        let confined = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
        if name.is_empty() || !confined {
            return None;
        }
        Some(self.root.join(relative))
    }

    fn slot_path(&self, handle: RegistryHandle) -> Option<PathBuf> {
        self.slots
            .read()
            .get(handle.index())
            .map(|slot| slot.path.clone())
    }

    fn read_value(&self, handle: RegistryHandle) -> Vec<u8> {
        let Some(path) = self.slot_path(handle) else {
            return Vec::new();
        };
        let mut bytes = fs::read(path).unwrap_or_default();
        strip_line_ending(&mut bytes);
        bytes
    }

    fn take_probed(&self, handle: RegistryHandle) -> Option<Vec<u8>> {
        self.slots
            .write()
            .get_mut(handle.index())
            .and_then(|slot| slot.probed.take())
    }
}

fn strip_line_ending(bytes: &mut Vec<u8>) {
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
    }
}

impl DataRegistry for DirectoryRegistry {
    fn find(&self, name: &str) -> Option<RegistryHandle> {
        let path = self.entry_path(name)?;
        if !path.is_file() {
            return None;
        }

        let mut slots = self.slots.write();
        if let Some(index) = slots.iter().position(|slot| slot.path == path) {
            return Some(RegistryHandle::new(index));
        }
        slots.push(Slot { path, probed: None });
        Some(RegistryHandle::new(slots.len() - 1))
    }

    fn read_int(&self, handle: RegistryHandle) -> i32 {
        let bytes = self.read_value(handle);
        std::str::from_utf8(&bytes)
            .ok()
            .and_then(|text| text.trim().parse().ok())
            .unwrap_or(0)
    }

    fn query_len(&self, handle: RegistryHandle) -> usize {
        let bytes = self.read_value(handle);
        let len = bytes.len();
        if let Some(slot) = self.slots.write().get_mut(handle.index()) {
            slot.probed = (len > 0).then_some(bytes);
        }
        len
    }

    fn read_into(&self, handle: RegistryHandle, buf: &mut [u8]) -> usize {
        let bytes = self
            .take_probed(handle)
            .unwrap_or_else(|| self.read_value(handle));
        let n = bytes.len().min(buf.len());
        buf[..n].copy_from_slice(&bytes[..n]);
        n
    }
}
