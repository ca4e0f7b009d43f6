//! Registry capability trait.

use std::sync::Arc;

/// Opaque, stable reference to a resolved registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegistryHandle(usize);

impl RegistryHandle {
    /// Wrap a registry-specific slot index.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// The registry-specific slot index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Read side of a shared named-value registry.
///
/// All methods take `&self`: registries are shared with the producer and use
/// interior synchronization where they need it. None of them may block for
/// longer than a local read; the sync calls them from the host's frame
/// callback.
pub trait DataRegistry: Send + Sync {
    /// Resolve `name` to a handle, or `None` if no such entry exists.
    fn find(&self, name: &str) -> Option<RegistryHandle>;

    /// Read an integer entry. Unknown handles and non-integer entries read as 0.
    fn read_int(&self, handle: RegistryHandle) -> i32;

    /// Current length in bytes of a byte entry (the zero-length probe read).
    fn query_len(&self, handle: RegistryHandle) -> usize;

    /// Copy up to `buf.len()` bytes of a byte entry into `buf`, starting at
    /// offset zero. Returns the number of bytes written.
    fn read_into(&self, handle: RegistryHandle, buf: &mut [u8]) -> usize;
}

impl<R: DataRegistry + ?Sized> DataRegistry for Arc<R> {
    fn find(&self, name: &str) -> Option<RegistryHandle> {
        (**self).find(name)
    }

    fn read_int(&self, handle: RegistryHandle) -> i32 {
        (**self).read_int(handle)
    }

    fn query_len(&self, handle: RegistryHandle) -> usize {
        (**self).query_len(handle)
    }

    fn read_into(&self, handle: RegistryHandle, buf: &mut [u8]) -> usize {
        (**self).read_into(handle, buf)
    }
}

impl<R: DataRegistry + ?Sized> DataRegistry for &R {
    fn find(&self, name: &str) -> Option<RegistryHandle> {
        (**self).find(name)
    }

    fn read_int(&self, handle: RegistryHandle) -> i32 {
        (**self).read_int(handle)
    }

    fn query_len(&self, handle: RegistryHandle) -> usize {
        (**self).query_len(handle)
    }

    fn read_into(&self, handle: RegistryHandle, buf: &mut [u8]) -> usize {
        (**self).read_into(handle, buf)
    }
}
