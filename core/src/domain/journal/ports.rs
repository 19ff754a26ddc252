use crate::domain::common::entities::app_errors::CoreError;

/// Opaque key/value byte store the journal persists into.
#[cfg_attr(test, mockall::automock)]
pub trait PersistedStore: Send + Sync {
    /// Returns `None` when nothing was ever written under `key`.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, CoreError>;

    /// Replaces the whole value stored under `key`.
    fn write(&self, key: &str, value: &[u8]) -> Result<(), CoreError>;
}
