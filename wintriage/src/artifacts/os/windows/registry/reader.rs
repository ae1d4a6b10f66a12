/**
 * The Registry hive container format is not parsed here. Decoders consume a hive
 * through these capability traits so they can run against any hive backend,
 * including an in-memory tree for tests.
 */
use super::error::RegistryError;
use common::windows::KeyValue;

/// Read-only handle to a Registry hive
pub trait RegistryReader {
    type Key: RegistryKey;

    /// Open the key at a `\`-separated path relative to the hive root.
    /// Key absence must be reported as `RegistryError::KeyNotFound`. Any other
    /// error is treated by decoders as a container-level failure
    fn open_key(&self, path: &str) -> Result<Self::Key, RegistryError>;
}

/// One key in the hive tree
pub trait RegistryKey: Sized {
    /// Name of the key itself
    fn name(&self) -> String;

    /// Last write time of the key as a raw FILETIME value
    fn last_modified(&self) -> u64;

    /// Child keys in hive order
    fn subkeys(&self) -> Result<Vec<Self>, RegistryError>;

    /// Child key by name. Absence is `RegistryError::KeyNotFound`
    fn subkey(&self, name: &str) -> Result<Self, RegistryError>;

    /// Named value. Absence is `RegistryError::ValueNotFound`.
    /// The key's default value has an empty name
    fn value(&self, name: &str) -> Result<KeyValue, RegistryError>;

    /// All values of the key, default value included
    fn values(&self) -> Result<Vec<KeyValue>, RegistryError>;
}
