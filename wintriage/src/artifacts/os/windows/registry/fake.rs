/**
 * In-memory hive tree for decoder tests. Key and value name lookups are case
 * insensitive, matching real Registry semantics.
 */
use super::error::RegistryError;
use super::reader::{RegistryKey, RegistryReader};
use common::windows::{KeyValue, RegData, RegDataType};

#[derive(Debug, Clone, Default)]
pub(crate) struct FakeKey {
    name: String,
    last_modified: u64,
    subkeys: Vec<FakeKey>,
    values: Vec<KeyValue>,
}

impl FakeKey {
    pub(crate) fn new(name: &str) -> FakeKey {
        FakeKey {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub(crate) fn timestamp(mut self, filetime: u64) -> FakeKey {
        self.last_modified = filetime;
        self
    }

    pub(crate) fn child(mut self, key: FakeKey) -> FakeKey {
        self.subkeys.push(key);
        self
    }

    pub(crate) fn text_value(mut self, name: &str, data: &str) -> FakeKey {
        self.values.push(KeyValue {
            value: name.to_string(),
            data: RegData::Text(data.to_string()),
            data_type: RegDataType::RegSz,
        });
        self
    }

    pub(crate) fn binary_value(mut self, name: &str, data: &[u8]) -> FakeKey {
        self.values.push(KeyValue {
            value: name.to_string(),
            data: RegData::Binary(data.to_vec()),
            data_type: RegDataType::RegBinary,
        });
        self
    }

    pub(crate) fn value_entry(mut self, entry: KeyValue) -> FakeKey {
        self.values.push(entry);
        self
    }
}

#[derive(Debug, Default)]
pub(crate) struct FakeHive {
    root: FakeKey,
}

impl FakeHive {
    pub(crate) fn new(keys: Vec<FakeKey>) -> FakeHive {
        FakeHive {
            root: FakeKey {
                subkeys: keys,
                ..Default::default()
            },
        }
    }
}

impl RegistryReader for FakeHive {
    type Key = FakeKey;

    fn open_key(&self, path: &str) -> Result<FakeKey, RegistryError> {
        let mut current = &self.root;
        for part in path.split('\\') {
            current = current
                .subkeys
                .iter()
                .find(|key| key.name.eq_ignore_ascii_case(part))
                .ok_or(RegistryError::KeyNotFound)?;
        }
        Ok(current.clone())
    }
}

impl RegistryKey for FakeKey {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn last_modified(&self) -> u64 {
        self.last_modified
    }

    fn subkeys(&self) -> Result<Vec<FakeKey>, RegistryError> {
        Ok(self.subkeys.clone())
    }

    fn subkey(&self, name: &str) -> Result<FakeKey, RegistryError> {
        self.subkeys
            .iter()
            .find(|key| key.name.eq_ignore_ascii_case(name))
            .cloned()
            .ok_or(RegistryError::KeyNotFound)
    }

    fn value(&self, name: &str) -> Result<KeyValue, RegistryError> {
        self.values
            .iter()
            .find(|entry| entry.value.eq_ignore_ascii_case(name))
            .cloned()
            .ok_or(RegistryError::ValueNotFound)
    }

    fn values(&self) -> Result<Vec<KeyValue>, RegistryError> {
        Ok(self.values.clone())
    }
}

/// A hive whose container cannot be read at all
#[derive(Debug)]
pub(crate) struct UnreadableHive;

impl RegistryReader for UnreadableHive {
    type Key = FakeKey;

    fn open_key(&self, _path: &str) -> Result<FakeKey, RegistryError> {
        Err(RegistryError::ReadRegistry)
    }
}

#[cfg(test)]
mod tests {
    use super::{FakeHive, FakeKey};
    use crate::artifacts::os::windows::registry::error::RegistryError;
    use crate::artifacts::os::windows::registry::reader::{RegistryKey, RegistryReader};

    #[test]
    fn test_open_key() {
        let hive = FakeHive::new(vec![
            FakeKey::new("ControlSet001").child(FakeKey::new("Enum").child(FakeKey::new("USB"))),
        ]);
        let key = hive.open_key("ControlSet001\\Enum\\USB").unwrap();
        assert_eq!(key.name(), "USB");
    }

    #[test]
    fn test_open_key_is_case_insensitive() {
        let hive = FakeHive::new(vec![
            FakeKey::new("ControlSet001").child(FakeKey::new("Enum").child(FakeKey::new("USB"))),
        ]);
        assert!(hive.open_key("controlset001\\enum\\usb").is_ok());
    }

    #[test]
    fn test_open_key_not_found() {
        let hive = FakeHive::new(vec![FakeKey::new("ControlSet001")]);
        let result = hive.open_key("ControlSet001\\Enum\\USBSTOR");
        assert_eq!(result.unwrap_err(), RegistryError::KeyNotFound);
    }
}
