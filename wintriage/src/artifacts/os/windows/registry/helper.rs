use super::reader::RegistryKey;
use common::windows::RegData;

/// Read a named value as text. `None` when the value is absent or not a string type
pub(crate) fn string_value<K: RegistryKey>(key: &K, name: &str) -> Option<String> {
    match key.value(name) {
        Ok(entry) => match entry.data {
            RegData::Text(text) => Some(text),
            _ => None,
        },
        Err(_err) => None,
    }
}

/// Read a named value as text with a fallback default. Value absence never aborts a walk
pub(crate) fn string_value_or<K: RegistryKey>(key: &K, name: &str, default: &str) -> String {
    string_value(key, name).unwrap_or_else(|| default.to_string())
}
