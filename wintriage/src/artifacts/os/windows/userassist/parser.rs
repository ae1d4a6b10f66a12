/**
 * Windows `UserAssist` is a Registry artifact that records applications executed via Windows Explorer.
 * Entry names are typically ROT13 encoded (though this can be disabled) and the execution
 * counters are packed binary data in one of two layouts.
 *
 * References:
 * `https://winreg-kb.readthedocs.io/en/latest/sources/explorer-keys/User-assist.html`
 */
use super::assist::{parse_assist_value, rot_decode};
use super::error::UserAssistError;
use crate::artifacts::os::windows::registry::error::RegistryError;
use crate::artifacts::os::windows::registry::reader::{RegistryKey, RegistryReader};
use crate::utils::time::{compare_timestamps_desc, filetime_to_iso};
use common::windows::{RegData, UserAssistEntry};
use log::{error, info, warn};

const USERASSIST_PATH: &str = "Software\\Microsoft\\Windows\\CurrentVersion\\Explorer\\UserAssist";

/// Parse `UserAssist` entries from a NTUSER.DAT hive. A hive without the `UserAssist`
/// key is an empty finding, not an error. Entries that were never executed are kept
pub fn grab_userassist<R: RegistryReader>(
    reader: &R,
) -> Result<Vec<UserAssistEntry>, UserAssistError> {
    let assist_key = match reader.open_key(USERASSIST_PATH) {
        Ok(result) => result,
        Err(RegistryError::KeyNotFound) => {
            info!("[userassist] No UserAssist key in hive");
            return Ok(Vec::new());
        }
        Err(err) => {
            error!("[userassist] Could not open user hive: {err:?}");
            return Err(UserAssistError::RegistryFile);
        }
    };

    let guid_keys = match assist_key.subkeys() {
        Ok(result) => result,
        Err(err) => {
            error!("[userassist] Could not list UserAssist GUID keys: {err:?}");
            return Err(UserAssistError::RegistryFile);
        }
    };

    let mut entries: Vec<UserAssistEntry> = Vec::new();
    for guid_key in guid_keys {
        // GUID containers without a Count subkey hold no execution data
        let count_key = match guid_key.subkey("Count") {
            Ok(result) => result,
            Err(_err) => continue,
        };
        get_entries(&count_key, &guid_key.name(), &mut entries);
    }

    entries.sort_by(|a, b| compare_timestamps_desc(&a.last_execution, &b.last_execution));
    Ok(entries)
}

/// Decode every value under a `Count` subkey except the key's default value
fn get_entries<K: RegistryKey>(
    count_key: &K,
    folder_guid: &str,
    entries: &mut Vec<UserAssistEntry>,
) {
    let values = match count_key.values() {
        Ok(result) => result,
        Err(err) => {
            warn!("[userassist] Could not read Count values under {folder_guid}: {err:?}");
            return;
        }
    };

    for value in values {
        if value.value.is_empty() || value.value.eq_ignore_ascii_case("(default)") {
            continue;
        }
        let assist_data = match &value.data {
            RegData::Binary(result) => result,
            _ => {
                warn!("[userassist] Value {} is not binary data", value.value);
                continue;
            }
        };

        let counts = match parse_assist_value(assist_data) {
            Some(result) => result,
            None => continue,
        };

        entries.push(UserAssistEntry {
            path: rot_decode(&value.value),
            rot_path: value.value.clone(),
            folder_guid: folder_guid.to_string(),
            run_count: counts.run_count,
            focus_count: counts.focus_count,
            last_execution: filetime_to_iso(&counts.filetime),
        });
    }
}
