/**
 * Network connection history from the `NetworkList\Profiles` subtree of a SOFTWARE hive.
 * Each profile key is named by GUID and records the SSID (`ProfileName`) and first
 * connection time (`DateCreated`, a binary SYSTEMTIME on most systems).
 */
use super::error::NetworkListError;
use crate::artifacts::os::windows::registry::error::RegistryError;
use crate::artifacts::os::windows::registry::helper::string_value;
use crate::artifacts::os::windows::registry::reader::{RegistryKey, RegistryReader};
use crate::utils::nom_helper::{nom_unsigned_eight_bytes, Endian};
use crate::utils::time::{
    compare_timestamps_desc, filetime_to_iso, systemtime_to_unixepoch_ms, unixepoch_ms_to_iso,
};
use common::windows::{NetworkProfile, RegData, RegDataType};
use log::{error, info, warn};

const PROFILES_PATH: &str = "Microsoft\\Windows NT\\CurrentVersion\\NetworkList\\Profiles";

/// Parse network profiles from a SOFTWARE hive. A profile without a `ProfileName`
/// cannot be attributed to a network and is discarded
pub fn grab_network_profiles<R: RegistryReader>(
    reader: &R,
) -> Result<Vec<NetworkProfile>, NetworkListError> {
    let profiles_key = match reader.open_key(PROFILES_PATH) {
        Ok(result) => result,
        Err(RegistryError::KeyNotFound) => {
            info!("[networklist] No {PROFILES_PATH} key in hive");
            return Ok(Vec::new());
        }
        Err(err) => {
            error!("[networklist] Could not open SOFTWARE hive: {err:?}");
            return Err(NetworkListError::RegistryFile);
        }
    };

    let profile_keys = match profiles_key.subkeys() {
        Ok(result) => result,
        Err(err) => {
            error!("[networklist] Could not list profile keys: {err:?}");
            return Err(NetworkListError::RegistryFile);
        }
    };

    let mut profiles: Vec<NetworkProfile> = Vec::new();
    for profile_key in profile_keys {
        let ssid = match string_value(&profile_key, "ProfileName") {
            Some(result) => result,
            None => continue,
        };

        profiles.push(NetworkProfile {
            ssid,
            first_connect: date_created(&profile_key),
            profile_guid: profile_key.name(),
        });
    }

    profiles.sort_by(|a, b| compare_timestamps_desc(&a.first_connect, &b.first_connect));
    Ok(profiles)
}

/// `DateCreated` is a 16-byte SYSTEMTIME. Some tools rewrite it as an 8-byte FILETIME,
/// both layouts are accepted
fn date_created<K: RegistryKey>(profile_key: &K) -> Option<String> {
    let entry = profile_key.value("DateCreated").ok()?;
    if entry.data_type != RegDataType::RegBinary {
        return None;
    }
    let data = match &entry.data {
        RegData::Binary(result) => result,
        _ => return None,
    };

    let systemtime_size = 16;
    let filetime_size = 8;
    if data.len() == systemtime_size {
        return systemtime_to_unixepoch_ms(data).map(|timestamp| unixepoch_ms_to_iso(&timestamp));
    }
    if data.len() == filetime_size {
        let (_, filetime) = nom_unsigned_eight_bytes(data, Endian::Le).ok()?;
        return filetime_to_iso(&filetime);
    }

    warn!("[networklist] Unexpected DateCreated size: {}", data.len());
    None
}
