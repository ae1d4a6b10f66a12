/**
 * Installed programs from a SOFTWARE hive. Scans the native Uninstall subtree and the
 * Wow6432Node compatibility-layer subtree independently. The lists are concatenated,
 * duplicates across the two namespaces are kept on purpose.
 */
use super::error::SoftwareError;
use crate::artifacts::os::windows::registry::error::RegistryError;
use crate::artifacts::os::windows::registry::helper::{string_value, string_value_or};
use crate::artifacts::os::windows::registry::reader::{RegistryKey, RegistryReader};
use chrono::NaiveDate;
use common::windows::{InstalledProgram, RegData};
use log::{error, info};

const UNINSTALL_PATHS: [&str; 2] = [
    "Microsoft\\Windows\\CurrentVersion\\Uninstall",
    "Wow6432Node\\Microsoft\\Windows\\CurrentVersion\\Uninstall",
];

/// Parse installed programs from a SOFTWARE hive. Either Uninstall subtree may be
/// missing, both missing is an empty finding
pub fn grab_installed_programs<R: RegistryReader>(
    reader: &R,
) -> Result<Vec<InstalledProgram>, SoftwareError> {
    let mut programs: Vec<InstalledProgram> = Vec::new();

    for uninstall_path in UNINSTALL_PATHS {
        let uninstall_key = match reader.open_key(uninstall_path) {
            Ok(result) => result,
            Err(RegistryError::KeyNotFound) => {
                info!("[software] No {uninstall_path} key in hive");
                continue;
            }
            Err(err) => {
                error!("[software] Could not open SOFTWARE hive: {err:?}");
                return Err(SoftwareError::RegistryFile);
            }
        };

        let prog_keys = match uninstall_key.subkeys() {
            Ok(result) => result,
            Err(err) => {
                error!("[software] Could not list program keys under {uninstall_path}: {err:?}");
                return Err(SoftwareError::RegistryFile);
            }
        };

        for prog_key in prog_keys {
            // A program without a DisplayName is not actionable evidence
            let display_name = match string_value(&prog_key, "DisplayName") {
                Some(result) if !result.is_empty() => result,
                _ => continue,
            };

            let install_date = match prog_key.value("InstallDate") {
                Ok(entry) => normalize_install_date(&entry.data),
                Err(_err) => String::from("N/A"),
            };

            programs.push(InstalledProgram {
                display_name,
                publisher: string_value_or(&prog_key, "Publisher", "N/A"),
                version: string_value_or(&prog_key, "DisplayVersion", "N/A"),
                install_date,
            });
        }
    }

    programs.sort_by(|a, b| a.display_name.cmp(&b.display_name));
    Ok(programs)
}

/// `InstallDate` is commonly an 8-digit YYYYMMDD string. Values in any other shape are
/// kept raw rather than discarded
fn normalize_install_date(data: &RegData) -> String {
    let raw_date = match data {
        RegData::Text(text) => text.clone(),
        RegData::Number(number) => number.to_string(),
        RegData::Binary(_) => return String::from("N/A"),
    };
    if raw_date.is_empty() {
        return String::from("N/A");
    }

    match NaiveDate::parse_from_str(&raw_date, "%Y%m%d") {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(_err) => raw_date,
    }
}
