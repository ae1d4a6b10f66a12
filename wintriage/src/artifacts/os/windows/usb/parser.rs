/**
 * USB device history from a SYSTEM hive. Two independent walks:
 * `USBSTOR` records storage devices (serial number and first install time) and
 * `Enum\USB` records every enumerated USB device (descriptions and last update time).
 * The two lists are not joined.
 *
 * References:
 * `https://forensics.wiki/usb_history_viewing/`
 */
use super::error::UsbError;
use crate::artifacts::os::windows::registry::error::RegistryError;
use crate::artifacts::os::windows::registry::helper::string_value_or;
use crate::artifacts::os::windows::registry::reader::{RegistryKey, RegistryReader};
use crate::utils::time::{compare_timestamps_desc, filetime_to_iso};
use common::windows::{UsbDeviceEntry, UsbStorageEntry};
use log::{error, info, warn};

const USBSTOR_PATH: &str = "ControlSet001\\Enum\\USBSTOR";
const USB_ENUM_PATH: &str = "ControlSet001\\Enum\\USB";

/// Parse storage devices recorded under `USBSTOR`. The subtree's absence is an
/// expected finding on some systems and returns an empty list
pub fn grab_usb_storage<R: RegistryReader>(reader: &R) -> Result<Vec<UsbStorageEntry>, UsbError> {
    let storage_key = match reader.open_key(USBSTOR_PATH) {
        Ok(result) => result,
        Err(RegistryError::KeyNotFound) => {
            info!("[usb] No {USBSTOR_PATH} key in hive");
            return Ok(Vec::new());
        }
        Err(err) => {
            error!("[usb] Could not open SYSTEM hive: {err:?}");
            return Err(UsbError::RegistryFile);
        }
    };

    let device_types = match storage_key.subkeys() {
        Ok(result) => result,
        Err(err) => {
            error!("[usb] Could not list device keys under {USBSTOR_PATH}: {err:?}");
            return Err(UsbError::RegistryFile);
        }
    };

    let mut devices: Vec<UsbStorageEntry> = Vec::new();
    for device_type in device_types {
        let serial_keys = match device_type.subkeys() {
            Ok(result) => result,
            Err(err) => {
                warn!(
                    "[usb] Could not list serial keys under {}: {err:?}",
                    device_type.name()
                );
                continue;
            }
        };
        for serial_key in serial_keys {
            // The serial key's last write time is the first install time
            devices.push(UsbStorageEntry {
                device_name: device_type.name(),
                serial_number: serial_key.name(),
                first_install: filetime_to_iso(&serial_key.last_modified()),
            });
        }
    }

    devices.retain(|entry| entry.first_install.is_some());
    devices.sort_by(|a, b| compare_timestamps_desc(&a.first_install, &b.first_install));
    Ok(devices)
}

/// Parse every enumerated USB device under `Enum\USB`. Missing description values
/// never abort the walk, they fall back to N/A
pub fn grab_usb_devices<R: RegistryReader>(reader: &R) -> Result<Vec<UsbDeviceEntry>, UsbError> {
    let enum_key = match reader.open_key(USB_ENUM_PATH) {
        Ok(result) => result,
        Err(RegistryError::KeyNotFound) => {
            info!("[usb] No {USB_ENUM_PATH} key in hive");
            return Ok(Vec::new());
        }
        Err(err) => {
            error!("[usb] Could not open SYSTEM hive: {err:?}");
            return Err(UsbError::RegistryFile);
        }
    };

    let vid_pid_keys = match enum_key.subkeys() {
        Ok(result) => result,
        Err(err) => {
            error!("[usb] Could not list device keys under {USB_ENUM_PATH}: {err:?}");
            return Err(UsbError::RegistryFile);
        }
    };

    let mut devices: Vec<UsbDeviceEntry> = Vec::new();
    for vid_pid_key in vid_pid_keys {
        let instance_keys = match vid_pid_key.subkeys() {
            Ok(result) => result,
            Err(err) => {
                warn!(
                    "[usb] Could not list instance keys under {}: {err:?}",
                    vid_pid_key.name()
                );
                continue;
            }
        };
        for instance_key in instance_keys {
            devices.push(UsbDeviceEntry {
                vid_pid: vid_pid_key.name(),
                instance_id: instance_key.name(),
                device_description: string_value_or(&instance_key, "DeviceDesc", "N/A"),
                friendly_name: string_value_or(&instance_key, "FriendlyName", "N/A"),
                location: string_value_or(&instance_key, "LocationInformation", "N/A"),
                last_update: filetime_to_iso(&instance_key.last_modified()),
            });
        }
    }

    devices.retain(|entry| entry.last_update.is_some());
    devices.sort_by(|a, b| compare_timestamps_desc(&a.last_update, &b.last_update));
    Ok(devices)
}
