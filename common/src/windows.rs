use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct LogonEvent {
    pub timestamp: String,
    pub event: String, // (4624) Successful Logon
    pub username: String,
    pub logon_type: String, // (2) Interactive
    pub source_ip: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct UsbStorageEntry {
    pub device_name: String, // Disk&Ven_SanDisk&Prod_Cruzer&Rev_1.00
    pub serial_number: String,
    pub first_install: Option<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct UsbDeviceEntry {
    pub vid_pid: String, // VID_0781&PID_5567
    pub instance_id: String,
    pub device_description: String,
    pub friendly_name: String,
    pub location: String,
    pub last_update: Option<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct InstalledProgram {
    pub display_name: String,
    pub publisher: String,
    pub version: String,
    pub install_date: String, // YYYY-MM-DD when the raw value is a valid YYYYMMDD string
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct UserAssistEntry {
    pub path: String,     // ROT13 decoded program path
    pub rot_path: String, // Value name as stored in the Registry
    pub folder_guid: String,
    pub run_count: u32,
    pub focus_count: u32, // Always zero for the XP-era entry layout
    pub last_execution: Option<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct NetworkProfile {
    pub ssid: String,
    pub first_connect: Option<String>,
    pub profile_guid: String, // Name of the profile subkey
}

#[derive(Debug, Serialize, Clone)]
pub struct EventLogRecord {
    pub event_record_id: u64,
    pub timestamp: i64, // Unixepoch nanoseconds
    pub data: Value,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub value: String, // Value name. Empty for the key's default value
    pub data: RegData,
    pub data_type: RegDataType,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub enum RegData {
    Text(String),
    Number(u64),
    Binary(Vec<u8>),
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub enum RegDataType {
    RegSz,
    RegExpandSz,
    RegBinary,
    RegDword,
    RegQword,
    RegMultiSz,
    Unknown,
}
