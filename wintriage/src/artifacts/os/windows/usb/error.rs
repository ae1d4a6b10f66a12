use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum UsbError {
    RegistryFile,
}

impl std::error::Error for UsbError {}

impl fmt::Display for UsbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsbError::RegistryFile => write!(f, "Could not read SYSTEM Registry hive"),
        }
    }
}
