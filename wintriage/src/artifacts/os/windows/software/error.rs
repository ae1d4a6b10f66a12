use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum SoftwareError {
    RegistryFile,
}

impl std::error::Error for SoftwareError {}

impl fmt::Display for SoftwareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SoftwareError::RegistryFile => write!(f, "Could not read SOFTWARE Registry hive"),
        }
    }
}
