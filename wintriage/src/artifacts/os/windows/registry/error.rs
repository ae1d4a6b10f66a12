use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum RegistryError {
    KeyNotFound,
    ValueNotFound,
    ReadRegistry,
}

impl std::error::Error for RegistryError {}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::KeyNotFound => write!(f, "Registry key not found"),
            RegistryError::ValueNotFound => write!(f, "Registry value not found"),
            RegistryError::ReadRegistry => write!(f, "Failed to read Registry file"),
        }
    }
}
