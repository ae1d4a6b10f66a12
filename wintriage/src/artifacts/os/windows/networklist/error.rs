use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum NetworkListError {
    RegistryFile,
}

impl std::error::Error for NetworkListError {}

impl fmt::Display for NetworkListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkListError::RegistryFile => write!(f, "Could not read SOFTWARE Registry hive"),
        }
    }
}
