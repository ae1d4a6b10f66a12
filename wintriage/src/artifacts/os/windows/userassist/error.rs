use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum UserAssistError {
    RegistryFile,
}

impl std::error::Error for UserAssistError {}

impl fmt::Display for UserAssistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserAssistError::RegistryFile => write!(f, "Could not read user Registry hive"),
        }
    }
}
