use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum LogonError {
    Parser,
}

impl std::error::Error for LogonError {}

impl fmt::Display for LogonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogonError::Parser => write!(f, "Failed to parse event log"),
        }
    }
}
