pub mod error;
pub mod helper;
pub mod reader;

#[cfg(test)]
pub(crate) mod fake;
