pub mod error;
pub mod parser;

pub(crate) mod assist;
