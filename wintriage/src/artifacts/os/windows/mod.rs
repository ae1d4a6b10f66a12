pub mod logons;
pub mod networklist;
pub mod registry;
pub mod software;
pub mod usb;
pub mod userassist;
