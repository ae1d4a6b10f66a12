pub(crate) mod nom_helper;
pub(crate) mod time;
