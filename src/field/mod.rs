pub(crate) mod color;
pub(crate) mod config;
pub(crate) mod direction;
pub(crate) mod line;
pub(crate) mod line_set;
