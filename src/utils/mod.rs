//! Small helpers shared by the navigation core and the config layer.

pub mod cast;
pub mod compare;
