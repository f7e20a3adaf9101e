//! CLI library components for the medal analytics binary.

pub mod logging;
pub mod render;
pub mod titles;
