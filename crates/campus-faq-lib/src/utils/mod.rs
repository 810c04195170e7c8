//! Small shared utilities.

pub mod logging;
