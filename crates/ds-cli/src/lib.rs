//! CLI library components for the data standard report tool.

pub mod logging;
pub mod output;
