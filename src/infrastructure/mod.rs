//! Infrastructure layer - logging setup and dataset loading

pub mod dataset;
pub mod logging;
