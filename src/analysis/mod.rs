//! Analysis module - binning, aggregation and statistics

pub mod binning;
pub mod correlation;
pub mod describe;
pub mod event_rate;
pub mod profile;

pub use binning::*;
pub use correlation::*;
pub use describe::*;
pub use event_rate::*;
pub use profile::*;
