//! Report module - stdout summaries and JSON snapshot export

pub mod export;
pub mod summary;

pub use export::*;
pub use summary::*;
