//! Data module - loading, schema overview and target validation

pub mod dataset;
pub mod error;
pub mod loader;
pub mod schema;
pub mod target;

pub use dataset::*;
pub use error::*;
pub use loader::*;
pub use schema::*;
pub use target::*;
