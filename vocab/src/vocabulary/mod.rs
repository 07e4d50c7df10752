//! The builtin activitystreams vocabulary, as static tables.

pub mod properties;
pub mod types;
