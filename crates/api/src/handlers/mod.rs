//! Request handlers, grouped by resource.

pub mod content;
pub mod project;
