//! Client for the external AI text-structuring service.
//!
//! Provides the wire types returned by the service, the [`Structurer`]
//! trait the pipeline programs against, and an HTTP-backed implementation.
//! The service is treated as an opaque function: text in, structured
//! object out. No prompt design happens on this side.

pub mod client;
pub mod structurer;
pub mod types;

pub use client::HttpStructurer;
pub use structurer::{AiError, Structurer};
