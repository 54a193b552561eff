//! Retrieval and ranking core for Strategist.
//!
//! A brief flows through [`keywords`] → [`aggregate`] (which ranks each
//! domain with [`scoring`]) → [`context`], orchestrated by [`engine::Engine`].
//! [`tools`] exposes the engine and the static documents as named tools.
//!
//! Everything here is synchronous and side-effect free.

pub mod aggregate;
pub mod context;
pub mod engine;
pub mod keywords;
pub mod scoring;
pub mod tools;

#[cfg(test)]
mod test_support;

pub use engine::Engine;
pub use tools::{Tool, ToolOutput};
