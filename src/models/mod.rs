//! Data models for the QuantumSpace research platform.
//!
//! Shared by the backend handlers and the terminal client so both ends agree on the wire format.

mod chat;
mod research;

pub use chat::*;
pub use research::*;
