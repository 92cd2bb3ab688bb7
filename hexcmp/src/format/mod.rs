//! Display helpers derived from a [`ParsedHex`](crate::types::ParsedHex).
//!
//! Each helper is a pure function of the parsed value; none of them are
//! stored on the entity itself.

pub mod binary;
pub mod scientific;
pub mod trim;

pub use binary::*;
pub use scientific::*;
pub use trim::*;
