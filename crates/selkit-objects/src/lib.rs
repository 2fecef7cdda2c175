//! Small object-modeling helpers for selkit.
//!
//! - [`Rectangle`]: width, height and area
//! - [`to_json`]: compact JSON with keys in the order they are encountered
//! - [`from_json`]: rebuild a value by feeding the parsed JSON values, in
//!   key order, to a positional constructor ([`Positional`])

/// Errors raised while serializing or reviving objects.
pub mod error;
/// JSON serialization and positional revival.
pub mod json;
/// The rectangle value type.
pub mod rectangle;

// Re-exports for convenience
pub use error::ObjectError;
pub use json::{Positional, from_json, positional_arg, to_json};
pub use rectangle::Rectangle;
