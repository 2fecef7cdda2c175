use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ObjectError;
use crate::json::{Positional, positional_arg};

/// An axis-free rectangle: just a width and a height.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle from its dimensions.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `width * height`
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Positional order is `(width, height)`.
impl Positional for Rectangle {
    const NAME: &'static str = "Rectangle";
    const ARITY: usize = 2;

    fn from_positional(args: &[Value]) -> Result<Self, ObjectError> {
        Ok(Self::new(positional_arg(args, 0)?, positional_arg(args, 1)?))
    }
}
