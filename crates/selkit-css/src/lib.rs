//! Fluent CSS selector building for selkit.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selectors** ([Selectors Level 4 § 4.2](https://www.w3.org/TR/selectors-4/#compound))
//!   - Type, ID, class, attribute, pseudo-class and pseudo-element fragments
//!   - Canonical ordering: `element#id.class[attr]:pseudo-class::pseudo-element`
//!   - At most one type, ID and pseudo-element per compound selector
//!
//! - **Complex selectors** ([Selectors Level 4 § 4.3](https://www.w3.org/TR/selectors-4/#complex))
//!   - Joining two built selectors with a combinator (` `, `>`, `+`, `~`)
//!
//! # Not Implemented
//!
//! - Parsing selector strings
//! - Validating the contents of attribute or pseudo-class bodies
//! - Specificity

/// Errors raised while building a selector.
pub mod error;
/// Selector builder, fragment kinds, combinators and the stateless facade.
pub mod selector;

// Re-exports for convenience
pub use error::SelectorError;
pub use selector::{Combinator, FragmentKind, SelectorBuilder};
