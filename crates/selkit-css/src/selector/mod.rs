//! CSS selector building
//!
//! The functions in this module are the entry points: each one starts a
//! fresh [`SelectorBuilder`] with a single fragment, which is then extended
//! through the builder's chainable methods. They keep no state between
//! calls.
//!
//! ```
//! use selkit_css::{Combinator, selector};
//!
//! let sel = selector::combine(
//!     &selector::element("div").id("main")?,
//!     Combinator::NextSibling,
//!     &selector::element("table").id("data")?,
//! );
//! assert_eq!(sel.stringify(), "div#main + table#data");
//! # Ok::<(), selkit_css::SelectorError>(())
//! ```

mod builder;
mod combinator;
mod kind;

pub use builder::SelectorBuilder;
pub use combinator::Combinator;
pub use kind::FragmentKind;

/// Start a selector with a type selector, e.g. `div`.
#[must_use]
pub fn element(value: &str) -> SelectorBuilder {
    SelectorBuilder::from_fragment(FragmentKind::Element, value)
}

/// Start a selector with an ID selector, e.g. `#main`.
#[must_use]
pub fn id(value: &str) -> SelectorBuilder {
    SelectorBuilder::from_fragment(FragmentKind::Id, value)
}

/// Start a selector with a class selector, e.g. `.container`.
#[must_use]
pub fn class(value: &str) -> SelectorBuilder {
    SelectorBuilder::from_fragment(FragmentKind::Class, value)
}

/// Start a selector with an attribute selector; `value` is the body between
/// the brackets.
#[must_use]
pub fn attr(value: &str) -> SelectorBuilder {
    SelectorBuilder::from_fragment(FragmentKind::Attribute, value)
}

/// Start a selector with a pseudo-class, e.g. `:focus`.
#[must_use]
pub fn pseudo_class(value: &str) -> SelectorBuilder {
    SelectorBuilder::from_fragment(FragmentKind::PseudoClass, value)
}

/// Start a selector with a pseudo-element, e.g. `::before`.
#[must_use]
pub fn pseudo_element(value: &str) -> SelectorBuilder {
    SelectorBuilder::from_fragment(FragmentKind::PseudoElement, value)
}

/// Join two selectors with a combinator. See [`SelectorBuilder::combine`].
#[must_use]
pub fn combine(
    left: &SelectorBuilder,
    combinator: Combinator,
    right: &SelectorBuilder,
) -> SelectorBuilder {
    SelectorBuilder::combine(left, combinator, right)
}
