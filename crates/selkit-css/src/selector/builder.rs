use std::fmt;

use super::{Combinator, FragmentKind};
use crate::error::SelectorError;

/// A selector under construction.
///
/// Fragments are appended through consuming, chainable methods and validated
/// against the canonical `element#id.class[attr]:pseudo-class::pseudo-element`
/// order as they arrive. A builder produced by [`SelectorBuilder::combine`] is
/// a terminal composite: it renders, but rejects further fragments.
///
/// # Example
/// ```
/// use selkit_css::selector;
///
/// let sel = selector::element("a")
///     .attr("href$=\".png\"")?
///     .pseudo_class("focus")?;
/// assert_eq!(sel.stringify(), "a[href$=\".png\"]:focus");
/// # Ok::<(), selkit_css::SelectorError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorBuilder {
    /// Rendered pieces in output order.
    fragments: Vec<String>,
    /// Kind of each entry in `fragments`. Empty for composites.
    kinds: Vec<FragmentKind>,
    composite: bool,
}

impl SelectorBuilder {
    /// Create an empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fragments: Vec::new(),
            kinds: Vec::new(),
            composite: false,
        }
    }

    /// Create a builder holding a single fragment.
    ///
    /// A lone fragment can never break ordering or cardinality, so this
    /// cannot fail.
    #[must_use]
    pub fn from_fragment(kind: FragmentKind, value: &str) -> Self {
        let mut builder = Self::new();
        builder.record(kind, value);
        builder
    }

    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Append `value` verbatim.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Duplicate`] if an element is already present,
    /// [`SelectorError::Order`] if any other fragment precedes it.
    pub fn element(self, value: &str) -> Result<Self, SelectorError> {
        self.push(FragmentKind::Element, value)
    }

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Append `#value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Duplicate`] if an id is already present,
    /// [`SelectorError::Order`] unless it is first or directly follows the
    /// element.
    pub fn id(self, value: &str) -> Result<Self, SelectorError> {
        self.push(FragmentKind::Id, value)
    }

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Append `.value`. Any number of classes may be chained.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if an attribute, pseudo-class or
    /// pseudo-element precedes it.
    pub fn class(self, value: &str) -> Result<Self, SelectorError> {
        self.push(FragmentKind::Class, value)
    }

    /// [§ 6.1 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Append `[value]`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if a pseudo-class or pseudo-element precedes it.
    pub fn attr(self, value: &str) -> Result<Self, SelectorError> {
        self.push(FragmentKind::Attribute, value)
    }

    /// [§ 3.5 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Append `:value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if the pseudo-element precedes it.
    pub fn pseudo_class(self, value: &str) -> Result<Self, SelectorError> {
        self.push(FragmentKind::PseudoClass, value)
    }

    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Append `::value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Duplicate`] if a pseudo-element is already present.
    pub fn pseudo_element(self, value: &str) -> Result<Self, SelectorError> {
        self.push(FragmentKind::PseudoElement, value)
    }

    /// Append a fragment of any kind.
    ///
    /// # Errors
    ///
    /// See [`SelectorError`]: duplicates of singleton kinds, rank decreases,
    /// and appends to composites are rejected.
    pub fn push(mut self, kind: FragmentKind, value: &str) -> Result<Self, SelectorError> {
        self.check(kind)?;
        self.record(kind, value);
        Ok(self)
    }

    /// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
    ///
    /// Join two selectors as `left <combinator> right`, with a single space
    /// on each side of the combinator symbol. Neither input is modified.
    #[must_use]
    pub fn combine(left: &Self, combinator: Combinator, right: &Self) -> Self {
        Self {
            fragments: vec![
                left.stringify(),
                " ".to_owned(),
                combinator.symbol().to_owned(),
                " ".to_owned(),
                right.stringify(),
            ],
            composite: true,
            ..Self::new()
        }
    }

    /// Render the selector.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.fragments.concat()
    }

    /// Kinds of the fragments appended so far. Always empty for composites.
    #[must_use]
    pub fn kinds(&self) -> &[FragmentKind] {
        &self.kinds
    }

    /// Whether this builder was produced by [`SelectorBuilder::combine`].
    #[must_use]
    pub const fn is_composite(&self) -> bool {
        self.composite
    }

    /// Whether nothing has been appended yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    fn check(&self, kind: FragmentKind) -> Result<(), SelectorError> {
        if self.composite {
            return Err(SelectorError::Composite { kind });
        }
        if kind.is_singleton() && self.kinds.contains(&kind) {
            return Err(SelectorError::Duplicate { kind });
        }
        match self.kinds.last() {
            Some(&after) if after.rank() > kind.rank() => {
                Err(SelectorError::Order { kind, after })
            }
            _ => Ok(()),
        }
    }

    fn record(&mut self, kind: FragmentKind, value: &str) {
        self.fragments.push(kind.render(value));
        self.kinds.push(kind);
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fragments.iter().try_for_each(|fragment| f.write_str(fragment))
    }
}
