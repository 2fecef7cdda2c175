use thiserror::Error;

use crate::selector::FragmentKind;

/// Failures reported by [`SelectorBuilder`](crate::SelectorBuilder) appends.
///
/// The builder is consumed by the failing call, so there is no partially
/// mutated state to recover.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A second element, id or pseudo-element fragment was appended.
    #[error(
        "Element, id and pseudo-element should not occur more than one time inside the selector (duplicate {kind})"
    )]
    Duplicate {
        /// The singleton kind that was repeated.
        kind: FragmentKind,
    },

    /// A fragment was appended after a fragment of a later-ranked kind.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element ({kind} after {after})"
    )]
    Order {
        /// The kind that was being appended.
        kind: FragmentKind,
        /// The kind of the fragment it would have followed.
        after: FragmentKind,
    },

    /// A structural fragment was appended to a selector produced by `combine`.
    #[error("cannot append {kind} to a combined selector")]
    Composite {
        /// The kind that was being appended.
        kind: FragmentKind,
    },

    /// A combinator symbol that is not one of ` `, `>`, `+`, `~`.
    #[error("unknown combinator {0:?}")]
    UnknownCombinator(String),
}
