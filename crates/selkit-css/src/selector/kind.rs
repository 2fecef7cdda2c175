use strum_macros::{Display, EnumIter, EnumString};

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// The structural category of one fragment of a compound selector.
///
/// Variants are declared in canonical order; [`FragmentKind::rank`] gives
/// the position used to validate appends.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum FragmentKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    /// "A type selector is the name of a document language element type."
    ///
    /// Rendered verbatim: `div`, `a`, `table`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    /// "An ID selector is a hash (#, U+0023) immediately followed by the
    /// ID value."
    ///
    /// Rendered as `#main`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    /// "The class selector is given as a full stop (. U+002E) immediately
    /// followed by an identifier."
    ///
    /// Rendered as `.container`
    Class,

    /// [§ 6.1 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Rendered as `[href$=".png"]`
    #[strum(to_string = "attribute", serialize = "attr")]
    Attribute,

    /// [§ 3.5 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Rendered as `:focus`, `:nth-of-type(even)`
    PseudoClass,

    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Rendered as `::before`
    PseudoElement,
}

impl FragmentKind {
    /// Position in the canonical
    /// `element#id.class[attr]:pseudo-class::pseudo-element` order.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Element => 0,
            Self::Id => 1,
            Self::Class => 2,
            Self::Attribute => 3,
            Self::PseudoClass => 4,
            Self::PseudoElement => 5,
        }
    }

    /// Whether at most one fragment of this kind may appear in a compound
    /// selector.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Render `value` with this kind's punctuation. The value itself is
    /// not inspected.
    #[must_use]
    pub fn render(self, value: &str) -> String {
        match self {
            Self::Element => value.to_owned(),
            Self::Id => format!("#{value}"),
            Self::Class => format!(".{value}"),
            Self::Attribute => format!("[{value}]"),
            Self::PseudoClass => format!(":{value}"),
            Self::PseudoElement => format!("::{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FragmentKind;
    use strum::IntoEnumIterator;

    #[test]
    fn test_rank_follows_declaration_order() {
        let ranks: Vec<u8> = FragmentKind::iter().map(FragmentKind::rank).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4, 5]);
        assert!(FragmentKind::iter().all(|k| k.rank() == k as u8));
    }

    #[test]
    fn test_kind_names_round_trip_through_strum() {
        assert_eq!(FragmentKind::PseudoClass.to_string(), "pseudo-class");
        assert_eq!(FragmentKind::Attribute.to_string(), "attribute");
        assert_eq!("attr".parse::<FragmentKind>(), Ok(FragmentKind::Attribute));
        assert_eq!(
            "pseudo-element".parse::<FragmentKind>(),
            Ok(FragmentKind::PseudoElement)
        );
        assert!("universal".parse::<FragmentKind>().is_err());
    }
}
