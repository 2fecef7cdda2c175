use std::fmt;
use std::str::FromStr;

use strum_macros::EnumIter;

use crate::error::SelectorError;

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound selectors."
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two compound
    /// selectors."
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two compound
    /// selectors."
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two compound
    /// selectors."
    SubsequentSibling,
}

impl Combinator {
    /// The symbol written between the two selectors.
    ///
    /// The descendant combinator is a single space, so a combined selector
    /// renders it as three spaces in a row.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Combinator {
    type Err = SelectorError;

    /// Accepts the symbol itself, or a spelled-out name for shells where a
    /// bare space or `>` is awkward to pass.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            " " | "descendant" => Ok(Self::Descendant),
            ">" | "child" => Ok(Self::Child),
            "+" | "next-sibling" => Ok(Self::NextSibling),
            "~" | "subsequent-sibling" => Ok(Self::SubsequentSibling),
            other => Err(SelectorError::UnknownCombinator(other.to_owned())),
        }
    }
}
