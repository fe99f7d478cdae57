//! Fragment kinds.
//!
//! [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
//! allows simple selectors in any order after the type selector. The builder
//! is stricter and requires the fixed order
//! element, id, class, attribute, pseudo-class, pseudo-element.

use strum_macros::{Display, EnumIter, EnumString};

/// The kind of one atomic selector piece.
///
/// Variants are declared in rank order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "camelCase")]
pub enum FragmentKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Example: `div`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Example: `#main`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Example: `.highlight`
    Class,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Example: `[href^="https"]`
    #[strum(to_string = "attribute", serialize = "attr")]
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Example: `:first-child`
    #[strum(to_string = "pseudoClass", serialize = "pseudo-class")]
    PseudoClass,

    /// [CSS Pseudo-Elements Level 4](https://www.w3.org/TR/css-pseudo-4/)
    ///
    /// Example: `::before`
    #[strum(to_string = "pseudoElement", serialize = "pseudo-element")]
    PseudoElement,
}

impl FragmentKind {
    /// Position of this kind in the required ordering. Lower ranks come first.
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

    /// Element, id and pseudo-element may not be repeated back to back.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Render `value` with the syntax of this kind.
    ///
    /// The value is inserted verbatim; no escaping is performed.
    #[must_use]
    pub fn render(self, value: &str) -> String {
        match self {
            Self::Element => value.to_string(),
            Self::Id => format!("#{value}"),
            Self::Class => format!(".{value}"),
            Self::Attribute => format!("[{value}]"),
            Self::PseudoClass => format!(":{value}"),
            Self::PseudoElement => format!("::{value}"),
        }
    }
}
