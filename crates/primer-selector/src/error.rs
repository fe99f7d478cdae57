//! Errors raised while building a selector.

use thiserror::Error;

use crate::kind::FragmentKind;

/// A fragment could not be appended to a selector.
///
/// Both checks compare the new fragment with the most recently appended one
/// only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// The same singleton kind was appended twice in a row.
    #[error("element, id and pseudo-element should not occur more than once")]
    RepeatedSingleton {
        /// The repeated kind.
        kind: FragmentKind,
    },

    /// A fragment of lower rank followed one of higher rank.
    #[error(
        "selector parts must follow order: element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OutOfOrder {
        /// The kind that was appended last.
        previous: FragmentKind,
        /// The kind that was rejected.
        next: FragmentKind,
    },
}
