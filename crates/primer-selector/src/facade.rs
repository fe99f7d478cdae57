//! Stateless entry points.
//!
//! Each fragment function starts a brand-new [`SelectorBuilder`] holding that
//! single fragment. Nothing is shared between calls.

use crate::kind::FragmentKind;
use crate::selector::{SelectorBuilder, Stringify};

pub use crate::composite::combine;

/// Start a chain with an element fragment: `value`.
#[must_use]
pub fn element(value: &str) -> SelectorBuilder {
    SelectorBuilder::starting_with(FragmentKind::Element, value)
}

/// Start a chain with an id fragment: `#value`.
#[must_use]
pub fn id(value: &str) -> SelectorBuilder {
    SelectorBuilder::starting_with(FragmentKind::Id, value)
}

/// Start a chain with a class fragment: `.value`.
#[must_use]
pub fn class(value: &str) -> SelectorBuilder {
    SelectorBuilder::starting_with(FragmentKind::Class, value)
}

/// Start a chain with an attribute fragment: `[value]`.
#[must_use]
pub fn attr(value: &str) -> SelectorBuilder {
    SelectorBuilder::starting_with(FragmentKind::Attribute, value)
}

/// Start a chain with a pseudo-class fragment: `:value`.
#[must_use]
pub fn pseudo_class(value: &str) -> SelectorBuilder {
    SelectorBuilder::starting_with(FragmentKind::PseudoClass, value)
}

/// Start a chain with a pseudo-element fragment: `::value`.
#[must_use]
pub fn pseudo_element(value: &str) -> SelectorBuilder {
    SelectorBuilder::starting_with(FragmentKind::PseudoElement, value)
}

/// The text of any selector or composite.
#[must_use]
pub fn stringify<S: Stringify + ?Sized>(selector: &S) -> String {
    selector.stringify()
}
