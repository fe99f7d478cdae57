//! Builder for CSS-like selector strings.
//!
//! # Scope
//!
//! This crate implements:
//! - **Fragments** ([§ 5 Elemental selectors](https://www.w3.org/TR/selectors-4/#elemental-selectors))
//!   - Type, ID, class, attribute, pseudo-class and pseudo-element pieces
//!   - Fixed ordering between fragment kinds
//!   - Rejection of adjacent repeats of element, id and pseudo-element
//!
//! - **Combination** ([§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Joining two built selectors around a combinator token
//!
//! - **Facade**
//!   - One free function per fragment kind, each starting a fresh chain
//!
//! # Not Implemented
//!
//! - Parsing selector text
//! - Matching selectors against a document
//! - Specificity

/// Combinator tokens per [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators).
pub mod combinator;
/// Terminal selectors produced by joining two selectors.
pub mod composite;
/// Validation errors raised while appending fragments.
pub mod error;
/// Stateless entry points that start a new builder chain.
pub mod facade;
/// Fragment kinds, their ranks and rendering.
pub mod kind;
/// The incremental, validating selector builder.
pub mod selector;

// Re-exports for convenience
pub use combinator::Combinator;
pub use composite::CompositeSelector;
pub use error::SelectorError;
pub use facade::{attr, class, combine, element, id, pseudo_class, pseudo_element, stringify};
pub use kind::FragmentKind;
pub use selector::{Fragment, SelectorBuilder, Stringify, validate};
