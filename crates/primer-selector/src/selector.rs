//! The validating selector builder.
//!
//! A [`SelectorBuilder`] accumulates fragments in append order. Every append
//! is checked against the previously appended kind:
//!
//! 1. A singleton kind (element, id, pseudo-element) may not directly follow
//!    itself.
//! 2. Ranks may not decrease.
//!
//! Only the adjacent pair is compared, so `#a.b#c` is accepted. Such input
//! produces a warning through [`primer_common::warning::warn_once`].

use std::fmt;

use primer_common::warning::warn_once;

use crate::error::SelectorError;
use crate::kind::FragmentKind;

/// Anything that can be turned into selector text.
pub trait Stringify {
    /// The selector text built so far. Never mutates.
    fn stringify(&self) -> String;
}

/// One appended piece of a selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// What kind of piece this is.
    pub kind: FragmentKind,
    /// The rendered text, including its prefix (`#`, `.`, `[`...`]`, `:`, `::`).
    pub text: String,
}

/// Check whether `next` may follow `previous`.
///
/// # Errors
///
/// Returns [`SelectorError::RepeatedSingleton`] when `next` repeats a
/// singleton `previous`, otherwise [`SelectorError::OutOfOrder`] when `next`
/// ranks lower than `previous`.
pub fn validate(previous: Option<FragmentKind>, next: FragmentKind) -> Result<(), SelectorError> {
    let Some(previous) = previous else {
        return Ok(());
    };

    // STEP 1: singleton rule.
    if previous == next && next.is_singleton() {
        return Err(SelectorError::RepeatedSingleton { kind: next });
    }

    // STEP 2: ordering rule.
    if previous.rank() > next.rank() {
        return Err(SelectorError::OutOfOrder { previous, next });
    }

    Ok(())
}

/// A compound selector under construction.
///
/// Fragment methods consume the builder and hand it back on success, so a
/// chain reads `element("a")?.class("nav")?.pseudo_class("hover")?`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorBuilder {
    fragments: Vec<Fragment>,
    rendered: String,
    last: Option<FragmentKind>,
}

impl SelectorBuilder {
    /// Create an empty builder. Its first append always succeeds.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fragments: Vec::new(),
            rendered: String::new(),
            last: None,
        }
    }

    /// A builder holding exactly one fragment. Cannot fail.
    pub(crate) fn starting_with(kind: FragmentKind, value: &str) -> Self {
        let mut builder = Self::new();
        builder.push(kind, value);
        builder
    }

    /// Append a fragment of any kind.
    ///
    /// # Errors
    ///
    /// Returns a [`SelectorError`] if `kind` may not follow the last appended
    /// kind. See [`validate`].
    pub fn append(mut self, kind: FragmentKind, value: &str) -> Result<Self, SelectorError> {
        validate(self.last, kind)?;

        if kind.is_singleton() && self.fragments.iter().any(|f| f.kind == kind) {
            let _ = warn_once(
                "Selector",
                &format!(
                    "{kind} occurs more than once in `{}{}`",
                    self.rendered,
                    kind.render(value)
                ),
            );
        }

        self.push(kind, value);
        Ok(self)
    }

    fn push(&mut self, kind: FragmentKind, value: &str) {
        let text = kind.render(value);
        self.rendered.push_str(&text);
        self.fragments.push(Fragment { kind, text });
        self.last = Some(kind);
    }

    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Append `value` as is.
    ///
    /// # Errors
    ///
    /// Fails if anything has been appended before, since element ranks first
    /// and may not repeat.
    pub fn element(self, value: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Element, value)
    }

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Append `#value`.
    ///
    /// # Errors
    ///
    /// Fails directly after another id or after any later-ranked fragment.
    pub fn id(self, value: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Id, value)
    }

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Append `.value`. Classes may repeat.
    ///
    /// # Errors
    ///
    /// Fails after an attribute, pseudo-class or pseudo-element.
    pub fn class(self, value: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Class, value)
    }

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Append `[value]`. The value is not parsed, so `href^="https"` is fine.
    ///
    /// # Errors
    ///
    /// Fails after a pseudo-class or pseudo-element.
    pub fn attr(self, value: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Attribute, value)
    }

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Append `:value`.
    ///
    /// # Errors
    ///
    /// Fails after a pseudo-element.
    pub fn pseudo_class(self, value: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::PseudoClass, value)
    }

    /// Append `::value`.
    ///
    /// # Errors
    ///
    /// Fails directly after another pseudo-element.
    pub fn pseudo_element(self, value: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::PseudoElement, value)
    }

    /// The selector text built so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.rendered
    }

    /// Fragments in append order.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// The most recently appended kind, if any.
    #[must_use]
    pub const fn last_kind(&self) -> Option<FragmentKind> {
        self.last
    }

    /// Whether nothing has been appended yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

impl Stringify for SelectorBuilder {
    fn stringify(&self) -> String {
        self.rendered.clone()
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}
