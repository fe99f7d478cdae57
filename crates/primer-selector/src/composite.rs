//! Selectors joined by a combinator.

use std::fmt;

use crate::selector::Stringify;

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// The result of [`combine`]. Only the rendered text is kept, so no further
/// fragments can be appended and nothing is re-validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeSelector {
    rendered: String,
}

impl CompositeSelector {
    /// The combined selector text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.rendered
    }
}

impl Stringify for CompositeSelector {
    fn stringify(&self) -> String {
        self.rendered.clone()
    }
}

impl fmt::Display for CompositeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

/// Join `left` and `right` as `left + " " + combinator + " " + right`.
///
/// The combinator is inserted verbatim, so the descendant token `" "` yields
/// three spaces. Either side may itself be a composite.
#[must_use]
pub fn combine<L, R, C>(left: &L, combinator: C, right: &R) -> CompositeSelector
where
    L: Stringify + ?Sized,
    R: Stringify + ?Sized,
    C: AsRef<str>,
{
    let left = left.stringify();
    let combinator = combinator.as_ref();
    let right = right.stringify();

    let mut rendered = String::with_capacity(left.len() + combinator.len() + right.len() + 2);
    rendered.push_str(&left);
    rendered.push(' ');
    rendered.push_str(combinator);
    rendered.push(' ');
    rendered.push_str(&right);
    CompositeSelector { rendered }
}
