//! Integration tests for joining selectors with combinators.

use primer_selector::{Combinator, Stringify, combine, element, stringify};

#[test]
fn test_combine_next_sibling() {
    let left = element("div").id("main").unwrap();
    let right = element("table").id("data").unwrap();
    let combined = combine(&left, "+", &right);
    assert_eq!(combined.stringify(), "div#main + table#data");
}

#[test]
fn test_combine_nested_keeps_spacing_verbatim() {
    let inner = combine(&element("b"), " ", &element("c"));
    assert_eq!(inner.stringify(), "b   c");

    let outer = combine(&element("a"), "~", &inner);
    assert_eq!(outer.stringify(), "a ~ b   c");
}

#[test]
fn test_combine_with_typed_combinator() {
    let list = element("ul").class("nav").unwrap();
    let item = element("li");
    assert_eq!(
        combine(&list, Combinator::Child, &item).stringify(),
        "ul.nav > li"
    );
    assert_eq!(
        combine(&element("col"), Combinator::Column, &element("td")).to_string(),
        "col || td"
    );
}

#[test]
fn test_combinator_token_is_not_validated() {
    let combined = combine(&element("a"), String::from("??"), &element("b"));
    assert_eq!(combined.as_str(), "a ?? b");
}

#[test]
fn test_combine_does_not_revalidate_across_sides() {
    // Right side starts with an element after the left side ended in a pseudo-element.
    let left = element("p").pseudo_element("after").unwrap();
    let combined = combine(&left, ">", &element("span"));
    assert_eq!(combined.stringify(), "p::after > span");
}

#[test]
fn test_combine_leaves_inputs_usable() {
    let left = element("h1");
    let right = element("p");
    let _ = combine(&left, "+", &right);
    let left = left.class("title").unwrap();
    assert_eq!(left.stringify(), "h1.title");
    assert_eq!(stringify(&right), "p");
}

#[test]
fn test_facade_stringify() {
    let composite = combine(&element("a"), ">", &element("b"));
    assert_eq!(stringify(&composite), "a > b");
    assert_eq!(stringify(&composite), composite.to_string());
}
