//! Integration tests for selector building.
//!
//! Covers the selector grammar as the rule builder enforces it:
//! - Simple selectors: elements, classes, ids, attributes, `*`
//! - Compound selectors: `div.a#b[c]`
//! - Combinators: descendant, child, sibling, adjacent, column
//! - Selector lists: `join`
//! - Generic entry points: `select` / `with`

use cssn::{AttributeOp, CssError, Part, Stylesheet};

// ============================================================================
// SIMPLE AND COMPOUND SELECTORS
// ============================================================================

#[test]
fn test_element_then_class() {
    let sheet = Stylesheet::new();
    let rule = sheet.select_element("div").class("a").unwrap();
    assert_eq!(rule.selector(), "div.a");
}

#[test]
fn test_two_bare_elements_fail() {
    let sheet = Stylesheet::new();
    let err = sheet.select_element("div").element("span").unwrap_err();
    assert_eq!(
        err,
        CssError::Selector {
            fragment: "span".into(),
            previous: Some(Part::Element),
        }
    );
}

#[test]
fn test_universal_after_selector_part_fails() {
    let sheet = Stylesheet::new();
    for rule in [
        sheet.select_class("a"),
        sheet.select_id("b"),
        sheet.select_all(),
        sheet.select_element("p").hover().unwrap(),
    ] {
        assert!(matches!(rule.all(), Err(CssError::Selector { .. })));
    }
}

#[test]
fn test_classes_and_ids_compound_onto_anything() {
    let sheet = Stylesheet::new();
    let rule = sheet
        .select_all()
        .class("a")
        .unwrap()
        .id("b")
        .unwrap()
        .class("c")
        .unwrap()
        .attribute("data-x", AttributeOp::None, None, true)
        .unwrap()
        .focus()
        .unwrap()
        .class("d")
        .unwrap();
    assert_eq!(rule.selector(), "*.a#b.c[data-x]:focus.d");
}

#[test]
fn test_class_directly_after_combinator() {
    let sheet = Stylesheet::new();
    let rule = sheet.select_class("a").child().unwrap().class("b").unwrap();
    assert_eq!(rule.selector(), ".a > .b");
}

// ============================================================================
// ATTRIBUTE SELECTORS
// ============================================================================

#[test]
fn test_attribute_formatting() {
    let sheet = Stylesheet::new();
    let equals = sheet
        .select_attribute("data-x", AttributeOp::Equals, Some("1"), true)
        .unwrap();
    assert_eq!(equals.selector(), r#"[data-x="1"]"#);

    let insensitive = sheet
        .select_attribute("data-x", AttributeOp::Equals, Some("1"), false)
        .unwrap();
    assert_eq!(insensitive.selector(), r#"[data-x="1" i]"#);

    let presence = sheet
        .select_attribute("data-x", AttributeOp::None, None, true)
        .unwrap();
    assert_eq!(presence.selector(), "[data-x]");
}

#[test]
fn test_attribute_comparison_needs_value() {
    let sheet = Stylesheet::new();
    let err = sheet
        .select_element("input")
        .attribute("type", AttributeOp::Contains, None, true)
        .unwrap_err();
    assert!(matches!(err, CssError::Attribute(_)));
}

#[test]
fn test_attribute_keywords_parse() {
    assert_eq!("starts_with".parse::<AttributeOp>(), Ok(AttributeOp::StartsWith));
    assert_eq!(
        "startswith".parse::<AttributeOp>(),
        Err(CssError::AttributeComparison("startswith".into()))
    );
}

// ============================================================================
// COMBINATORS
// ============================================================================

#[test]
fn test_combinator_literals() {
    let sheet = Stylesheet::new();
    let cases = [
        (sheet.select_element("a").descendant(), "a b"),
        (sheet.select_element("a").child(), "a > b"),
        (sheet.select_element("a").sibling(), "a + b"),
        (sheet.select_element("a").adjacent(), "a + b"),
        (sheet.select_element("a").column(), "a || b"),
    ];
    for (rule, expected) in cases {
        assert_eq!(rule.unwrap().element("b").unwrap().selector(), expected);
    }
}

#[test]
fn test_combinator_after_combinator_fails() {
    let sheet = Stylesheet::new();
    let err = sheet.select_element("a").child().unwrap().child().unwrap_err();
    assert_eq!(
        err,
        CssError::Selector {
            fragment: " > ".into(),
            previous: Some(Part::Combinator),
        }
    );
}

#[test]
fn test_combinator_selector_combinator() {
    let sheet = Stylesheet::new();
    let rule = sheet
        .select_element("ul")
        .child()
        .unwrap()
        .element("li")
        .unwrap()
        .descendant()
        .unwrap()
        .element("a")
        .unwrap();
    assert_eq!(rule.selector(), "ul > li a");
}

// ============================================================================
// SELECTOR LISTS
// ============================================================================

#[test]
fn test_join_two_rules() {
    let sheet = Stylesheet::new();
    let right = sheet.select_element("h2").class("title").unwrap();
    let rule = sheet.select_element("h1").join(Some(right)).unwrap();
    assert_eq!(rule.selector(), "h1,h2.title");
    assert_eq!(rule.previous(), Some(Part::Class));

    // Adopted state still governs legality.
    let err = rule.element("span").unwrap_err();
    assert_eq!(
        err,
        CssError::Selector {
            fragment: "span".into(),
            previous: Some(Part::Class),
        }
    );
}

#[test]
fn test_join_adopting_combinator_state() {
    let sheet = Stylesheet::new();
    let right = sheet.select_element("nav").child().unwrap();
    let rule = sheet.select_element("aside").join(Some(right)).unwrap();
    assert!(rule.join(None).is_err());
}

#[test]
fn test_bare_join_then_element() {
    let sheet = Stylesheet::new();
    let rule = sheet
        .select_element("h1")
        .join(None)
        .unwrap()
        .element("h2")
        .unwrap();
    assert_eq!(rule.selector(), "h1,h2");
}

#[test]
fn test_join_after_join_fails() {
    let sheet = Stylesheet::new();
    let err = sheet.select_element("h1").join(None).unwrap().join(None).unwrap_err();
    assert_eq!(err.to_string(), "selector ',' not valid after 'join' selector part");
}

#[test]
fn test_join_after_combinator_fails() {
    let sheet = Stylesheet::new();
    let result = sheet.select_element("h1").child().unwrap().join(None);
    assert!(matches!(result, Err(CssError::Selector { .. })));
}

// ============================================================================
// GENERIC ENTRY POINTS
// ============================================================================

#[test]
fn test_select_by_kind() {
    let sheet = Stylesheet::new();
    assert_eq!(sheet.select("p", "element").unwrap().selector(), "p");
    assert_eq!(sheet.select("a", "class").unwrap().selector(), ".a");
    assert_eq!(sheet.select("b", "id").unwrap().selector(), "#b");
    assert_eq!(sheet.select("hidden", "attribute").unwrap().selector(), "[hidden]");
}

#[test]
fn test_with_by_kind() {
    let sheet = Stylesheet::new();
    let rule = sheet
        .select_element("p")
        .with("note", "class")
        .unwrap()
        .with("lang", "attribute")
        .unwrap();
    assert_eq!(rule.selector(), "p.note[lang]");

    let err = sheet.select_element("p").with("x", "pseudo").unwrap_err();
    assert_eq!(err, CssError::RuleType("pseudo".into()));
}
