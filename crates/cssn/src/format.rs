//! Selector fragment formatting.
//!
//! Pure functions that turn a selector name (plus options for attribute
//! matchers) into the text of one selector fragment. They know nothing about
//! what came before the fragment; legality is checked by [`crate::grammar`].
//!
//! ```rust
//! use cssn::format::{format_attribute, format_class, AttributeOp};
//!
//! assert_eq!(format_class("primary"), ".primary");
//! assert_eq!(
//!     format_attribute("lang", AttributeOp::Matches, Some("en"), false).unwrap(),
//!     r#"[lang|="en" i]"#
//! );
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{CssError, Result};

/// Comparison used by an attribute selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AttributeOp {
    /// Presence only: `[name]`.
    #[default]
    None,
    /// `[name="value"]`
    Equals,
    /// Whitespace separated word match: `[name~="value"]`
    Include,
    /// Exact or hyphen prefixed match: `[name|="value"]`
    Matches,
    /// `[name^="value"]`
    StartsWith,
    /// `[name$="value"]`
    EndsWith,
    /// `[name*="value"]`
    Contains,
}

impl AttributeOp {
    /// The operator text placed between the attribute name and value.
    pub fn as_css(self) -> &'static str {
        match self {
            AttributeOp::None => "",
            AttributeOp::Equals => "=",
            AttributeOp::Include => "~=",
            AttributeOp::Matches => "|=",
            AttributeOp::StartsWith => "^=",
            AttributeOp::EndsWith => "$=",
            AttributeOp::Contains => "*=",
        }
    }

    /// The keyword accepted by [`FromStr`].
    pub fn keyword(self) -> &'static str {
        match self {
            AttributeOp::None => "none",
            AttributeOp::Equals => "equals",
            AttributeOp::Include => "include",
            AttributeOp::Matches => "matches",
            AttributeOp::StartsWith => "starts_with",
            AttributeOp::EndsWith => "ends_with",
            AttributeOp::Contains => "contains",
        }
    }
}

impl fmt::Display for AttributeOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for AttributeOp {
    type Err = CssError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Ok(AttributeOp::None),
            "equals" => Ok(AttributeOp::Equals),
            "include" => Ok(AttributeOp::Include),
            "matches" => Ok(AttributeOp::Matches),
            "starts_with" => Ok(AttributeOp::StartsWith),
            "ends_with" => Ok(AttributeOp::EndsWith),
            "contains" => Ok(AttributeOp::Contains),
            other => Err(CssError::AttributeComparison(other.to_string())),
        }
    }
}

pub fn format_element(name: &str) -> String {
    name.to_string()
}

pub fn format_class(name: &str) -> String {
    format!(".{}", name)
}

pub fn format_id(name: &str) -> String {
    format!("#{}", name)
}

/// Formats an attribute selector such as `[data-x="1" i]`.
///
/// A comparison needs a value, and a value needs a comparison; either
/// mismatch is rejected with [`CssError::Attribute`]. Passing
/// `case_sensitive = false` appends the ` i` flag.
pub fn format_attribute(
    name: &str,
    op: AttributeOp,
    value: Option<&str>,
    case_sensitive: bool,
) -> Result<String> {
    let mut out = String::with_capacity(name.len() + 8);
    out.push('[');
    out.push_str(name);

    match (op, value) {
        (AttributeOp::None, None) => {}
        (AttributeOp::None, Some(value)) => {
            return Err(CssError::Attribute(format!(
                "value \"{}\" given for '{}' without a comparison",
                value, name
            )));
        }
        (op, None) => {
            return Err(CssError::Attribute(format!(
                "comparison '{}' on '{}' requires a value",
                op, name
            )));
        }
        (op, Some(value)) => {
            out.push_str(op.as_css());
            out.push('"');
            out.push_str(value);
            out.push('"');
        }
    }

    if !case_sensitive {
        out.push_str(" i");
    }
    out.push(']');
    Ok(out)
}
