//! Error types for selector building and stylesheet generation.
//!
//! Every error signals misuse of the selector grammar and is raised at the
//! point of misuse. A rule whose chain fails is never written into its
//! stylesheet.

use thiserror::Error;

use crate::grammar::Part;

/// Errors that can occur while building selectors and rules.
///
/// # Examples
///
/// ```rust
/// use cssn::{CssError, Stylesheet};
///
/// let sheet = Stylesheet::new();
/// let err = sheet.select_element("div").element("span").unwrap_err();
/// assert!(matches!(err, CssError::Selector { .. }));
/// assert_eq!(
///     err.to_string(),
///     "selector 'span' not valid after 'element' selector part"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CssError {
    /// A selector part is not allowed after the previous one, such as two
    /// bare elements with no combinator between them, or two combinators in
    /// a row.
    #[error("selector '{fragment}' not valid{}", after_part(.previous))]
    Selector {
        fragment: String,
        previous: Option<Part>,
    },

    /// The generic entry point was asked for a selector kind it does not know.
    #[error("invalid rule type '{0}'")]
    RuleType(String),

    /// A malformed attribute selector, e.g. a comparison with no value.
    #[error("invalid attribute selector: {0}")]
    Attribute(String),

    /// An attribute comparison keyword that is not recognized.
    #[error("invalid attribute comparison '{0}'")]
    AttributeComparison(String),

    /// Unknown pseudo-class, or an argument it does not accept.
    #[error("{}", pseudo_message("pseudo-class", .name, .argument))]
    PseudoClass {
        name: String,
        argument: Option<String>,
    },

    /// Unknown pseudo-element, or an argument it does not accept.
    #[error("{}", pseudo_message("pseudo-element", .name, .argument))]
    PseudoElement {
        name: String,
        argument: Option<String>,
    },

    /// `join` was given something other than another rule.
    #[error("cannot join selector with '{0}'")]
    Join(String),

    /// An operation invoked by name got the wrong number of arguments.
    #[error("wrong number of arguments for '{operation}' (given {given}, expected {expected})")]
    Arity {
        operation: String,
        expected: usize,
        given: usize,
    },

    /// Dynamic dispatch found no operation with this name.
    #[error("no such selector operation '{0}'")]
    NoSuchOperation(String),

    /// Unknown length unit name.
    #[error("unknown length unit '{0}'")]
    Unit(String),
}

impl CssError {
    pub(crate) fn selector(fragment: impl Into<String>, previous: Option<Part>) -> Self {
        CssError::Selector {
            fragment: fragment.into(),
            previous,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CssError>;

fn after_part(previous: &Option<Part>) -> String {
    match previous {
        Some(part) => format!(" after '{}' selector part", part),
        None => String::new(),
    }
}

fn pseudo_message(kind: &str, name: &str, argument: &Option<String>) -> String {
    match argument {
        Some(arg) => format!("argument '{}' invalid for {} '{}'", arg, kind, name),
        None => format!("invalid {} '{}'", kind, name),
    }
}
