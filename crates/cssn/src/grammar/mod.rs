//! Selector grammar: which selector parts may follow which.
//!
//! A rule builder tracks the kind of the last fragment it appended as an
//! `Option<Part>` (`None` before anything was appended). Each append goes
//! through [`advance`], a pure transition function, so the grammar can be
//! exercised without building any rules:
//!
//! ```rust
//! use cssn::grammar::{advance, Part};
//!
//! let state = advance(None, Part::Element, "div").unwrap();
//! let state = advance(Some(state), Part::Class, ".a").unwrap();
//! assert!(advance(Some(state), Part::Element, "span").is_err());
//! assert!(advance(Some(Part::Combinator), Part::Join, ",").is_err());
//! ```
//!
//! ## Submodules
//!
//! - [`tables`]: combinator and pseudo selector registries
//! - [`patterns`]: recognizers used by pseudo selector argument specs

pub mod patterns;
pub mod tables;

pub use tables::{ArgMatcher, ArgSpec, Combinator};

use std::fmt;

use phf::phf_map;

use crate::error::{CssError, Result};

/// Kind of a selector fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Part {
    Element,
    Class,
    Id,
    Attribute,
    /// The universal selector `*`.
    All,
    PseudoClass,
    PseudoElement,
    Combinator,
    /// Selector list separator `,`.
    Join,
}

impl Part {
    pub fn name(self) -> &'static str {
        match self {
            Part::Element => "element",
            Part::Class => "class",
            Part::Id => "id",
            Part::Attribute => "attribute",
            Part::All => "all",
            Part::PseudoClass => "pseudo-class",
            Part::PseudoElement => "pseudo-element",
            Part::Combinator => "combinator",
            Part::Join => "join",
        }
    }

    pub fn is_selector_part(self) -> bool {
        !self.is_joiner()
    }

    pub fn is_joiner(self) -> bool {
        matches!(self, Part::Join | Part::Combinator)
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether the last appended fragment was a selector part.
pub fn is_selector_part(previous: Option<Part>) -> bool {
    previous.is_some_and(Part::is_selector_part)
}

/// Whether the last appended fragment was a combinator or `,`.
pub fn is_joiner(previous: Option<Part>) -> bool {
    previous.is_some_and(Part::is_joiner)
}

/// Validates appending `next` after `previous` and returns the new state.
///
/// Elements and `*` may not directly follow another selector part, and a
/// combinator or `,` may not directly follow another combinator or `,`.
/// Classes, ids, attributes and pseudo selectors compound onto anything.
/// `fragment` is the text being appended, used for the error message.
pub fn advance(previous: Option<Part>, next: Part, fragment: &str) -> Result<Part> {
    let legal = match next {
        Part::Element | Part::All => !is_selector_part(previous),
        Part::Combinator | Part::Join => !is_joiner(previous),
        Part::Class | Part::Id | Part::Attribute | Part::PseudoClass | Part::PseudoElement => true,
    };

    if !legal {
        return Err(CssError::selector(fragment, previous));
    }
    log::trace!("selector part {:?} -> {} ({:?})", previous, next, fragment);
    Ok(next)
}

/// Builder operation reachable by name through [`crate::Rule::invoke`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operation {
    Element,
    Class,
    Id,
    Attribute,
    All,
    Join,
    Combinator(Combinator),
    PseudoClass,
    PseudoElement,
}

static NAMED_OPERATIONS: phf::Map<&'static str, Operation> = phf_map! {
    "element" => Operation::Element,
    "class" => Operation::Class,
    "id" => Operation::Id,
    "attribute" => Operation::Attribute,
    "all" => Operation::All,
    "join" => Operation::Join,
};

/// Resolves an operation name.
///
/// Builder operations are checked first, then the combinator table, the
/// pseudo-class table and finally the pseudo-element table.
pub fn resolve(name: &str) -> Option<Operation> {
    if let Some(op) = NAMED_OPERATIONS.get(name) {
        return Some(*op);
    }
    if let Some(c) = tables::combinator(name) {
        return Some(Operation::Combinator(c));
    }
    if tables::pseudo_class(name).is_some() {
        return Some(Operation::PseudoClass);
    }
    if tables::pseudo_element(name).is_some() {
        return Some(Operation::PseudoElement);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_PARTS: [Part; 9] = [
        Part::Element,
        Part::Class,
        Part::Id,
        Part::Attribute,
        Part::All,
        Part::PseudoClass,
        Part::PseudoElement,
        Part::Combinator,
        Part::Join,
    ];

    #[test]
    fn anything_may_start_a_selector() {
        for part in ALL_PARTS {
            assert_eq!(advance(None, part, "x"), Ok(part));
        }
    }

    #[test]
    fn element_and_all_need_a_joiner_after_selector_parts() {
        for previous in ALL_PARTS {
            for next in [Part::Element, Part::All] {
                let result = advance(Some(previous), next, "x");
                assert_eq!(result.is_ok(), previous.is_joiner(), "{previous} -> {next}");
            }
        }
    }

    #[test]
    fn joiners_cannot_repeat() {
        for previous in [Part::Combinator, Part::Join] {
            for next in [Part::Combinator, Part::Join] {
                let err = advance(Some(previous), next, " > ").unwrap_err();
                assert_eq!(
                    err,
                    CssError::Selector {
                        fragment: " > ".into(),
                        previous: Some(previous),
                    }
                );
            }
        }
    }

    #[test]
    fn compounding_parts_always_allowed() {
        for previous in ALL_PARTS {
            for next in [Part::Class, Part::Id, Part::Attribute, Part::PseudoClass] {
                assert!(advance(Some(previous), next, "x").is_ok());
            }
        }
    }

    #[test]
    fn resolve_order() {
        assert_eq!(resolve("class"), Some(Operation::Class));
        assert_eq!(resolve("child"), Some(Operation::Combinator(Combinator::Child)));
        assert_eq!(resolve("nth-child"), Some(Operation::PseudoClass));
        assert_eq!(resolve("first_letter"), Some(Operation::PseudoElement));
        assert_eq!(resolve("blink"), None);
    }
}
