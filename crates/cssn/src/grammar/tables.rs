//! Static registries for combinators, pseudo-classes and pseudo-elements.
//!
//! Pseudo selector tables are keyed by the underscored form of the name
//! (`nth_child`); the hyphenated form (`nth-child`) is what ends up in the
//! selector text. Use [`pseudo_class`] and [`pseudo_element`] to look a name
//! up in either spelling.

use std::fmt;

use phf::phf_map;

use super::patterns::{is_nth_expression, is_part_name_list};

/// Selector-joining operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Combinator {
    Descendant,
    Child,
    Sibling,
    Adjacent,
    Column,
}

impl Combinator {
    /// Literal text inserted between the two selectors.
    pub fn as_css(self) -> &'static str {
        match self {
            Combinator::Descendant => " ",
            Combinator::Child => " > ",
            // TODO: general sibling is `~` in CSS; switch `Sibling` to " ~ " once
            // callers relying on the current output have migrated.
            Combinator::Sibling | Combinator::Adjacent => " + ",
            Combinator::Column => " || ",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Combinator::Descendant => "descendant",
            Combinator::Child => "child",
            Combinator::Sibling => "sibling",
            Combinator::Adjacent => "adjacent",
            Combinator::Column => "column",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One accepted form of a pseudo selector argument.
#[derive(Clone, Copy)]
pub enum ArgMatcher {
    /// The argument must equal this text.
    Literal(&'static str),
    /// The argument must be recognized by `matches`.
    Pattern {
        name: &'static str,
        matches: fn(&str) -> bool,
    },
}

impl ArgMatcher {
    pub fn accepts(&self, arg: &str) -> bool {
        match self {
            ArgMatcher::Literal(text) => *text == arg,
            ArgMatcher::Pattern { matches, .. } => matches(arg),
        }
    }
}

impl fmt::Debug for ArgMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgMatcher::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            ArgMatcher::Pattern { name, .. } => f.debug_tuple("Pattern").field(name).finish(),
        }
    }
}

/// Which arguments a pseudo-class or pseudo-element takes.
#[derive(Clone, Copy, Debug)]
pub enum ArgSpec {
    /// Takes no arguments at all.
    NoArguments,
    /// Takes any arguments.
    AnyArguments,
    /// Each argument must satisfy at least one matcher.
    OneOf(&'static [ArgMatcher]),
}

impl ArgSpec {
    /// Whether a single argument is acceptable.
    pub fn accepts(&self, arg: &str) -> bool {
        match self {
            ArgSpec::NoArguments => false,
            ArgSpec::AnyArguments => true,
            ArgSpec::OneOf(matchers) => matchers.iter().any(|m| m.accepts(arg)),
        }
    }

    /// Returns the first argument not accepted, if any.
    pub fn first_rejected<'a, S: AsRef<str>>(&self, args: &'a [S]) -> Option<&'a str> {
        args.iter().map(|arg| arg.as_ref()).find(|arg| !self.accepts(arg))
    }
}

const NTH: &[ArgMatcher] = &[
    ArgMatcher::Literal("odd"),
    ArgMatcher::Literal("even"),
    ArgMatcher::Pattern {
        name: "nth expression",
        matches: is_nth_expression,
    },
];

const DIRECTION: &[ArgMatcher] = &[ArgMatcher::Literal("ltr"), ArgMatcher::Literal("rtl")];

const PART_NAMES: &[ArgMatcher] = &[ArgMatcher::Pattern {
    name: "part names",
    matches: is_part_name_list,
}];

/// Combinator names accepted by the rule builder.
pub static COMBINATORS: phf::Map<&'static str, Combinator> = phf_map! {
    "descendant" => Combinator::Descendant,
    "child" => Combinator::Child,
    "sibling" => Combinator::Sibling,
    "adjacent" => Combinator::Adjacent,
    "column" => Combinator::Column,
};

/// Known pseudo-classes.
pub static PSEUDO_CLASSES: phf::Map<&'static str, ArgSpec> = phf_map! {
    // Linguistic
    "dir" => ArgSpec::OneOf(DIRECTION),
    "lang" => ArgSpec::AnyArguments,
    // Location
    "any_link" => ArgSpec::NoArguments,
    "link" => ArgSpec::NoArguments,
    "visited" => ArgSpec::NoArguments,
    "local_link" => ArgSpec::NoArguments,
    "target" => ArgSpec::NoArguments,
    "target_within" => ArgSpec::NoArguments,
    "scope" => ArgSpec::NoArguments,
    // User action
    "hover" => ArgSpec::NoArguments,
    "active" => ArgSpec::NoArguments,
    "focus" => ArgSpec::NoArguments,
    "focus_visible" => ArgSpec::NoArguments,
    "focus_within" => ArgSpec::NoArguments,
    // Time-dimensional
    "current" => ArgSpec::NoArguments,
    "past" => ArgSpec::NoArguments,
    "future" => ArgSpec::NoArguments,
    // Resource state
    "playing" => ArgSpec::NoArguments,
    "paused" => ArgSpec::NoArguments,
    // Input
    "enabled" => ArgSpec::NoArguments,
    "disabled" => ArgSpec::NoArguments,
    "read_only" => ArgSpec::NoArguments,
    "read_write" => ArgSpec::NoArguments,
    "placeholder_shown" => ArgSpec::NoArguments,
    "default" => ArgSpec::NoArguments,
    "checked" => ArgSpec::NoArguments,
    "indeterminate" => ArgSpec::NoArguments,
    "blank" => ArgSpec::NoArguments,
    "valid" => ArgSpec::NoArguments,
    "invalid" => ArgSpec::NoArguments,
    "in_range" => ArgSpec::NoArguments,
    "out_of_range" => ArgSpec::NoArguments,
    "required" => ArgSpec::NoArguments,
    "optional" => ArgSpec::NoArguments,
    "user_invalid" => ArgSpec::NoArguments,
    // Tree-structural
    "root" => ArgSpec::NoArguments,
    "empty" => ArgSpec::NoArguments,
    "nth_child" => ArgSpec::OneOf(NTH),
    "nth_last_child" => ArgSpec::OneOf(NTH),
    "first_child" => ArgSpec::NoArguments,
    "last_child" => ArgSpec::NoArguments,
    "only_child" => ArgSpec::NoArguments,
    "nth_of_type" => ArgSpec::OneOf(NTH),
    "nth_last_of_type" => ArgSpec::OneOf(NTH),
    "first_of_type" => ArgSpec::NoArguments,
    "last_of_type" => ArgSpec::NoArguments,
    "only_of_type" => ArgSpec::NoArguments,
};

/// Known pseudo-elements.
pub static PSEUDO_ELEMENTS: phf::Map<&'static str, ArgSpec> = phf_map! {
    "after" => ArgSpec::NoArguments,
    "before" => ArgSpec::NoArguments,
    "backdrop" => ArgSpec::NoArguments,
    "cue" => ArgSpec::NoArguments,
    "cue_region" => ArgSpec::NoArguments,
    "first_letter" => ArgSpec::NoArguments,
    "first_line" => ArgSpec::NoArguments,
    "file_selector_button" => ArgSpec::NoArguments,
    "grammar_error" => ArgSpec::NoArguments,
    "marker" => ArgSpec::NoArguments,
    "part" => ArgSpec::OneOf(PART_NAMES),
    "placeholder" => ArgSpec::NoArguments,
    "selection" => ArgSpec::NoArguments,
    "slotted" => ArgSpec::AnyArguments,
    "spelling_error" => ArgSpec::NoArguments,
    "target_text" => ArgSpec::NoArguments,
};

/// Underscored lookup key for a pseudo selector name.
pub fn table_key(name: &str) -> String {
    name.replace('-', "_")
}

/// Hyphenated form written into selector text.
pub fn css_name(name: &str) -> String {
    name.replace('_', "-")
}

pub fn combinator(name: &str) -> Option<Combinator> {
    COMBINATORS.get(name).copied()
}

pub fn pseudo_class(name: &str) -> Option<ArgSpec> {
    PSEUDO_CLASSES.get(table_key(name).as_str()).copied()
}

pub fn pseudo_element(name: &str) -> Option<ArgSpec> {
    PSEUDO_ELEMENTS.get(table_key(name).as_str()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sibling_and_adjacent_are_distinct_names() {
        assert_eq!(combinator("sibling"), Some(Combinator::Sibling));
        assert_eq!(combinator("adjacent"), Some(Combinator::Adjacent));
        assert_eq!(Combinator::Sibling.as_css(), Combinator::Adjacent.as_css());
        assert_eq!(combinator("general"), None);
    }

    #[test]
    fn lookups_accept_either_spelling() {
        assert!(pseudo_class("first-child").is_some());
        assert!(pseudo_class("first_child").is_some());
        assert!(pseudo_element("first-line").is_some());
        assert!(pseudo_class("before").is_none());
        assert!(pseudo_element("hover").is_none());
    }

    #[test]
    fn no_argument_specs_reject_everything() {
        for (name, spec) in PSEUDO_CLASSES.entries() {
            if matches!(spec, ArgSpec::NoArguments) {
                assert!(!spec.accepts(""), "{name} accepted an argument");
                assert!(!spec.accepts("x"), "{name} accepted an argument");
            }
        }
    }

    #[test]
    fn enumerated_spec_reports_first_rejected_argument() {
        let spec = pseudo_class("dir").unwrap();
        assert_eq!(spec.first_rejected(&["ltr"]), None);
        assert_eq!(spec.first_rejected(&["rtl", "up", "down"]), Some("up"));
    }

    #[test]
    fn debug_names_patterns() {
        assert_eq!(format!("{:?}", NTH[2]), "Pattern(\"nth expression\")");
    }
}
