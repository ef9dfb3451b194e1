//! The stylesheet: an ordered list of finished rules.
//!
//! Rules are stored as rendered text in the order they were declared. The
//! `select_*` methods start a new [`Rule`] with one selector fragment in
//! place; the rule writes itself back when it is declared.
//!
//! The stylesheet is shared by every rule built from it (including sub-rules
//! started inside declaration blocks), so the rule list sits behind a
//! `RefCell`. No borrow of it outlives a single method call, so declaring
//! while holding the result of [`Stylesheet::rules`] is fine.

use std::cell::RefCell;
use std::fmt;

use crate::error::{CssError, Result};
use crate::format::{self, AttributeOp};
use crate::grammar::Part;
use crate::rule::Rule;

#[derive(Debug, Default)]
pub struct Stylesheet {
    rules: RefCell<Vec<String>>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a stylesheet and fills it with `build`.
    ///
    /// ```rust
    /// use cssn::Stylesheet;
    ///
    /// let sheet = Stylesheet::build(|s| {
    ///     s.select_id("main").declare(|d| {
    ///         d.set("width", "100%");
    ///         Ok(())
    ///     })
    /// })
    /// .unwrap();
    /// assert_eq!(sheet.to_string(), "#main {\n  width: 100%;\n}");
    /// ```
    pub fn build<F>(build: F) -> Result<Self>
    where
        F: FnOnce(&Stylesheet) -> Result<()>,
    {
        let sheet = Self::new();
        build(&sheet)?;
        Ok(sheet)
    }

    pub fn select_element(&self, name: &str) -> Rule<'_> {
        Rule::starting_with(self, Part::Element, format::format_element(name))
    }

    pub fn select_class(&self, name: &str) -> Rule<'_> {
        Rule::starting_with(self, Part::Class, format::format_class(name))
    }

    pub fn select_id(&self, name: &str) -> Rule<'_> {
        Rule::starting_with(self, Part::Id, format::format_id(name))
    }

    pub fn select_attribute(
        &self,
        name: &str,
        op: AttributeOp,
        value: Option<&str>,
        case_sensitive: bool,
    ) -> Result<Rule<'_>> {
        let fragment = format::format_attribute(name, op, value, case_sensitive)?;
        Ok(Rule::starting_with(self, Part::Attribute, fragment))
    }

    /// Starts a rule with the universal selector `*`.
    pub fn select_all(&self) -> Rule<'_> {
        Rule::starting_with(self, Part::All, "*".to_string())
    }

    /// Starts a rule by kind name: `element`, `class`, `id` or `attribute`.
    pub fn select(&self, name: &str, kind: &str) -> Result<Rule<'_>> {
        match kind {
            "element" => Ok(self.select_element(name)),
            "class" => Ok(self.select_class(name)),
            "id" => Ok(self.select_id(name)),
            "attribute" => self.select_attribute(name, AttributeOp::None, None, true),
            other => Err(CssError::RuleType(other.to_string())),
        }
    }

    /// Snapshot of the finished rules, in declaration order.
    pub fn rules(&self) -> Vec<String> {
        self.rules.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.rules.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.borrow().is_empty()
    }

    pub(crate) fn push_rule(&self, rule: String) {
        self.rules.borrow_mut().push(rule);
    }

    /// All rules joined by newlines.
    pub fn render(&self) -> String {
        self.rules.borrow().join("\n")
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
