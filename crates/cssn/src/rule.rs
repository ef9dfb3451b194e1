//! The rule builder.
//!
//! A [`Rule`] accumulates selector text one fragment at a time. Every
//! fragment goes through [`grammar::advance`] before it is appended, so a
//! builder never holds a selector the grammar rejected. A rule is written
//! into its [`Stylesheet`] only by [`Rule::declare`] (or by a pseudo-element,
//! which always ends the rule).
//!
//! ```rust
//! use cssn::Stylesheet;
//!
//! let sheet = Stylesheet::new();
//! sheet
//!     .select_class("menu")
//!     .child()?
//!     .element("li")?
//!     .pseudo_class("nth-child", &["2n + 1"])?
//!     .declare(|d| {
//!         d.set("background_color", "#eee");
//!         Ok(())
//!     })?;
//!
//! assert_eq!(
//!     sheet.render(),
//!     ".menu > li:nth-child(2n + 1) {\n  background-color: #eee;\n}"
//! );
//! # Ok::<(), cssn::CssError>(())
//! ```

use std::fmt;

use crate::declarations::DeclarationBlock;
use crate::error::{CssError, Result};
use crate::format::{self, AttributeOp};
use crate::grammar::{self, Combinator, Operation, Part, tables};
use crate::stylesheet::Stylesheet;

/// Placeholder block type for [`Rule::chain`] and [`Rule::invoke`] calls
/// that pass `None`.
pub type NoBlock = fn(&mut DeclarationBlock<'_>) -> Result<()>;

/// Selector text and state of a rule, detached from the builder.
///
/// This is what a [`DeclarationBlock`] keeps to start sub-rules that share
/// the enclosing selector.
#[derive(Debug, Clone)]
pub struct RuleSeed<'s> {
    sheet: &'s Stylesheet,
    selector: String,
    previous: Option<Part>,
}

impl RuleSeed<'_> {
    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn previous(&self) -> Option<Part> {
        self.previous
    }
}

/// Outcome of [`Rule::chain`] and [`Rule::invoke`].
#[derive(Debug)]
pub enum Chain<'s> {
    /// No declarations were given; the rule can be extended further.
    Open(Rule<'s>),
    /// The rule was written to the stylesheet.
    Finalized,
}

impl<'s> Chain<'s> {
    pub fn into_rule(self) -> Option<Rule<'s>> {
        match self {
            Chain::Open(rule) => Some(rule),
            Chain::Finalized => None,
        }
    }

    pub fn is_finalized(&self) -> bool {
        matches!(self, Chain::Finalized)
    }
}

/// A selector being built against a stylesheet.
#[derive(Debug)]
#[must_use = "a rule is only added to its stylesheet by `declare`"]
pub struct Rule<'s> {
    sheet: &'s Stylesheet,
    selector: String,
    previous: Option<Part>,
}

impl<'s> Rule<'s> {
    /// A rule whose first fragment is already in place. Any part may start a
    /// selector, so no grammar check is needed.
    pub(crate) fn starting_with(sheet: &'s Stylesheet, part: Part, fragment: String) -> Self {
        Self {
            sheet,
            selector: fragment,
            previous: Some(part),
        }
    }

    pub(crate) fn from_seed(seed: RuleSeed<'s>) -> Self {
        Self {
            sheet: seed.sheet,
            selector: seed.selector,
            previous: seed.previous,
        }
    }

    /// Snapshot of the selector built so far.
    pub fn seed(&self) -> RuleSeed<'s> {
        RuleSeed {
            sheet: self.sheet,
            selector: self.selector.clone(),
            previous: self.previous,
        }
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Kind of the last appended fragment.
    pub fn previous(&self) -> Option<Part> {
        self.previous
    }

    fn append(mut self, part: Part, fragment: &str) -> Result<Self> {
        self.previous = Some(grammar::advance(self.previous, part, fragment)?);
        self.selector.push_str(fragment);
        Ok(self)
    }

    pub fn element(self, name: &str) -> Result<Self> {
        self.append(Part::Element, &format::format_element(name))
    }

    pub fn class(self, name: &str) -> Result<Self> {
        self.append(Part::Class, &format::format_class(name))
    }

    pub fn id(self, name: &str) -> Result<Self> {
        self.append(Part::Id, &format::format_id(name))
    }

    pub fn attribute(
        self,
        name: &str,
        op: AttributeOp,
        value: Option<&str>,
        case_sensitive: bool,
    ) -> Result<Self> {
        let fragment = format::format_attribute(name, op, value, case_sensitive)?;
        self.append(Part::Attribute, &fragment)
    }

    /// The universal selector `*`.
    pub fn all(self) -> Result<Self> {
        self.append(Part::All, "*")
    }

    /// Appends a selector fragment chosen by kind name: `element`, `class`,
    /// `id` or `attribute` (presence match).
    pub fn with(self, name: &str, kind: &str) -> Result<Self> {
        match kind {
            "element" => self.element(name),
            "class" => self.class(name),
            "id" => self.id(name),
            "attribute" => self.attribute(name, AttributeOp::None, None, true),
            other => Err(CssError::RuleType(other.to_string())),
        }
    }

    /// Starts the next selector of a selector list.
    ///
    /// With another rule, its selector text is appended after the `,` and its
    /// state is adopted, so chaining continues as if the two had been built
    /// as one. The other rule is consumed without being declared.
    pub fn join(mut self, other: Option<Rule<'s>>) -> Result<Self> {
        grammar::advance(self.previous, Part::Join, ",")?;
        self.selector.push(',');
        match other {
            Some(other) => {
                self.selector.push_str(&other.selector);
                self.previous = other.previous;
            }
            None => self.previous = Some(Part::Join),
        }
        Ok(self)
    }

    pub fn combinator(self, kind: Combinator) -> Result<Self> {
        self.append(Part::Combinator, kind.as_css())
    }

    pub fn descendant(self) -> Result<Self> {
        self.combinator(Combinator::Descendant)
    }

    pub fn child(self) -> Result<Self> {
        self.combinator(Combinator::Child)
    }

    pub fn sibling(self) -> Result<Self> {
        self.combinator(Combinator::Sibling)
    }

    pub fn adjacent(self) -> Result<Self> {
        self.combinator(Combinator::Adjacent)
    }

    pub fn column(self) -> Result<Self> {
        self.combinator(Combinator::Column)
    }

    /// Appends `:name` or `:name(args)`.
    ///
    /// `name` may use hyphens or underscores. Each argument must be accepted
    /// by the pseudo-class's [`ArgSpec`](crate::grammar::ArgSpec).
    pub fn pseudo_class<S: AsRef<str>>(self, name: &str, args: &[S]) -> Result<Self> {
        let css = tables::css_name(name);
        let spec = tables::pseudo_class(name).ok_or_else(|| CssError::PseudoClass {
            name: css.clone(),
            argument: None,
        })?;
        if let Some(bad) = spec.first_rejected(args) {
            return Err(CssError::PseudoClass {
                name: css,
                argument: Some(bad.to_string()),
            });
        }
        let fragment = pseudo_fragment(":", &css, args);
        self.append(Part::PseudoClass, &fragment)
    }

    /// Appends `::name` or `::name(args)` and writes the rule with the
    /// declarations from `block`.
    ///
    /// Nothing may follow a pseudo-element, so this always ends the rule.
    pub fn pseudo_element<S, F>(self, name: &str, args: &[S], block: F) -> Result<()>
    where
        S: AsRef<str>,
        F: FnOnce(&mut DeclarationBlock<'s>) -> Result<()>,
    {
        let css = tables::css_name(name);
        let spec = tables::pseudo_element(name).ok_or_else(|| CssError::PseudoElement {
            name: css.clone(),
            argument: None,
        })?;
        if let Some(bad) = spec.first_rejected(args) {
            return Err(CssError::PseudoElement {
                name: css,
                argument: Some(bad.to_string()),
            });
        }
        let fragment = pseudo_fragment("::", &css, args);
        self.append(Part::PseudoElement, &fragment)?.declare(block)
    }

    pub fn hover(self) -> Result<Self> {
        self.pseudo_class::<&str>("hover", &[])
    }

    pub fn focus(self) -> Result<Self> {
        self.pseudo_class::<&str>("focus", &[])
    }

    pub fn active(self) -> Result<Self> {
        self.pseudo_class::<&str>("active", &[])
    }

    pub fn first_child(self) -> Result<Self> {
        self.pseudo_class::<&str>("first-child", &[])
    }

    pub fn last_child(self) -> Result<Self> {
        self.pseudo_class::<&str>("last-child", &[])
    }

    pub fn nth_child(self, expr: &str) -> Result<Self> {
        self.pseudo_class("nth-child", &[expr])
    }

    pub fn before<F>(self, block: F) -> Result<()>
    where
        F: FnOnce(&mut DeclarationBlock<'s>) -> Result<()>,
    {
        self.pseudo_element::<&str, F>("before", &[], block)
    }

    pub fn after<F>(self, block: F) -> Result<()>
    where
        F: FnOnce(&mut DeclarationBlock<'s>) -> Result<()>,
    {
        self.pseudo_element::<&str, F>("after", &[], block)
    }

    /// Fills a declaration block and writes `selector {block}` to the
    /// stylesheet.
    ///
    /// Rules started with [`DeclarationBlock::subrule`] inside `block` are
    /// written first. If `block` fails, this rule is not written.
    pub fn declare<F>(self, block: F) -> Result<()>
    where
        F: FnOnce(&mut DeclarationBlock<'s>) -> Result<()>,
    {
        let mut declarations = DeclarationBlock::new(self.seed());
        block(&mut declarations)?;
        log::debug!(
            "rule '{}' finalized with {} declarations",
            self.selector,
            declarations.len()
        );
        self.sheet
            .push_rule(format!("{} {}", self.selector, declarations.render()));
        Ok(())
    }

    /// Declares the rule when `block` is given, otherwise hands it back for
    /// more chaining.
    pub fn chain<F>(self, block: Option<F>) -> Result<Chain<'s>>
    where
        F: FnOnce(&mut DeclarationBlock<'s>) -> Result<()>,
    {
        match block {
            Some(block) => {
                self.declare(block)?;
                Ok(Chain::Finalized)
            }
            None => Ok(Chain::Open(self)),
        }
    }

    /// Runs an operation by name.
    ///
    /// Resolution order: builder operations (`element`, `class`, `id`,
    /// `attribute`, `all`, `join`), combinators, pseudo-classes, then
    /// pseudo-elements. A pseudo-element always ends the rule, with empty
    /// declarations if no block is given. `attribute` takes the name, then an
    /// optional comparison keyword and value, then an optional `i` flag for a
    /// case-insensitive match. `join` cannot refer to another rule by name, so
    /// it only accepts no arguments.
    pub fn invoke<S, F>(self, name: &str, args: &[S], block: Option<F>) -> Result<Chain<'s>>
    where
        S: AsRef<str>,
        F: FnOnce(&mut DeclarationBlock<'s>) -> Result<()>,
    {
        let op = grammar::resolve(name).ok_or_else(|| CssError::NoSuchOperation(name.into()))?;
        let rule = match op {
            Operation::Element => self.element(single_arg(name, args)?)?,
            Operation::Class => self.class(single_arg(name, args)?)?,
            Operation::Id => self.id(single_arg(name, args)?)?,
            Operation::Attribute => {
                if args.is_empty() {
                    return Err(arity(name, 1, 0));
                }
                if args.len() > 4 {
                    return Err(arity(name, 4, args.len()));
                }
                let op = match args.get(1) {
                    Some(keyword) => keyword.as_ref().parse::<AttributeOp>()?,
                    None => AttributeOp::None,
                };
                let value = args.get(2).map(|v| v.as_ref());
                let case_sensitive = match args.get(3).map(|flag| flag.as_ref()) {
                    None => true,
                    Some("i") => false,
                    Some(flag) => {
                        return Err(CssError::Attribute(format!(
                            "unknown flag '{}' on '{}'",
                            flag,
                            args[0].as_ref()
                        )));
                    }
                };
                self.attribute(args[0].as_ref(), op, value, case_sensitive)?
            }
            Operation::All => {
                no_args(name, args)?;
                self.all()?
            }
            Operation::Join => {
                if let Some(arg) = args.first() {
                    return Err(CssError::Join(arg.as_ref().to_string()));
                }
                self.join(None)?
            }
            Operation::Combinator(kind) => {
                no_args(name, args)?;
                self.combinator(kind)?
            }
            Operation::PseudoClass => self.pseudo_class(name, args)?,
            Operation::PseudoElement => {
                match block {
                    Some(block) => self.pseudo_element(name, args, block)?,
                    None => self.pseudo_element(name, args, |_: &mut DeclarationBlock<'s>| Ok(()))?,
                }
                return Ok(Chain::Finalized);
            }
        };
        rule.chain(block)
    }

    /// Whether [`Rule::invoke`] knows an operation called `name`.
    pub fn responds_to(name: &str) -> bool {
        grammar::resolve(name).is_some()
    }
}

impl fmt::Display for Rule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.selector)
    }
}

fn pseudo_fragment<S: AsRef<str>>(prefix: &str, name: &str, args: &[S]) -> String {
    let mut out = format!("{}{}", prefix, name);
    if !args.is_empty() {
        let joined = args.iter().map(|a| a.as_ref()).collect::<Vec<_>>().join(" ");
        out.push('(');
        out.push_str(&joined);
        out.push(')');
    }
    out
}

fn arity(name: &str, expected: usize, given: usize) -> CssError {
    CssError::Arity {
        operation: name.to_string(),
        expected,
        given,
    }
}

fn single_arg<'a, S: AsRef<str>>(name: &str, args: &'a [S]) -> Result<&'a str> {
    match args {
        [arg] => Ok(arg.as_ref()),
        _ => Err(arity(name, 1, args.len())),
    }
}

fn no_args<S: AsRef<str>>(name: &str, args: &[S]) -> Result<()> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(arity(name, 0, args.len()))
    }
}
