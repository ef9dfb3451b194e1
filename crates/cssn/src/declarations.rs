//! Declaration blocks: the `{ property: value; }` body of a rule.
//!
//! A [`DeclarationBlock`] is handed to the closure passed to
//! [`Rule::declare`](crate::Rule::declare). Property names are written with
//! underscores or hyphens (`margin_top` and `margin-top` are the same
//! property); values are anything implementing [`ToCssValue`].
//!
//! ```rust
//! use cssn::Stylesheet;
//!
//! let sheet = Stylesheet::new();
//! sheet
//!     .select_element("p")
//!     .declare(|d| {
//!         d.set("color", "red").set("margin", [1, 2]);
//!         Ok(())
//!     })
//!     .unwrap();
//! assert_eq!(sheet.render(), "p {\n  color: red;\n  margin: 1 2;\n}");
//! ```

use std::fmt;

use crate::rule::{Rule, RuleSeed};

/// Conversion of a Rust value into CSS value text.
///
/// Sequences are joined with single spaces, everything else is stringified.
pub trait ToCssValue {
    fn to_css_value(&self) -> String;
}

impl<T: ToCssValue + ?Sized> ToCssValue for &T {
    fn to_css_value(&self) -> String {
        (**self).to_css_value()
    }
}

impl ToCssValue for str {
    fn to_css_value(&self) -> String {
        self.to_string()
    }
}

impl ToCssValue for String {
    fn to_css_value(&self) -> String {
        self.clone()
    }
}

macro_rules! display_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl ToCssValue for $t {
                fn to_css_value(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

display_value!(
    char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

impl<T: ToCssValue> ToCssValue for [T] {
    fn to_css_value(&self) -> String {
        self.iter()
            .map(ToCssValue::to_css_value)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<T: ToCssValue, const N: usize> ToCssValue for [T; N] {
    fn to_css_value(&self) -> String {
        self.as_slice().to_css_value()
    }
}

impl<T: ToCssValue> ToCssValue for Vec<T> {
    fn to_css_value(&self) -> String {
        self.as_slice().to_css_value()
    }
}

/// Properties of one rule, in the order they were first set.
#[derive(Debug, Clone)]
pub struct DeclarationBlock<'s> {
    properties: Vec<(String, String)>,
    origin: RuleSeed<'s>,
}

impl<'s> DeclarationBlock<'s> {
    pub(crate) fn new(origin: RuleSeed<'s>) -> Self {
        Self {
            properties: Vec::new(),
            origin,
        }
    }

    /// Sets a property, replacing any earlier value for the same name.
    ///
    /// Underscores in `property` become hyphens.
    pub fn set(&mut self, property: &str, value: impl ToCssValue) -> &mut Self {
        let name = property.replace('_', "-");
        let value = value.to_css_value();
        match self.properties.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.properties.push((name, value)),
        }
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        let name = property.replace('_', "-");
        self.properties
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Starts a new rule that continues the selector this block belongs to.
    ///
    /// The new rule writes to the same stylesheet and picks up the selector
    /// state, so `d.subrule().pseudo_class("hover", &[])` extends the
    /// enclosing selector with `:hover`.
    pub fn subrule(&self) -> Rule<'s> {
        Rule::from_seed(self.origin.clone())
    }

    /// Renders the braced block, one `  name: value;` line per property.
    pub fn render(&self) -> String {
        let body = self
            .properties
            .iter()
            .map(|(k, v)| format!("  {}: {};", k, v))
            .collect::<Vec<_>>()
            .join("\n");
        format!("{{\n{}\n}}", body)
    }
}

impl fmt::Display for DeclarationBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
