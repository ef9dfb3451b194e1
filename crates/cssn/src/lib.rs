//! # cssn - CSS stylesheet builder
//!
//! Build CSS stylesheets from Rust with a fluent API that checks the
//! selector grammar as you go, then serialize them to CSS text.
//!
//! ## Quick Start
//!
//! ```rust
//! use cssn::{Stylesheet, units::CssUnits};
//!
//! let sheet = Stylesheet::new();
//!
//! sheet.select_element("button").class("primary")?.declare(|d| {
//!     d.set("color", "white").set("padding", [4.px(), 8.px()]);
//!     Ok(())
//! })?;
//!
//! sheet.select_element("p").before(|d| {
//!     d.set("content", "\"> \"");
//!     Ok(())
//! })?;
//!
//! assert_eq!(
//!     sheet.render(),
//!     "button.primary {\n  color: white;\n  padding: 4px 8px;\n}\n\
//!      p::before {\n  content: \"> \";\n}"
//! );
//! # Ok::<(), cssn::CssError>(())
//! ```
//!
//! ## Selector grammar
//!
//! - Elements and `*` need a combinator or `,` after another selector part
//! - Classes, ids, attributes and pseudo-classes compound onto anything
//! - Two combinators (or `,`) in a row are rejected
//! - A pseudo-element ends the rule and writes it to the stylesheet
//!
//! ## Modules
//!
//! - [`format`]: Selector fragment formatting
//! - [`grammar`]: Selector state machine, combinator and pseudo selector tables
//! - [`declarations`]: Declaration blocks and value conversion
//! - [`rule`]: The rule builder
//! - [`stylesheet`]: Rule collection and rendering
//! - [`units`]: Length and percentage helpers
//! - [`error`]: Error types

pub mod declarations;
pub mod error;
pub mod format;
pub mod grammar;
pub mod rule;
pub mod stylesheet;
pub mod units;

pub use declarations::{DeclarationBlock, ToCssValue};
pub use error::{CssError, Result};
pub use format::AttributeOp;
pub use grammar::{Combinator, Part};
pub use rule::{Chain, NoBlock, Rule, RuleSeed};
pub use stylesheet::Stylesheet;
