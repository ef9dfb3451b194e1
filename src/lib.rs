//! Programmatic CSS stylesheets.
//!
//! `css-native` re-exports the [`cssn`] builder and adds [`stylesheet`], the
//! usual way to start:
//!
//! ```rust
//! use css_native::{stylesheet, AttributeOp, units::CssUnits};
//!
//! let sheet = stylesheet(|s| {
//!     s.select_element("a")
//!         .attribute("href", AttributeOp::StartsWith, Some("https"), true)?
//!         .declare(|d| {
//!             d.set("padding_right", 12.px());
//!             Ok(())
//!         })
//! })
//! .unwrap();
//!
//! assert_eq!(
//!     sheet.to_string(),
//!     "a[href^=\"https\"] {\n  padding-right: 12px;\n}"
//! );
//! ```

pub use cssn::*;

/// Creates a stylesheet and fills it with `build`.
///
/// Any error returned by `build` is returned here and the partly built
/// stylesheet is dropped.
///
/// ```rust
/// use css_native::{stylesheet, CssError};
///
/// let result = stylesheet(|s| {
///     let _rule = s.select_element("p").element("span")?;
///     Ok(())
/// });
/// assert!(matches!(result, Err(CssError::Selector { .. })));
/// ```
pub fn stylesheet<F>(build: F) -> Result<Stylesheet>
where
    F: FnOnce(&Stylesheet) -> Result<()>,
{
    Stylesheet::build(build)
}
