//! Length and percentage values.
//!
//! A small convenience for writing declaration values: suffix a number with
//! a unit.
//!
//! ```rust
//! use cssn::units::{CssUnits, Length, Unit};
//!
//! assert_eq!(10.px(), "10px");
//! assert_eq!(1.5.em(), "1.5em");
//! assert_eq!(50.pct(), "50%");
//! assert_eq!(Length::new(2.0, Unit::Rem).to_string(), "2rem");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::declarations::ToCssValue;
use crate::error::{CssError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Font size of the element.
    Em,
    /// x-height of the element's font.
    Ex,
    /// Advance width of `0`.
    Ch,
    /// Font size of the root element.
    Rem,
    /// Line height of the element.
    Lh,
    /// 1% of the viewport width.
    Vw,
    /// 1% of the viewport height.
    Vh,
    Vmin,
    Vmax,
    Px,
    Pt,
    Pc,
    In,
    /// Quarter millimetres.
    Q,
    Mm,
    Cm,
    Percent,
}

impl Unit {
    /// Suffix written after the number.
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Em => "em",
            Unit::Ex => "ex",
            Unit::Ch => "ch",
            Unit::Rem => "rem",
            Unit::Lh => "lh",
            Unit::Vw => "vw",
            Unit::Vh => "vh",
            Unit::Vmin => "vmin",
            Unit::Vmax => "vmax",
            Unit::Px => "px",
            Unit::Pt => "pt",
            Unit::Pc => "pc",
            Unit::In => "in",
            Unit::Q => "Q",
            Unit::Mm => "mm",
            Unit::Cm => "cm",
            Unit::Percent => "%",
        }
    }
}

impl FromStr for Unit {
    type Err = CssError;

    /// Parses a unit name. Percentages are spelled `pct` or `percent`.
    fn from_str(s: &str) -> Result<Self> {
        let unit = match s {
            "em" => Unit::Em,
            "ex" => Unit::Ex,
            "ch" => Unit::Ch,
            "rem" => Unit::Rem,
            "lh" => Unit::Lh,
            "vw" => Unit::Vw,
            "vh" => Unit::Vh,
            "vmin" => Unit::Vmin,
            "vmax" => Unit::Vmax,
            "px" => Unit::Px,
            "pt" => Unit::Pt,
            "pc" => Unit::Pc,
            "in" => Unit::In,
            "Q" => Unit::Q,
            "mm" => Unit::Mm,
            "cm" => Unit::Cm,
            "pct" | "percent" => Unit::Percent,
            other => return Err(CssError::Unit(other.to_string())),
        };
        Ok(unit)
    }
}

/// A number with a unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: Unit,
}

impl Length {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub fn percent(value: f64) -> Self {
        Self::new(value, Unit::Percent)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}

impl ToCssValue for Length {
    fn to_css_value(&self) -> String {
        self.to_string()
    }
}

/// Formats `value` with the unit called `unit`, e.g. `length(10, "px")`.
pub fn length(value: impl fmt::Display, unit: &str) -> Result<String> {
    let unit: Unit = unit.parse()?;
    Ok(format!("{}{}", value, unit.suffix()))
}

macro_rules! unit_methods {
    ($($method:ident => $unit:ident),* $(,)?) => {
        $(
            fn $method(&self) -> String {
                format!("{}{}", self, Unit::$unit.suffix())
            }
        )*
    };
}

/// Unit suffixes on plain numbers: `10.px()`, `2.5.rem()`, `50.pct()`.
pub trait CssUnits: fmt::Display {
    unit_methods!(
        em => Em,
        ex => Ex,
        ch => Ch,
        rem => Rem,
        lh => Lh,
        vw => Vw,
        vh => Vh,
        vmin => Vmin,
        vmax => Vmax,
        px => Px,
        pt => Pt,
        pc => Pc,
        inch => In,
        q => Q,
        mm => Mm,
        cm => Cm,
        pct => Percent,
        percent => Percent,
    );
}

macro_rules! impl_css_units {
    ($($t:ty),* $(,)?) => {
        $(impl CssUnits for $t {})*
    };
}

impl_css_units!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_methods() {
        assert_eq!(10.px(), "10px");
        assert_eq!(3.inch(), "3in");
        assert_eq!(4.q(), "4Q");
        assert_eq!(0.75.vmin(), "0.75vmin");
        assert_eq!(25.percent(), "25%");
        assert_eq!((-2).em(), "-2em");
    }

    #[test]
    fn length_by_name() {
        assert_eq!(length(10, "px").unwrap(), "10px");
        assert_eq!(length(10, "pct").unwrap(), "10%");
        assert_eq!(length(10, "percent").unwrap(), "10%");
        assert_eq!(length(1, "furlong"), Err(CssError::Unit("furlong".into())));
    }

    #[test]
    fn length_values() {
        assert_eq!(Length::percent(33.5).to_string(), "33.5%");
        assert_eq!(Length::new(12.0, Unit::Pt).to_css_value(), "12pt");
        assert_eq!("vmax".parse::<Unit>(), Ok(Unit::Vmax));
    }
}
