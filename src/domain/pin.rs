// ============================================================================
// Gauge Pin Domain Model
// ============================================================================

use crate::numeric::{CalcError, Diameter};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

/// Gauge pin tolerance class, ordered from tightest (`XX`) to loosest (`ZZ`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ToleranceClass {
    XX,
    X,
    Y,
    Z,
    ZZ,
}

impl ToleranceClass {
    /// All classes, tightest first
    pub const ALL: [ToleranceClass; 5] = [
        ToleranceClass::XX,
        ToleranceClass::X,
        ToleranceClass::Y,
        ToleranceClass::Z,
        ToleranceClass::ZZ,
    ];

    /// Column of this class in a tolerance table row.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ToleranceClass::XX => "XX",
            ToleranceClass::X => "X",
            ToleranceClass::Y => "Y",
            ToleranceClass::Z => "Z",
            ToleranceClass::ZZ => "ZZ",
        }
    }
}

impl fmt::Display for ToleranceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToleranceClass {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ToleranceClass::ALL
            .into_iter()
            .find(|class| class.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CalcError::InvalidToleranceClass(s.to_string()))
    }
}

/// Side of the nominal diameter the tolerance band lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sign {
    /// Nominal is the minimum, the pin may be up to one tolerance larger
    Plus,
    /// Nominal is the maximum, the pin may be up to one tolerance smaller
    Minus,
}

impl Sign {
    pub const fn symbol(self) -> char {
        match self {
            Sign::Plus => '+',
            Sign::Minus => '-',
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Sign {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "+" | "plus" => Ok(Sign::Plus),
            "-" | "minus" => Ok(Sign::Minus),
            _ => Err(CalcError::InvalidSign(s.to_string())),
        }
    }
}

/// Unit system a diameter is expressed in. Values are never converted
/// between systems; each has its own tolerance table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnitSystem {
    Inch,
    Millimeter,
}

impl UnitSystem {
    pub const fn abbreviation(self) -> &'static str {
        match self {
            UnitSystem::Inch => "in",
            UnitSystem::Millimeter => "mm",
        }
    }

    /// Decimal places used when presenting pin tolerance bounds.
    pub const fn pin_display_places(self) -> u32 {
        match self {
            UnitSystem::Inch => 6,
            UnitSystem::Millimeter => 4,
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for UnitSystem {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "in" | "inch" | "inches" => Ok(UnitSystem::Inch),
            "mm" | "millimeter" | "millimeters" | "millimetre" | "millimetres" => {
                Ok(UnitSystem::Millimeter)
            }
            _ => Err(CalcError::InvalidUnit(s.to_string())),
        }
    }
}

/// Position of a pin within a three-pin measurement, used to report which
/// pin a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PinPosition {
    First,
    Second,
    Third,
}

impl PinPosition {
    pub const ALL: [PinPosition; 3] = [PinPosition::First, PinPosition::Second, PinPosition::Third];

    pub const fn number(self) -> u8 {
        match self {
            PinPosition::First => 1,
            PinPosition::Second => 2,
            PinPosition::Third => 3,
        }
    }
}

impl fmt::Display for PinPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pin {}", self.number())
    }
}

// ============================================================================
// Pin Specification
// ============================================================================

/// Caller's description of one gauge pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinSpec {
    pub nominal: Diameter,
    pub class: ToleranceClass,
    pub sign: Sign,
}

impl PinSpec {
    pub fn new(nominal: Diameter, class: ToleranceClass, sign: Sign) -> Self {
        Self {
            nominal,
            class,
            sign,
        }
    }

    /// Build a spec from form text, e.g. `("0.2500", "ZZ", "-")`.
    ///
    /// # Errors
    /// Returns the parse error of the first field that is not recognized.
    pub fn parse(nominal: &str, class: &str, sign: &str) -> Result<Self, CalcError> {
        Ok(Self {
            nominal: crate::numeric::parse_diameter(nominal)?,
            class: class.parse()?,
            sign: sign.parse()?,
        })
    }
}

impl fmt::Display for PinSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}{}", self.nominal, self.class, self.sign)
    }
}
