//! # Core Type Definitions
//!
//! This module contains the shared vocabulary of the gem engine:
//! - Arena identifiers (`GemId`)
//! - The closed color set (`GemColor`) with its labels and names
//! - The four derived attributes (`Attributes`)
//! - Error types (`GemError`)

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// =============================================================================
// ARENA IDENTIFIERS
// =============================================================================

/// Stable index of a gem inside a `Forge`.
///
/// Composites refer to their parents by `GemId`, never by owned reference,
/// so one gem may be shared by any number of composites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GemId(pub u32);

impl GemId {
    /// Position of this gem in the arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for GemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// GEM COLOR
// =============================================================================

/// The six gem colors.
///
/// Every base gem is parsed from a single-character label; composites take
/// their color from the resolution rules in `valuation::resolve_color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GemColor {
    Orange,
    Black,
    Mana,
    Yellow,
    Kill,
    Red,
}

impl GemColor {
    /// All colors in declaration order.
    pub const ALL: [GemColor; 6] = [
        GemColor::Orange,
        GemColor::Black,
        GemColor::Mana,
        GemColor::Yellow,
        GemColor::Kill,
        GemColor::Red,
    ];

    /// Parse a base gem label.
    ///
    /// Returns `GemError::InvalidLabel` for anything outside `o b m y k r`.
    pub fn from_label(label: char) -> Result<Self, GemError> {
        match label {
            'o' => Ok(Self::Orange),
            'b' => Ok(Self::Black),
            'm' => Ok(Self::Mana),
            'y' => Ok(Self::Yellow),
            'k' => Ok(Self::Kill),
            'r' => Ok(Self::Red),
            other => Err(GemError::InvalidLabel(other)),
        }
    }

    /// The single-character label a base gem of this color is parsed from.
    #[must_use]
    pub const fn label(self) -> char {
        match self {
            Self::Orange => 'o',
            Self::Black => 'b',
            Self::Mana => 'm',
            Self::Yellow => 'y',
            Self::Kill => 'k',
            Self::Red => 'r',
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Orange => "Orange",
            Self::Black => "Black",
            Self::Mana => "Mana gem",
            Self::Yellow => "Yellow",
            Self::Kill => "Kill gem",
            Self::Red => "Red",
        }
    }

    /// Name of the effect this color is valued for.
    #[must_use]
    pub const fn effect_name(self) -> &'static str {
        match self {
            Self::Orange => "Leech",
            Self::Black => "Bloodbound",
            Self::Mana => "Mana",
            Self::Yellow => "Critical Hit",
            Self::Kill => "Kill",
            Self::Red => "Chain Hit",
        }
    }
}

impl fmt::Display for GemColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// ATTRIBUTES
// =============================================================================

/// The four numeric attributes every gem carries.
///
/// All values are non-negative. Unused attributes stay at zero for base gems
/// and are still interpolated for composites.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Attributes {
    /// Maximum damage.
    pub damage: f64,
    /// Mana leech.
    pub leech: f64,
    /// Bloodbinding.
    pub bloodbinding: f64,
    /// Critical hit multiplier.
    pub crit_mult: f64,
}

impl Attributes {
    /// Seed values for a base gem of the given color.
    #[must_use]
    pub const fn seed(color: GemColor) -> Self {
        match color {
            GemColor::Black => Self {
                damage: 1.186_168,
                leech: 0.0,
                bloodbinding: 1.0,
                crit_mult: 0.0,
            },
            GemColor::Kill => Self {
                damage: 1.0,
                leech: 0.0,
                bloodbinding: 1.0,
                crit_mult: 1.0,
            },
            GemColor::Mana => Self {
                damage: 0.0,
                leech: 1.0,
                bloodbinding: 1.0,
                crit_mult: 0.0,
            },
            GemColor::Orange => Self {
                damage: 0.0,
                leech: 1.0,
                bloodbinding: 0.0,
                crit_mult: 0.0,
            },
            GemColor::Yellow => Self {
                damage: 1.0,
                leech: 0.0,
                bloodbinding: 0.0,
                crit_mult: 1.0,
            },
            GemColor::Red => Self {
                damage: 0.909_091,
                leech: 0.0,
                bloodbinding: 0.0,
                crit_mult: 0.0,
            },
        }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the gem engine.
///
/// - No silent failures
/// - Use `Result<T, GemError>` for fallible operations
/// - The engine never panics on caller input
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GemError {
    /// A base gem was requested for a character that is not a gem label.
    #[error("Invalid gem label: {0:?}")]
    InvalidLabel(char),

    /// A combination referenced a gem that does not exist in the forge.
    #[error("Missing operand: {0}")]
    MissingOperand(GemId),

    /// Recipe text could not be parsed.
    #[error("Malformed recipe: {0}")]
    MalformedRecipe(String),

    /// An equation referenced a name that was never defined.
    #[error("Unknown operand: {0}")]
    UnknownOperand(String),

    /// Recipe input exceeded an ingestion limit.
    #[error("Recipe too large: {actual} exceeds limit {limit}")]
    RecipeTooLarge { limit: usize, actual: usize },

    /// A serialization or deserialization error occurred.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_roundtrip_for_every_color() {
        for color in GemColor::ALL {
            assert_eq!(GemColor::from_label(color.label()), Ok(color));
        }
    }

    #[test]
    fn unknown_label_rejected() {
        assert_eq!(GemColor::from_label('x'), Err(GemError::InvalidLabel('x')));
        assert_eq!(GemColor::from_label('O'), Err(GemError::InvalidLabel('O')));
    }

    #[test]
    fn seed_table_matches_base_values() {
        let black = Attributes::seed(GemColor::Black);
        assert_eq!(black.damage, 1.186_168);
        assert_eq!(black.bloodbinding, 1.0);
        assert_eq!(black.leech, 0.0);

        let orange = Attributes::seed(GemColor::Orange);
        assert_eq!(orange, Attributes { leech: 1.0, ..Attributes::default() });

        let red = Attributes::seed(GemColor::Red);
        assert_eq!(red.damage, 0.909_091);
        assert_eq!(red.crit_mult, 0.0);
    }

    #[test]
    fn names_and_effects() {
        assert_eq!(GemColor::Kill.to_string(), "Kill gem");
        assert_eq!(GemColor::Orange.effect_name(), "Leech");
        assert_eq!(GemColor::Red.effect_name(), "Chain Hit");
    }

    #[test]
    fn gem_id_display() {
        assert_eq!(GemId(7).to_string(), "#7");
        assert_eq!(GemId(7).index(), 7);
    }
}
