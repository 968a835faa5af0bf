//! # Fusion Primitives
//!
//! Hardcoded constants for the gem engine.
//!
//! The engine starts with zero gems but fixed tables. These values are
//! compiled into the binary and are immutable at runtime.
//!
//! ## Primitives
//!
//! 1. **Interpolation curves**: weight pairs used when fusing attributes,
//!    selected by the grade-growth delta between the two parents.
//! 2. **Base growth**: the growth value base gems report.
//! 3. **Ingestion limits**: bounds on recipe input.

/// Weight pair applied to a pair of parent values.
///
/// The larger value is weighted by `high`, the smaller by `low`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub high: f64,
    pub low: f64,
}

impl Coefficients {
    const fn new(high: f64, low: f64) -> Self {
        Self { high, low }
    }
}

/// One coefficient pair per attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpolationCurve {
    pub damage: Coefficients,
    pub leech: Coefficients,
    pub bloodbinding: Coefficients,
    pub crit_mult: Coefficients,
}

/// Parents of equal grade growth.
pub const CURVE_EQUAL: InterpolationCurve = InterpolationCurve {
    damage: Coefficients::new(0.87, 0.71),
    leech: Coefficients::new(0.88, 0.50),
    bloodbinding: Coefficients::new(0.78, 0.31),
    crit_mult: Coefficients::new(0.88, 0.50),
};

/// First parent one grade above the second.
pub const CURVE_AHEAD_BY_ONE: InterpolationCurve = InterpolationCurve {
    damage: Coefficients::new(0.86, 0.70),
    leech: Coefficients::new(0.89, 0.44),
    bloodbinding: Coefficients::new(0.79, 0.29),
    crit_mult: Coefficients::new(0.88, 0.44),
};

/// First parent one grade below the second.
///
/// Currently identical to `CURVE_AHEAD_BY_ONE`; tuned independently.
pub const CURVE_BEHIND_BY_ONE: InterpolationCurve = InterpolationCurve {
    damage: Coefficients::new(0.86, 0.70),
    leech: Coefficients::new(0.89, 0.44),
    bloodbinding: Coefficients::new(0.79, 0.29),
    crit_mult: Coefficients::new(0.88, 0.44),
};

/// Parents two or more grades apart.
pub const CURVE_DISTANT: InterpolationCurve = InterpolationCurve {
    damage: Coefficients::new(0.85, 0.69),
    leech: Coefficients::new(0.90, 0.38),
    bloodbinding: Coefficients::new(0.80, 0.27),
    crit_mult: Coefficients::new(0.88, 0.44),
};

/// Growth reported by base gems.
///
/// `ln(power) / ln(1)` is undefined, so base gems carry this fixed value.
/// Ranking and display depend on it staying exactly 1.
pub const BASE_GROWTH: f64 = 1.0;

// =============================================================================
// INPUT VALIDATION LIMITS
// =============================================================================

/// Maximum recipe text length in bytes accepted by the Ingestor.
pub const MAX_RECIPE_LENGTH: usize = 1 << 20;

/// Maximum number of equations in a single recipe.
pub const MAX_EQUATIONS: usize = 100_000;

/// Maximum parenthesis nesting in the expression form.
///
/// The expression parser recurses once per level.
pub const MAX_NESTING_DEPTH: usize = 1000;
