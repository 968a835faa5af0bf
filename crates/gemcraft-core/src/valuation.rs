//! # Valuation Model
//!
//! Pure functions that derive a composite gem from its two parents:
//! color resolution, grade growth, attribute interpolation, power and growth.
//!
//! Nothing here touches the arena. `Forge::combine` feeds parent records in
//! and stores what comes out.

use crate::primitives::{
    CURVE_AHEAD_BY_ONE, CURVE_BEHIND_BY_ONE, CURVE_DISTANT, CURVE_EQUAL, Coefficients,
    InterpolationCurve,
};
use crate::{Attributes, GemColor};

/// Resolve the color of a composite.
///
/// 1. Same color stays.
/// 2. Any Kill or Yellow makes Kill.
/// 3. Any Mana or Orange makes Mana.
/// 4. Anything left (Black/Red mixes) is Red.
#[must_use]
pub fn resolve_color(a: GemColor, b: GemColor) -> GemColor {
    use GemColor::{Kill, Mana, Orange, Red, Yellow};

    if a == b {
        return a;
    }

    let either = |x: GemColor, y: GemColor| a == x || b == x || a == y || b == y;
    if either(Kill, Yellow) {
        Kill
    } else if either(Mana, Orange) {
        Mana
    } else {
        // Black is dropped here; a later Kill/Mana combine picks the red up.
        Red
    }
}

/// Grade growth of a composite: the larger parent value, plus one only on a tie.
#[must_use]
pub fn next_grade_growth(a: u32, b: u32) -> u32 {
    if a == b { a.saturating_add(1) } else { a.max(b) }
}

/// Select the interpolation curve from the parents' grade growth.
#[must_use]
pub fn curve_for(a: u32, b: u32) -> InterpolationCurve {
    match i64::from(a) - i64::from(b) {
        0 => CURVE_EQUAL,
        1 => CURVE_AHEAD_BY_ONE,
        -1 => CURVE_BEHIND_BY_ONE,
        _ => CURVE_DISTANT,
    }
}

/// Weighted sum of two parent values: `high * max + low * min`.
///
/// Symmetric in its two value arguments.
#[must_use]
pub fn interpolate(a: f64, b: f64, coefficients: Coefficients) -> f64 {
    let (high, low) = if a > b { (a, b) } else { (b, a) };
    coefficients.high * high + coefficients.low * low
}

/// Interpolate all four attributes and clamp damage so it never drops below
/// either parent's damage.
#[must_use]
pub fn fuse_attributes(a: &Attributes, a_grade: u32, b: &Attributes, b_grade: u32) -> Attributes {
    let curve = curve_for(a_grade, b_grade);

    let damage = interpolate(a.damage, b.damage, curve.damage);
    Attributes {
        damage: damage.max(a.damage).max(b.damage),
        leech: interpolate(a.leech, b.leech, curve.leech),
        bloodbinding: interpolate(a.bloodbinding, b.bloodbinding, curve.bloodbinding),
        crit_mult: interpolate(a.crit_mult, b.crit_mult, curve.crit_mult),
    }
}

/// Color-specific power of a set of attributes.
///
/// Red carries no power of its own.
#[must_use]
pub fn power(color: GemColor, attributes: &Attributes) -> f64 {
    let Attributes {
        damage,
        leech,
        bloodbinding,
        crit_mult,
    } = *attributes;

    match color {
        GemColor::Orange => leech,
        GemColor::Black => bloodbinding,
        GemColor::Mana => leech * bloodbinding,
        GemColor::Yellow => damage * crit_mult,
        // Bloodbinding starts at 1 for base kill gems, so it enters squared.
        GemColor::Kill => damage * crit_mult * bloodbinding * bloodbinding,
        GemColor::Red => 0.0,
    }
}

/// Growth score: logarithm of `power` in base `cost`.
///
/// Only meaningful for composites (`cost > 1`). Zero power yields negative
/// infinity.
#[must_use]
pub fn growth(power: f64, cost: u64) -> f64 {
    power.ln() / (cost as f64).ln()
}

// =============================================================================
// TESTS
// =============================================================================
