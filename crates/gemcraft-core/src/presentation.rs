//! # Presentation Helpers
//!
//! Stateless projections of a gem's valuation into text.
//! Nothing here computes anything the Valuation Model does not already hold.

use crate::forge::Gem;
use crate::{GemColor, GemError, GemId, forge::Forge, recipe};
use serde::{Deserialize, Serialize};

/// Whether `cost` is an exact power of two.
#[must_use]
pub const fn is_power_of_two(cost: u64) -> bool {
    cost.is_power_of_two()
}

fn marker(cost: u64) -> &'static str {
    if is_power_of_two(cost) { "-" } else { "" }
}

/// Format a number with at least one and at most five decimals (`0.0####`).
#[must_use]
pub fn decimal(value: f64) -> String {
    let fixed = format!("{:.5}", value);
    if !fixed.contains('.') {
        return fixed;
    }
    let trimmed = fixed.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{}0", trimmed)
    } else {
        trimmed.to_string()
    }
}

/// Short title: `000004 (1.37221)-`.
#[must_use]
pub fn combine_title(gem: &Gem) -> String {
    format!("{:06} ({:.5}){}", gem.cost, gem.growth, marker(gem.cost))
}

/// Title used when listing recipes: `0000004 (1.372212)-`.
#[must_use]
pub fn recipe_title(gem: &Gem) -> String {
    format!("{:07} ({:.6}){}", gem.cost, gem.growth, marker(gem.cost))
}

/// Multi-line readout of a gem.
///
/// `show_all` appends power and the four attributes.
#[must_use]
pub fn display_info(gem: &Gem, show_all: bool) -> String {
    let mut lines = vec![
        format!("Grade: +{}", gem.grade_growth),
        format!("Cost: {}x", gem.cost),
        format!("Growth: {}", decimal(gem.growth)),
    ];

    if show_all {
        let a = &gem.attributes;
        lines.push(format!("Power: {}", decimal(gem.power())));
        lines.push(format!("Damage: {}", decimal(a.damage)));
        lines.push(format!("Leech: {}", decimal(a.leech)));
        lines.push(format!("Crit: {}", decimal(a.crit_mult)));
        lines.push(format!("Bbound: {}", decimal(a.bloodbinding)));
    }

    lines.join("\n")
}

/// Group heading for a gem: its color name, or the effect it is valued for.
#[must_use]
pub fn group_name(color: GemColor, use_colors: bool) -> &'static str {
    if use_colors {
        color.name()
    } else {
        color.effect_name()
    }
}

/// Serializable projection of one gem, for machine-readable output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GemSummary {
    pub id: GemId,
    pub color: GemColor,
    pub title: String,
    pub grade_growth: u32,
    pub cost: u64,
    /// `None` when growth is not finite (Red composites).
    pub growth: Option<f64>,
    pub power: f64,
    pub damage: f64,
    pub leech: f64,
    pub crit_mult: f64,
    pub bloodbinding: f64,
    pub recipe: String,
}

impl GemSummary {
    /// Project a forge gem into a summary.
    pub fn from_forge(forge: &Forge, id: GemId) -> Result<Self, GemError> {
        let gem = forge.gem(id)?;
        Ok(Self {
            id,
            color: gem.color,
            title: combine_title(gem),
            grade_growth: gem.grade_growth,
            cost: gem.cost,
            growth: gem.growth.is_finite().then_some(gem.growth),
            power: gem.power(),
            damage: gem.attributes.damage,
            leech: gem.attributes.leech,
            crit_mult: gem.attributes.crit_mult,
            bloodbinding: gem.attributes.bloodbinding,
            recipe: recipe::render(forge, id)?,
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
