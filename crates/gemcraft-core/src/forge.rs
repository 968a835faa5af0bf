//! # Forge
//!
//! The arena that owns every gem.
//!
//! Gems are stored in a `Vec` and addressed by `GemId`. A composite keeps
//! the ids of its two parents, so one intermediate gem can feed any number
//! of later composites. The combination structure is a DAG.
//!
//! Gem records are immutable once created. The only mutable state is the
//! per-gem use counter, kept in a parallel table.

use crate::primitives::BASE_GROWTH;
use crate::valuation;
use crate::{Attributes, GemColor, GemError, GemId};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

// =============================================================================
// GEM
// =============================================================================

/// The immutable valuation record of one gem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gem {
    /// Resolved color.
    pub color: GemColor,
    /// Label the gem was parsed from. Only base gems have one.
    pub label: Option<char>,
    /// Depth-like measure used to pick interpolation curves.
    pub grade_growth: u32,
    /// Number of base gems consumed to produce this gem.
    pub cost: u64,
    /// Derived attributes.
    pub attributes: Attributes,
    /// Ranking score. Fixed at `BASE_GROWTH` for base gems.
    pub growth: f64,
    /// Parents as `(parent1, parent2)`; `parent1` never costs less than `parent2`.
    pub parents: Option<(GemId, GemId)>,
}

impl Gem {
    /// Build a base gem from its label.
    pub fn base(label: char) -> Result<Self, GemError> {
        let color = GemColor::from_label(label)?;
        Ok(Self {
            color,
            label: Some(label),
            grade_growth: 0,
            cost: 1,
            attributes: Attributes::seed(color),
            growth: BASE_GROWTH,
            parents: None,
        })
    }

    /// Build the composite of two parents.
    ///
    /// Parent order is canonicalised: the costlier parent becomes `parent1`,
    /// ties keep argument order.
    #[must_use]
    pub fn fuse(first: (GemId, &Gem), second: (GemId, &Gem)) -> Self {
        let (a_id, a) = first;
        let (b_id, b) = second;

        let parents = if b.cost > a.cost {
            (b_id, a_id)
        } else {
            (a_id, b_id)
        };

        let color = valuation::resolve_color(a.color, b.color);
        let attributes =
            valuation::fuse_attributes(&a.attributes, a.grade_growth, &b.attributes, b.grade_growth);
        let cost = a.cost.saturating_add(b.cost);

        Self {
            color,
            label: None,
            grade_growth: valuation::next_grade_growth(a.grade_growth, b.grade_growth),
            cost,
            attributes,
            growth: valuation::growth(valuation::power(color, &attributes), cost),
            parents: Some(parents),
        }
    }

    /// Color-specific power derived from the current attributes.
    #[must_use]
    pub fn power(&self) -> f64 {
        valuation::power(self.color, &self.attributes)
    }

    /// Whether this gem is a leaf.
    #[must_use]
    pub fn is_base(&self) -> bool {
        self.parents.is_none()
    }

    /// Order two gems by cost.
    #[must_use]
    pub fn by_cost(&self, other: &Self) -> Ordering {
        self.cost.cmp(&other.cost)
    }
}

// =============================================================================
// FORGE
// =============================================================================

/// Arena of gems.
///
/// Uses `BTreeMap` for the label index so base gem lookup is deterministic.
#[derive(Debug, Clone, Default)]
pub struct Forge {
    /// Gem storage: GemId.0 -> Gem
    gems: Vec<Gem>,

    /// Consumption counters, parallel to `gems`.
    use_counts: Vec<u32>,

    /// Base gem lookup: label -> GemId
    base_index: BTreeMap<char, GemId>,
}

impl Forge {
    /// Create an empty forge.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the base gem for a label.
    ///
    /// Base gems exist once per label; asking again returns the existing id.
    pub fn add_base(&mut self, label: char) -> Result<GemId, GemError> {
        if let Some(&id) = self.base_index.get(&label) {
            return Ok(id);
        }

        let gem = Gem::base(label)?;
        let id = self.push(gem)?;
        self.base_index.insert(label, id);
        Ok(id)
    }

    /// Combine two existing gems into a new composite.
    ///
    /// Both parents' use counters are incremented, so `combine(a, a)` counts
    /// `a` twice.
    pub fn combine(&mut self, a: GemId, b: GemId) -> Result<GemId, GemError> {
        let gem = Gem::fuse((a, self.gem(a)?), (b, self.gem(b)?));
        let id = self.push(gem)?;

        for parent in [a, b] {
            if let Some(count) = self.use_counts.get_mut(parent.index()) {
                *count = count.saturating_add(1);
            }
        }

        Ok(id)
    }

    /// Lookup a gem by id.
    #[must_use]
    pub fn get(&self, id: GemId) -> Option<&Gem> {
        self.gems.get(id.index())
    }

    /// Lookup a gem by id, failing with `MissingOperand` if it is absent.
    pub fn gem(&self, id: GemId) -> Result<&Gem, GemError> {
        self.get(id).ok_or(GemError::MissingOperand(id))
    }

    /// Base gem previously created for a label.
    #[must_use]
    pub fn base_for(&self, label: char) -> Option<GemId> {
        self.base_index.get(&label).copied()
    }

    /// How many composites consumed this gem.
    #[must_use]
    pub fn use_count(&self, id: GemId) -> Option<u32> {
        self.use_counts.get(id.index()).copied()
    }

    /// Total number of gems.
    #[must_use]
    pub fn len(&self) -> usize {
        self.gems.len()
    }

    /// Whether the forge holds no gems.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gems.is_empty()
    }

    /// All gems in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (GemId, &Gem)> {
        self.gems
            .iter()
            .enumerate()
            .map(|(index, gem)| (GemId(index as u32), gem))
    }

    /// Leaf ids under `id` in left-to-right recipe order.
    ///
    /// Shared sub-gems are expanded every time they appear, so the result
    /// always has `cost` entries.
    pub fn leaves(&self, id: GemId) -> Result<Vec<GemId>, GemError> {
        let mut leaves = Vec::new();
        let mut stack = vec![id];

        while let Some(current) = stack.pop() {
            match self.gem(current)?.parents {
                Some((first, second)) => {
                    // Second pushed first so the first parent is visited first
                    stack.push(second);
                    stack.push(first);
                }
                None => leaves.push(current),
            }
        }

        Ok(leaves)
    }

    fn push(&mut self, gem: Gem) -> Result<GemId, GemError> {
        let index = u32::try_from(self.gems.len()).map_err(|_| GemError::RecipeTooLarge {
            limit: u32::MAX as usize,
            actual: self.gems.len(),
        })?;
        self.gems.push(gem);
        self.use_counts.push(0);
        Ok(GemId(index))
    }
}

// =============================================================================
// TESTS
// =============================================================================
