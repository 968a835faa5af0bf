//! # Validation Tier Tests (T0-T3)
//!
//! If ANY tier fails, the engine is INVALID.
//!
//! ## Tiers
//! - T0: Base Gem Integrity
//! - T1: Structural Accounting (cost, grade growth, use counts)
//! - T2: Valuation (color, attributes, power, growth)
//! - T3: Recipe Rendering

use gemcraft_core::{Forge, GemColor, GemError, GemId, Ingestor, render};

// =============================================================================
// TIER T0: BASE GEM INTEGRITY
// =============================================================================

mod t0_base_gems {
    use super::*;
    use gemcraft_core::primitives::BASE_GROWTH;

    /// T0.1: Every label yields a base gem of the matching color.
    #[test]
    fn every_label_accepted() {
        let mut forge = Forge::new();
        for (label, color) in [
            ('o', GemColor::Orange),
            ('b', GemColor::Black),
            ('m', GemColor::Mana),
            ('y', GemColor::Yellow),
            ('k', GemColor::Kill),
            ('r', GemColor::Red),
        ] {
            let id = forge.add_base(label).expect("base");
            let gem = forge.gem(id).expect("gem");
            assert_eq!(gem.color, color);
            assert_eq!(gem.label, Some(label));
            assert_eq!(gem.cost, 1);
            assert_eq!(gem.grade_growth, 0);
        }
    }

    /// T0.2: Unknown labels are rejected with InvalidLabel.
    #[test]
    fn unknown_label_rejected() {
        let mut forge = Forge::new();
        for label in ['a', 'K', '1', '+'] {
            assert_eq!(forge.add_base(label), Err(GemError::InvalidLabel(label)));
        }
    }

    /// T0.3: Base gems keep the fixed default growth.
    #[test]
    fn base_growth_is_one() {
        let mut forge = Forge::new();
        let k = forge.add_base('k').expect("base");
        assert_eq!(forge.gem(k).expect("gem").growth, BASE_GROWTH);
        assert_eq!(BASE_GROWTH, 1.0);
    }
}

// =============================================================================
// TIER T1: STRUCTURAL ACCOUNTING
// =============================================================================

mod t1_structure {
    use super::*;

    /// T1.1: Four base gems yield cost 4 in every bracketing.
    #[test]
    fn cost_independent_of_bracketing() {
        for recipe in ["((o+o)+o)+o", "(o+o)+(o+o)", "o+(o+(o+o))", "(o+(o+o))+o"] {
            let mut forge = Forge::new();
            let id = Ingestor::ingest(&mut forge, recipe).expect("ingest");
            assert_eq!(forge.gem(id).expect("gem").cost, 4, "{recipe}");
        }
    }

    /// T1.2: Grade growth increments only for equal parents.
    #[test]
    fn grade_growth_rules() {
        let mut forge = Forge::new();
        let o = forge.add_base('o').expect("base");
        let g1 = forge.combine(o, o).expect("combine");
        let g1b = forge.combine(g1, o).expect("combine");
        let g2 = forge.combine(g1, g1).expect("combine");

        assert_eq!(forge.gem(g1).expect("gem").grade_growth, 1);
        assert_eq!(forge.gem(g1b).expect("gem").grade_growth, 1);
        assert_eq!(forge.gem(g2).expect("gem").grade_growth, 2);
    }

    /// T1.3: Missing operands are rejected without side effects.
    #[test]
    fn missing_operand_rejected() {
        let mut forge = Forge::new();
        let o = forge.add_base('o').expect("base");
        assert_eq!(
            forge.combine(GemId(5), o),
            Err(GemError::MissingOperand(GemId(5)))
        );
        assert_eq!(forge.len(), 1);
        assert_eq!(forge.use_count(o), Some(0));
    }

    /// T1.4: Shared intermediates are reused, not copied.
    #[test]
    fn shared_intermediate_counted() {
        let mut forge = Forge::new();
        let k = forge.add_base('k').expect("base");
        let kk = forge.combine(k, k).expect("combine");
        let left = forge.combine(kk, k).expect("combine");
        let right = forge.combine(kk, kk).expect("combine");

        assert_eq!(forge.use_count(kk), Some(3));
        assert_eq!(forge.len(), 4);
        assert_eq!(forge.leaves(left).expect("leaves").len(), 3);
        assert_eq!(forge.leaves(right).expect("leaves"), vec![k; 4]);
    }
}

// =============================================================================
// TIER T2: VALUATION
// =============================================================================

mod t2_valuation {
    use super::*;

    const EPSILON: f64 = 1e-9;

    /// T2.1: Kill + Kill scenario.
    #[test]
    fn kill_plus_kill() {
        let mut forge = Forge::new();
        let k = forge.add_base('k').expect("base");
        let kk = forge.combine(k, k).expect("combine");
        let gem = forge.gem(kk).expect("gem");

        assert_eq!(gem.color, GemColor::Kill);
        assert_eq!(gem.grade_growth, 1);
        assert_eq!(gem.cost, 2);
        assert!((gem.attributes.damage - 1.58).abs() < EPSILON);
        assert!((gem.attributes.crit_mult - 1.38).abs() < EPSILON);
        assert!((gem.attributes.bloodbinding - 1.09).abs() < EPSILON);
        assert!((gem.power() - 1.58 * 1.38 * 1.09 * 1.09).abs() < EPSILON);
        assert!((gem.growth - gem.power().ln() / 2f64.ln()).abs() < EPSILON);
    }

    /// T2.2: Mixed colors resolve through the priority chain.
    #[test]
    fn mixed_colors() {
        let mut forge = Forge::new();
        let o = forge.add_base('o').expect("base");
        let b = forge.add_base('b').expect("base");
        let y = forge.add_base('y').expect("base");
        let r = forge.add_base('r').expect("base");

        let ob = forge.combine(o, b).expect("combine");
        let by = forge.combine(b, y).expect("combine");
        let br = forge.combine(b, r).expect("combine");
        let mana_red = forge.combine(ob, br).expect("combine");

        assert_eq!(forge.gem(ob).expect("gem").color, GemColor::Mana);
        assert_eq!(forge.gem(by).expect("gem").color, GemColor::Kill);
        assert_eq!(forge.gem(br).expect("gem").color, GemColor::Red);
        assert_eq!(forge.gem(mana_red).expect("gem").color, GemColor::Mana);
    }

    /// T2.3: Orange leech follows the equal-grade curve.
    #[test]
    fn orange_pair_power() {
        let mut forge = Forge::new();
        let o = forge.add_base('o').expect("base");
        let oo = forge.combine(o, o).expect("combine");
        let gem = forge.gem(oo).expect("gem");

        assert!((gem.power() - 1.38).abs() < EPSILON);
        assert!((gem.growth - 1.38f64.log2()).abs() < EPSILON);
    }

    /// T2.4: Distant grades use the distant curve; damage never drops.
    #[test]
    fn distant_grades() {
        let mut forge = Forge::new();
        let y = forge.add_base('y').expect("base");
        let y2 = forge.combine(y, y).expect("combine");
        let y4 = forge.combine(y2, y2).expect("combine");
        let y5 = forge.combine(y4, y).expect("combine");

        let big = forge.gem(y4).expect("gem").clone();
        let gem = forge.gem(y5).expect("gem");
        assert_eq!(gem.grade_growth, 2);
        let expected_crit = 0.88 * big.attributes.crit_mult + 0.44 * 1.0;
        assert!((gem.attributes.crit_mult - expected_crit).abs() < EPSILON);
        assert!(gem.attributes.damage >= big.attributes.damage);
    }
}

// =============================================================================
// TIER T3: RECIPE RENDERING
// =============================================================================

mod t3_recipes {
    use super::*;

    /// T3.1: A base gem renders as its label.
    #[test]
    fn base_renders_label() {
        let mut forge = Forge::new();
        let m = forge.add_base('m').expect("base");
        assert_eq!(render(&forge, m).expect("render"), "m");
    }

    /// T3.2: `(o+o)` then `+o` renders `(o+o)+o`.
    #[test]
    fn three_orange() {
        let mut forge = Forge::new();
        let o = forge.add_base('o').expect("base");
        let oo = forge.combine(o, o).expect("combine");
        let ooo = forge.combine(oo, o).expect("combine");
        assert_eq!(render(&forge, ooo).expect("render"), "(o+o)+o");
    }

    /// T3.3: Rendering is reentrant; interleaved renders do not interfere.
    #[test]
    fn renders_are_independent() {
        let mut forge = Forge::new();
        let k = forge.add_base('k').expect("base");
        let y = forge.add_base('y').expect("base");
        let ky = forge.combine(k, y).expect("combine");

        let first = render(&forge, ky).expect("render");
        let mut shared = String::new();
        gemcraft_core::render_into(&forge, k, &mut shared).expect("render");
        let second = render(&forge, ky).expect("render");

        assert_eq!(first, second);
        assert_eq!(shared, "k");
    }

    /// T3.4: Ingested recipes render back to their canonical form.
    #[test]
    fn ingest_render_roundtrip() {
        for (input, canonical) in [
            ("(o+o)+o", "(o+o)+o"),
            ("o+(o+o)", "(o+o)+o"),
            ("(k+y)+((k+k)+y)", "((k+k)+y)+(k+y)"),
            ("(b+r)+(b+r)", "(b+r)+(b+r)"),
        ] {
            let mut forge = Forge::new();
            let id = Ingestor::ingest(&mut forge, input).expect("ingest");
            assert_eq!(render(&forge, id).expect("render"), canonical, "{input}");
        }
    }
}
