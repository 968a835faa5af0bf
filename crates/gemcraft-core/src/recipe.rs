//! # Recipe Serializer
//!
//! Renders a gem's combination history as canonical text.
//!
//! - A base gem renders as its label.
//! - A composite renders as `parent1+parent2`, each parent wrapped in
//!   parentheses unless it is a base gem.
//!
//! No common-subexpression factoring: a shared sub-gem is written out in full
//! every time it appears, so every recipe describes one self-contained
//! combination path.
//!
//! Each call owns its buffer (or borrows the caller's), so rendering is
//! reentrant.

use crate::forge::Forge;
use crate::{GemError, GemId};

/// Render the recipe of `id` into a fresh string.
pub fn render(forge: &Forge, id: GemId) -> Result<String, GemError> {
    let mut buffer = String::new();
    render_into(forge, id, &mut buffer)?;
    Ok(buffer)
}

enum Step {
    /// Render a gem unwrapped.
    Full(GemId),
    /// Render a parent, wrapped unless it is a base gem.
    Operand(GemId),
    Text(char),
}

/// Append the recipe of `id` to a caller-owned buffer.
///
/// Walks with an explicit stack, so deep chains do not recurse.
/// On error the buffer may hold a partial rendering.
pub fn render_into(forge: &Forge, id: GemId, buffer: &mut String) -> Result<(), GemError> {
    let mut pending = vec![Step::Full(id)];

    while let Some(step) = pending.pop() {
        match step {
            Step::Text(c) => buffer.push(c),
            Step::Operand(parent) => {
                if forge.gem(parent)?.is_base() {
                    pending.push(Step::Full(parent));
                } else {
                    pending.push(Step::Text(')'));
                    pending.push(Step::Full(parent));
                    pending.push(Step::Text('('));
                }
            }
            Step::Full(current) => {
                let gem = forge.gem(current)?;
                match (gem.parents, gem.label) {
                    (Some((first, second)), _) => {
                        pending.push(Step::Operand(second));
                        pending.push(Step::Text('+'));
                        pending.push(Step::Operand(first));
                    }
                    (None, Some(label)) => buffer.push(label),
                    (None, None) => {
                        return Err(GemError::MalformedRecipe(format!(
                            "gem {} has neither parents nor label",
                            current
                        )));
                    }
                }
            }
        }
    }

    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_gem_renders_as_label() {
        let mut forge = Forge::new();
        for label in ['o', 'b', 'm', 'y', 'k', 'r'] {
            let id = forge.add_base(label).expect("base");
            assert_eq!(render(&forge, id).expect("render"), label.to_string());
        }
    }

    #[test]
    fn nested_composite_is_parenthesized() {
        let mut forge = Forge::new();
        let o = forge.add_base('o').expect("base");
        let oo = forge.combine(o, o).expect("combine");
        let ooo = forge.combine(oo, o).expect("combine");

        assert_eq!(render(&forge, oo).expect("render"), "o+o");
        assert_eq!(render(&forge, ooo).expect("render"), "(o+o)+o");
    }

    #[test]
    fn cheaper_argument_renders_second() {
        let mut forge = Forge::new();
        let o = forge.add_base('o').expect("base");
        let oo = forge.combine(o, o).expect("combine");
        let ooo = forge.combine(o, oo).expect("combine");
        assert_eq!(render(&forge, ooo).expect("render"), "(o+o)+o");
    }

    #[test]
    fn shared_sub_gem_expanded_each_time() {
        let mut forge = Forge::new();
        let k = forge.add_base('k').expect("base");
        let y = forge.add_base('y').expect("base");
        let ky = forge.combine(k, y).expect("combine");
        let pair = forge.combine(ky, ky).expect("combine");
        let quad = forge.combine(pair, pair).expect("combine");

        assert_eq!(
            render(&forge, quad).expect("render"),
            "((k+y)+(k+y))+((k+y)+(k+y))"
        );
    }

    #[test]
    fn render_into_appends() {
        let mut forge = Forge::new();
        let m = forge.add_base('m').expect("base");
        let mm = forge.combine(m, m).expect("combine");

        let mut buffer = String::from("recipe: ");
        render_into(&forge, mm, &mut buffer).expect("render");
        assert_eq!(buffer, "recipe: m+m");
    }

    #[test]
    fn missing_gem_fails() {
        let forge = Forge::new();
        assert_eq!(
            render(&forge, GemId(3)),
            Err(GemError::MissingOperand(GemId(3)))
        );
    }
}
