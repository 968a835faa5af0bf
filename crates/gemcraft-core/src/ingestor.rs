//! # Ingestor Module
//!
//! Recipe text validation and ingestion into a `Forge`.
//!
//! Two recipe forms are accepted:
//! - a list of `name=expression` equations, where an expression is a base
//!   label or `x+y` over earlier names and labels;
//! - a single parenthesized expression of labels joined by `+`, which is
//!   flattened into equations first. It may be wrapped across lines.
//!
//! Blank lines and lines starting with `#` or `//` are ignored.
//! Gems are created in dependency order, so both parents always exist
//! before a combination.

use crate::forge::Forge;
use crate::primitives::{MAX_EQUATIONS, MAX_NESTING_DEPTH, MAX_RECIPE_LENGTH};
use crate::{GemColor, GemError, GemId};
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// EQUATIONS
// =============================================================================

/// Right-hand side of an equation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// A single operand: a base label or an earlier name.
    Operand(String),
    /// Combination of two operands.
    Combine(String, String),
}

/// One `name=expression` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    pub name: String,
    pub expression: Expression,
}

impl Equation {
    /// Parse a single equation line.
    pub fn parse(line: &str) -> Result<Self, GemError> {
        let (name, rhs) = line
            .split_once('=')
            .ok_or_else(|| GemError::MalformedRecipe(format!("missing '=' in {:?}", line)))?;

        let name = name.trim();
        if name.is_empty() {
            return Err(GemError::MalformedRecipe(format!("missing name in {:?}", line)));
        }

        let operands: Vec<&str> = rhs.split('+').map(str::trim).collect();
        if operands.iter().any(|op| op.is_empty()) {
            return Err(GemError::MalformedRecipe(format!("empty operand in {:?}", line)));
        }

        let expression = match operands.as_slice() {
            [single] => Expression::Operand((*single).to_string()),
            [left, right] => Expression::Combine((*left).to_string(), (*right).to_string()),
            _ => {
                return Err(GemError::MalformedRecipe(format!(
                    "expected one or two operands in {:?}",
                    line
                )));
            }
        };

        Ok(Self {
            name: name.to_string(),
            expression,
        })
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.expression {
            Expression::Operand(op) => write!(f, "{}={}", self.name, op),
            Expression::Combine(left, right) => write!(f, "{}={}+{}", self.name, left, right),
        }
    }
}

// =============================================================================
// PARENTHESIZED FORM
// =============================================================================

#[derive(Clone, Copy)]
enum Operand {
    Base(char),
    Composite(usize),
}

/// Recursive descent over `+` and parentheses.
///
/// Pairs are recorded as soon as they are reduced, in evaluation order, so
/// no tree is built. Recursion only happens per parenthesis level.
struct ExpressionParser<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    depth: usize,
    bases: BTreeMap<char, usize>,
    pairs: Vec<(Operand, Operand)>,
}

impl ExpressionParser<'_> {
    fn peek(&mut self) -> Option<char> {
        while self.chars.next_if(|c| c.is_whitespace()).is_some() {}
        self.chars.peek().copied()
    }

    fn expression(&mut self) -> Result<Operand, GemError> {
        let mut left = self.term()?;
        while self.peek() == Some('+') {
            self.chars.next();
            let right = self.term()?;
            left = self.reduce(left, right)?;
        }
        Ok(left)
    }

    fn reduce(&mut self, left: Operand, right: Operand) -> Result<Operand, GemError> {
        let count = self.bases.len() + self.pairs.len() + 1;
        if count > MAX_EQUATIONS {
            return Err(GemError::RecipeTooLarge {
                limit: MAX_EQUATIONS,
                actual: count,
            });
        }
        self.pairs.push((left, right));
        Ok(Operand::Composite(self.pairs.len() - 1))
    }

    fn term(&mut self) -> Result<Operand, GemError> {
        match self.peek() {
            Some('(') => {
                self.chars.next();
                self.depth += 1;
                if self.depth > MAX_NESTING_DEPTH {
                    return Err(GemError::RecipeTooLarge {
                        limit: MAX_NESTING_DEPTH,
                        actual: self.depth,
                    });
                }
                let inner = self.expression()?;
                if self.peek() != Some(')') {
                    return Err(GemError::MalformedRecipe("unbalanced parentheses".to_string()));
                }
                self.chars.next();
                self.depth -= 1;
                Ok(inner)
            }
            Some(label) if label.is_alphabetic() => {
                self.chars.next();
                GemColor::from_label(label)?;
                let next = self.bases.len();
                self.bases.entry(label).or_insert(next);
                Ok(Operand::Base(label))
            }
            Some(other) => Err(GemError::MalformedRecipe(format!(
                "unexpected character {:?}",
                other
            ))),
            None => Err(GemError::MalformedRecipe(
                "unexpected end of expression".to_string(),
            )),
        }
    }
}

/// Flatten a parenthesized expression into ordered equations.
///
/// Base labels come first in order of appearance (`0=o`), then one equation
/// per `+` in evaluation order. `+` is left-associative.
pub fn equations_from_parentheses(expression: &str) -> Result<Vec<Equation>, GemError> {
    let mut parser = ExpressionParser {
        chars: expression.chars().peekable(),
        depth: 0,
        bases: BTreeMap::new(),
        pairs: Vec::new(),
    };
    parser.expression()?;
    if let Some(trailing) = parser.peek() {
        return Err(GemError::MalformedRecipe(format!(
            "unexpected character {:?}",
            trailing
        )));
    }

    let ExpressionParser { bases, pairs, .. } = parser;
    let mut labels: Vec<(usize, char)> = bases.iter().map(|(&label, &index)| (index, label)).collect();
    labels.sort_unstable();

    // Composite names start after the base equations.
    let offset = labels.len();
    let name_of = |operand: Operand| match operand {
        Operand::Base(label) => bases.get(&label).copied().unwrap_or_default().to_string(),
        Operand::Composite(index) => (offset + index).to_string(),
    };

    let mut equations: Vec<Equation> = labels
        .into_iter()
        .map(|(index, label)| Equation {
            name: index.to_string(),
            expression: Expression::Operand(label.to_string()),
        })
        .collect();
    for (index, (left, right)) in pairs.into_iter().enumerate() {
        equations.push(Equation {
            name: (offset + index).to_string(),
            expression: Expression::Combine(name_of(left), name_of(right)),
        });
    }

    Ok(equations)
}

// =============================================================================
// INGESTOR
// =============================================================================

/// The Ingestor turns recipe text into gems.
pub struct Ingestor;

impl Ingestor {
    /// Meaningful lines of a recipe: trimmed, without blanks and comments.
    pub fn recipe_lines(text: &str) -> impl Iterator<Item = &str> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with("//"))
    }

    /// Parse recipe text in either form into ordered equations.
    pub fn parse(text: &str) -> Result<Vec<Equation>, GemError> {
        if text.len() > MAX_RECIPE_LENGTH {
            return Err(GemError::RecipeTooLarge {
                limit: MAX_RECIPE_LENGTH,
                actual: text.len(),
            });
        }

        let lines: Vec<&str> = Self::recipe_lines(text).collect();
        let equations = if lines.iter().any(|line| line.contains('=')) {
            lines
                .iter()
                .map(|line| Equation::parse(line))
                .collect::<Result<Vec<_>, _>>()?
        } else {
            // An expression may be wrapped across lines
            let expression = lines.concat();
            if expression.is_empty() {
                return Err(GemError::MalformedRecipe("empty recipe".to_string()));
            }
            equations_from_parentheses(&expression)?
        };

        if equations.len() > MAX_EQUATIONS {
            return Err(GemError::RecipeTooLarge {
                limit: MAX_EQUATIONS,
                actual: equations.len(),
            });
        }

        Ok(equations)
    }

    /// Build the gems an equation list describes.
    ///
    /// Returns the id of the last equation's gem.
    pub fn ingest_equations(forge: &mut Forge, equations: &[Equation]) -> Result<GemId, GemError> {
        let mut names: BTreeMap<&str, GemId> = BTreeMap::new();
        let mut last = None;

        for equation in equations {
            let id = match &equation.expression {
                Expression::Operand(op) => Self::resolve(forge, &names, op)?,
                Expression::Combine(left, right) => {
                    let left = Self::resolve(forge, &names, left)?;
                    let right = Self::resolve(forge, &names, right)?;
                    forge.combine(left, right)?
                }
            };
            names.insert(equation.name.as_str(), id);
            last = Some(id);
        }

        last.ok_or_else(|| GemError::MalformedRecipe("empty recipe".to_string()))
    }

    /// Parse and build a recipe, returning the final gem.
    pub fn ingest(forge: &mut Forge, text: &str) -> Result<GemId, GemError> {
        let equations = Self::parse(text)?;
        Self::ingest_equations(forge, &equations)
    }

    /// Names shadow labels; an unknown single character is taken as a label.
    fn resolve(
        forge: &mut Forge,
        names: &BTreeMap<&str, GemId>,
        operand: &str,
    ) -> Result<GemId, GemError> {
        if let Some(&id) = names.get(operand) {
            return Ok(id);
        }

        let mut chars = operand.chars();
        match (chars.next(), chars.next()) {
            (Some(label), None) if label.is_alphabetic() => forge.add_base(label),
            _ => Err(GemError::UnknownOperand(operand.to_string())),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
