//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.
//! Each command renders its output to a `String` first so the text is
//! testable; the `cmd_*` wrappers only print.

use gemcraft_core::presentation::{self, GemSummary, display_info, group_name, recipe_title};
use gemcraft_core::primitives::MAX_RECIPE_LENGTH;
use gemcraft_core::{
    Attributes, Forge, GemColor, GemError, Ingestor, equations_from_parentheses, render,
};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

// =============================================================================
// FILE HELPERS
// =============================================================================

/// Validate file path and size, then read it.
///
/// Canonicalizing resolves "..", symlinks, and validates existence.
fn read_recipe_file(path: &Path) -> Result<String, GemError> {
    let canonical: PathBuf = path.canonicalize().map_err(|e| {
        GemError::IoError(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(GemError::IoError(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    let metadata = std::fs::metadata(&canonical)
        .map_err(|e| GemError::IoError(format!("Cannot read file metadata: {}", e)))?;
    if metadata.len() > MAX_RECIPE_LENGTH as u64 {
        return Err(GemError::RecipeTooLarge {
            limit: MAX_RECIPE_LENGTH,
            actual: metadata.len() as usize,
        });
    }

    std::fs::read_to_string(&canonical)
        .map_err(|e| GemError::IoError(format!("Read file: {}", e)))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, GemError> {
    serde_json::to_string_pretty(value).map_err(|e| GemError::SerializationError(e.to_string()))
}

// =============================================================================
// EVAL COMMAND
// =============================================================================

/// Options for `eval`, merged from flags and configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvalOptions {
    pub show_all: bool,
    pub use_colors: bool,
    pub json_mode: bool,
}

/// Inline recipes use `;` between equations in place of line breaks.
pub fn inline_recipe(recipe: &str) -> String {
    recipe.replace(';', "\n")
}

/// Build a recipe and render the report.
pub fn eval_report(text: &str, options: &EvalOptions) -> Result<String, GemError> {
    let mut forge = Forge::new();
    let root = Ingestor::ingest(&mut forge, text)?;
    let gem = forge.gem(root)?;

    tracing::debug!(
        "Built {} gems, root {} with cost {}",
        forge.len(),
        root,
        gem.cost
    );

    let group = group_name(gem.color, options.use_colors);
    let title = format!("{} {}", group, recipe_title(gem));

    // Leaf labels with multiplicity, for the scheduler-facing summary
    let mut base_counts: BTreeMap<char, u64> = BTreeMap::new();
    for leaf in forge.leaves(root)? {
        if let Some(label) = forge.gem(leaf)?.label {
            *base_counts.entry(label).or_default() += 1;
        }
    }

    if options.json_mode {
        let summary = GemSummary::from_forge(&forge, root)?;
        let base_gems: BTreeMap<String, u64> = base_counts
            .iter()
            .map(|(label, count)| (label.to_string(), *count))
            .collect();
        let output = serde_json::json!({
            "title": title,
            "group": group,
            "gem": summary,
            "base_gems": base_gems,
            "gem_count": forge.len(),
        });
        return to_json(&output);
    }

    let bases = base_counts
        .iter()
        .map(|(label, count)| format!("{} x{}", label, count))
        .collect::<Vec<_>>()
        .join(", ");

    Ok(format!(
        "{}\nColor: {}\n{}\nRecipe: {}\nBase gems: {}",
        title,
        gem.color,
        display_info(gem, options.show_all),
        render(&forge, root)?,
        bases
    ))
}

/// Evaluate a recipe given inline or from a file.
pub fn cmd_eval(
    recipe: Option<&str>,
    file: Option<&Path>,
    options: &EvalOptions,
) -> Result<(), GemError> {
    let text = match (recipe, file) {
        (Some(text), _) => inline_recipe(text),
        (None, Some(path)) => {
            tracing::info!("Reading recipe from {:?}", path);
            read_recipe_file(path)?
        }
        (None, None) => {
            return Err(GemError::MalformedRecipe(
                "provide a recipe or --file".to_string(),
            ));
        }
    };

    println!("{}", eval_report(&text, options)?);
    Ok(())
}

// =============================================================================
// FLATTEN COMMAND
// =============================================================================

/// Render the equations a parenthesized expression flattens to.
pub fn flatten_report(expression: &str, json_mode: bool) -> Result<String, GemError> {
    let equations = equations_from_parentheses(expression)?;
    let lines: Vec<String> = equations.iter().map(ToString::to_string).collect();

    if json_mode {
        return to_json(&serde_json::json!({ "equations": lines }));
    }
    Ok(lines.join("\n"))
}

/// Flatten an expression.
pub fn cmd_flatten(expression: &str, json_mode: bool) -> Result<(), GemError> {
    println!("{}", flatten_report(expression, json_mode)?);
    Ok(())
}

// =============================================================================
// COLORS COMMAND
// =============================================================================

/// Render the base gem table.
pub fn colors_report(use_colors: bool, json_mode: bool) -> Result<String, GemError> {
    if json_mode {
        let rows: Vec<_> = GemColor::ALL
            .iter()
            .map(|&color| {
                serde_json::json!({
                    "label": color.label().to_string(),
                    "color": color,
                    "group": group_name(color, use_colors),
                    "seed": Attributes::seed(color),
                })
            })
            .collect();
        return to_json(&rows);
    }

    let mut lines = vec![format!(
        "{:<5} {:<13} {:>9} {:>9} {:>9} {:>9}",
        "Label", "Gem", "Damage", "Leech", "Bbound", "Crit"
    )];
    for color in GemColor::ALL {
        let seed = Attributes::seed(color);
        lines.push(format!(
            "{:<5} {:<13} {:>9} {:>9} {:>9} {:>9}",
            color.label(),
            group_name(color, use_colors),
            presentation::decimal(seed.damage),
            presentation::decimal(seed.leech),
            presentation::decimal(seed.bloodbinding),
            presentation::decimal(seed.crit_mult),
        ));
    }
    Ok(lines.join("\n"))
}

/// Show the base gem table.
pub fn cmd_colors(use_colors: bool, json_mode: bool) -> Result<(), GemError> {
    println!("{}", colors_report(use_colors, json_mode)?);
    Ok(())
}
