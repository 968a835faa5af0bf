//! # gemcraft-core
//!
//! The gem fusion engine - THE ENGINE.
//!
//! Discrete base gems with fixed properties are pairwise combined into
//! stronger composites. This crate decides what a combination *is* and what
//! it is *worth*:
//! - the composite's color, grade growth and cost
//! - its four interpolated attributes
//! - its aggregate power and growth ranking score
//! - the canonical textual recipe that reproduces it
//!
//! ## Architectural Constraints
//!
//! The engine:
//! - Owns every gem in a `Forge` arena; composites refer to parents by `GemId`
//! - Keeps valuation records immutable; only use counters change
//! - Leaves scheduling, slots and automation to external collaborators
//!   (see `overlay` for the metadata they attach)
//! - Has NO async, NO I/O, NO logging (pure Rust)

// =============================================================================
// MODULES
// =============================================================================

pub mod forge;
pub mod ingestor;
pub mod overlay;
pub mod presentation;
pub mod primitives;
pub mod recipe;
pub mod types;
pub mod valuation;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{Attributes, GemColor, GemError, GemId};

// =============================================================================
// RE-EXPORTS: Engine
// =============================================================================

pub use forge::{Forge, Gem};
pub use ingestor::{Equation, Expression, Ingestor, equations_from_parentheses};
pub use overlay::{GemOverlay, OverlayTable};
pub use presentation::GemSummary;
pub use recipe::{render, render_into};
