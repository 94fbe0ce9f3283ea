//! Breakpoint registry for nearest-point queries
//!
//! This module provides an immutable, shareable collection of named
//! geographic breakpoints loaded from a decimal-degree CSV export of the
//! published breakpoint dataset.
//!
//! ## Architecture
//!
//! - [`loader`] - CSV container loading, normalization, and validation
//! - Registry queries live on [`BreakpointRegistry`] itself
//!
//! The registry is read-only for the lifetime of a pipeline run and is shared
//! across resolver workers behind an `Arc`.

pub mod loader;

#[cfg(test)]
pub mod tests;

use std::path::Path;

use crate::Result;
use crate::app::models::Breakpoint;

/// Immutable, ordered collection of breakpoints
///
/// Iteration order is the order of the source container; nearest-point ties
/// resolve to the earliest breakpoint in this order.
#[derive(Debug, Clone, Default)]
pub struct BreakpointRegistry {
    breakpoints: Vec<Breakpoint>,
}

impl BreakpointRegistry {
    /// Build a registry from an already-loaded breakpoint list
    pub fn from_breakpoints(breakpoints: Vec<Breakpoint>) -> Self {
        Self { breakpoints }
    }

    /// Load a registry from a breakpoint CSV file
    pub fn load(path: &Path) -> Result<Self> {
        let breakpoints = loader::load_breakpoints(path)?;
        Ok(Self::from_breakpoints(breakpoints))
    }

    /// Number of breakpoints in the registry
    pub fn len(&self) -> usize {
        self.breakpoints.len()
    }

    /// Whether the registry holds no breakpoints
    pub fn is_empty(&self) -> bool {
        self.breakpoints.is_empty()
    }

    /// Iterate breakpoints in registry order
    pub fn iter(&self) -> impl Iterator<Item = &Breakpoint> {
        self.breakpoints.iter()
    }

    /// Get a breakpoint by registry index
    pub fn get(&self, index: usize) -> Option<&Breakpoint> {
        self.breakpoints.get(index)
    }

    /// Find breakpoints by name pattern (case-insensitive, partial match)
    pub fn find_by_name(&self, pattern: &str) -> Vec<&Breakpoint> {
        let pattern_lower = pattern.to_lowercase();
        self.breakpoints
            .iter()
            .filter(|breakpoint| breakpoint.name.to_lowercase().contains(&pattern_lower))
            .collect()
    }
}
