//! Record filtering with glob pattern support.
//!
//! Patterns are matched against a record's resource path.

use glob::Pattern;

use crate::error::SourceCountError;
use crate::Result;

/// Configuration for record filtering.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Glob patterns to include (if empty, include everything)
    pub include: Vec<Pattern>,
    /// Glob patterns to exclude
    pub exclude: Vec<Pattern>,
}

fn compile(pattern: &str) -> Result<Pattern> {
    Pattern::new(pattern).map_err(|e| SourceCountError::InvalidGlob {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

impl FilterConfig {
    /// Create a new empty filter config (includes everything).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an include pattern.
    pub fn include(mut self, pattern: &str) -> Result<Self> {
        self.include.push(compile(pattern)?);
        Ok(self)
    }

    /// Add an exclude pattern.
    pub fn exclude(mut self, pattern: &str) -> Result<Self> {
        self.exclude.push(compile(pattern)?);
        Ok(self)
    }

    /// Check if a resource path passes the filter.
    ///
    /// A path matches if it matches no exclude pattern and at least one
    /// include pattern (or include is empty).
    pub fn matches(&self, resource_path: &str) -> bool {
        if self.exclude.iter().any(|p| p.matches(resource_path)) {
            return false;
        }

        self.include.is_empty() || self.include.iter().any(|p| p.matches(resource_path))
    }
}
