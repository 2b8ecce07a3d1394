//! Rewrite limits and configuration

use crate::error::{KeyCaseError, Result};

/// Limits applied by guarded rewrites of untrusted input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteLimits {
    /// Maximum container nesting depth (default: 128, hard: 4,096)
    pub max_depth: usize,
    /// Maximum number of visited nodes (default: 10,000,000)
    pub max_nodes: usize,
}

impl Default for RewriteLimits {
    fn default() -> Self {
        Self {
            max_depth: 128,
            max_nodes: 10_000_000,
        }
    }
}

impl RewriteLimits {
    /// Hard maximum limits that cannot be exceeded
    pub fn hard_maximums() -> Self {
        Self {
            max_depth: 4_096,
            max_nodes: usize::MAX,
        }
    }

    /// Limits that only bound nesting depth
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }

    /// Validate limits against hard maximums
    pub fn validate(&self) -> Result<()> {
        let hard = Self::hard_maximums();

        if self.max_depth > hard.max_depth {
            return Err(KeyCaseError::InvalidLimits(format!(
                "max_depth {} exceeds hard limit {}",
                self.max_depth, hard.max_depth
            )));
        }

        Ok(())
    }
}
