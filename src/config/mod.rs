//! Configuration for the pathway engine.

use std::fmt;

/// Configuration for a [`Pathway`](crate::pathway::Pathway) session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathwayConfig {
    /// Whether to run the validation boundary on every record replacement
    pub validate_input: bool,
    /// Escalate clinical consistency warnings to errors
    pub strict_validation: bool,
    /// Log every evaluation at debug level
    pub log_evaluations: bool,
}

impl Default for PathwayConfig {
    fn default() -> Self {
        Self {
            validate_input: true,
            strict_validation: false,
            log_evaluations: true,
        }
    }
}

impl PathwayConfig {
    /// Create a new configuration with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject records with clinical consistency warnings
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.validate_input = true;
        self.strict_validation = true;
        self
    }

    /// Accept records without running the validation boundary
    #[must_use]
    pub fn without_validation(mut self) -> Self {
        self.validate_input = false;
        self.strict_validation = false;
        self
    }

    /// Enable or disable evaluation logging
    #[must_use]
    pub fn with_evaluation_logging(mut self, enabled: bool) -> Self {
        self.log_evaluations = enabled;
        self
    }
}

impl fmt::Display for PathwayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Pathway Configuration:")?;
        writeln!(f, "  Validate Input: {}", self.validate_input)?;
        writeln!(f, "  Strict Validation: {}", self.strict_validation)?;
        writeln!(f, "  Log Evaluations: {}", self.log_evaluations)?;
        Ok(())
    }
}
