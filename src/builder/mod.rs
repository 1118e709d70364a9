//! Builder API for configuring a calculator.
//!
//! ```rust
//! use reckon::builder::CalculatorBuilder;
//! use reckon::policy::PolicyBuilder;
//!
//! let calc = CalculatorBuilder::new()
//!     .policy(PolicyBuilder::new().single_decimal_point().build())
//!     .history_limit(16)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(calc.history_limit(), 16);
//! ```

pub mod error;

pub use error::BuildError;

use crate::checkpoint::Checkpoint;
use crate::machine::Calculator;
use crate::policy::InputPolicy;

/// Transitions kept when no limit is configured.
pub const DEFAULT_HISTORY_LIMIT: usize = 128;

/// Builder for constructing calculators with a fluent API.
#[derive(Debug)]
pub struct CalculatorBuilder {
    policy: InputPolicy,
    history_limit: usize,
    resume: Option<Checkpoint>,
}

impl CalculatorBuilder {
    pub fn new() -> Self {
        Self {
            policy: InputPolicy::permissive(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            resume: None,
        }
    }

    /// Set the policy applied to number keys.
    pub fn policy(mut self, policy: InputPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set how many transitions the history keeps.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Start from a checkpoint instead of the initial state.
    pub fn resume_from(mut self, checkpoint: Checkpoint) -> Self {
        self.resume = Some(checkpoint);
        self
    }

    /// Build the calculator.
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> Result<Calculator, BuildError> {
        if self.history_limit == 0 {
            return Err(BuildError::ZeroHistoryLimit);
        }

        let mut calc = Calculator::with_config(self.policy, self.history_limit);
        if let Some(checkpoint) = self.resume {
            calc.restore(checkpoint)?;
        }

        Ok(calc)
    }
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
