//! Builder API for creating input policies.

use crate::policy::context::KeyContext;
use crate::policy::rules::{InputPolicy, PolicyCheck, PolicyCheckResult};
use crate::policy::violations::{PolicyViolation, ViolationStrategy};
use stillwater::validation::Validation;

/// Builder for creating input policies
pub struct PolicyBuilder {
    single_point: bool,
    leading_sign_only: bool,
    max_digits: Option<usize>,
    required_checks: Vec<PolicyCheck>,
    on_violation: ViolationStrategy,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self {
            single_point: false,
            leading_sign_only: false,
            max_digits: None,
            required_checks: Vec::new(),
            on_violation: ViolationStrategy::Reject,
        }
    }

    /// Refuse a second decimal point in the same numeral
    pub fn single_decimal_point(mut self) -> Self {
        self.single_point = true;
        self
    }

    /// Accept the sign key only as the first key of a numeral
    pub fn leading_sign_only(mut self) -> Self {
        self.leading_sign_only = true;
        self
    }

    /// Cap the number of digits in a numeral
    pub fn max_digits(mut self, n: usize) -> Self {
        self.max_digits = Some(n);
        self
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&KeyContext) -> PolicyCheckResult + Send + Sync + 'static,
    {
        self.required_checks.push(Box::new(check));
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(mut self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&KeyContext) -> bool + Send + Sync + 'static,
    {
        let check = move |ctx: &KeyContext| {
            if predicate(ctx) {
                Validation::success(())
            } else {
                Validation::fail(PolicyViolation::CustomCheckFailed {
                    message: error_msg.clone(),
                })
            }
        };
        self.required_checks.push(Box::new(check));
        self
    }

    /// Set violation handling strategy
    pub fn on_violation(mut self, strategy: ViolationStrategy) -> Self {
        self.on_violation = strategy;
        self
    }

    pub fn build(self) -> InputPolicy {
        InputPolicy {
            single_point: self.single_point,
            leading_sign_only: self.leading_sign_only,
            max_digits: self.max_digits,
            required_checks: self.required_checks,
            on_violation: self.on_violation,
        }
    }
}

impl Default for PolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
