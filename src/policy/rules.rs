//! Input policy rules using Validation.

use crate::policy::context::KeyContext;
use crate::policy::violations::{PolicyViolation, ViolationStrategy};
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::warn;

/// Outcome of checking one key: success, or every violated rule.
pub type PolicyCheckResult = Validation<(), NonEmptyVec<PolicyViolation>>;

/// Type alias for custom check functions
pub type PolicyCheck = Box<dyn Fn(&KeyContext) -> PolicyCheckResult + Send + Sync>;

/// Rules applied to number keys before they reach the accumulator.
/// Uses Validation to accumulate ALL violations.
///
/// The default policy has no rules, so `1 . 2 . 3` is typed verbatim.
pub struct InputPolicy {
    pub(crate) single_point: bool,
    pub(crate) leading_sign_only: bool,
    pub(crate) max_digits: Option<usize>,
    pub(crate) required_checks: Vec<PolicyCheck>,
    pub(crate) on_violation: ViolationStrategy,
}

impl InputPolicy {
    /// A policy that accepts every number key.
    pub fn permissive() -> Self {
        Self {
            single_point: false,
            leading_sign_only: false,
            max_digits: None,
            required_checks: Vec::new(),
            on_violation: ViolationStrategy::Reject,
        }
    }

    /// Check all rules, accumulating ALL violations.
    pub fn check(&self, context: &KeyContext) -> PolicyCheckResult {
        let mut checks: Vec<PolicyCheckResult> = Vec::new();

        if self.single_point && context.key == '.' {
            checks.push(if context.has_point() {
                Validation::fail(PolicyViolation::DuplicatePoint {
                    pending: context.pending.clone(),
                })
            } else {
                Validation::success(())
            });
        }

        if self.leading_sign_only && context.key == '-' {
            checks.push(if context.is_first_key() {
                Validation::success(())
            } else {
                Validation::fail(PolicyViolation::MisplacedSign {
                    pending: context.pending.clone(),
                })
            });
        }

        if let Some(max) = self.max_digits {
            if context.key.is_ascii_digit() {
                checks.push(if context.digit_count() >= max {
                    Validation::fail(PolicyViolation::TooManyDigits { max })
                } else {
                    Validation::success(())
                });
            }
        }

        for check_fn in &self.required_checks {
            checks.push(check_fn(context));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Decide whether the key goes through, logging any violations.
    pub fn admit(&self, context: &KeyContext) -> bool {
        match self.check(context) {
            Validation::Success(_) => true,
            Validation::Failure(violations) => {
                for violation in violations.iter() {
                    warn!(
                        key = %context.key,
                        state = context.state.name(),
                        strategy = ?self.on_violation,
                        "{violation}"
                    );
                }
                self.on_violation == ViolationStrategy::IgnoreAndLog
            }
        }
    }

    pub fn violation_strategy(&self) -> ViolationStrategy {
        self.on_violation
    }

    /// Whether any rule is configured.
    pub fn is_permissive(&self) -> bool {
        !self.single_point
            && !self.leading_sign_only
            && self.max_digits.is_none()
            && self.required_checks.is_empty()
    }
}

impl Default for InputPolicy {
    fn default() -> Self {
        Self::permissive()
    }
}

impl fmt::Debug for InputPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputPolicy")
            .field("single_point", &self.single_point)
            .field("leading_sign_only", &self.leading_sign_only)
            .field("max_digits", &self.max_digits)
            .field("required_checks", &self.required_checks.len())
            .field("on_violation", &self.on_violation)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CalcState;
    use crate::policy::builder::PolicyBuilder;

    fn key(pending: &str, key: char) -> KeyContext {
        KeyContext::new(CalcState::LeftOperand, pending, key)
    }

    #[test]
    fn permissive_policy_accepts_everything() {
        let policy = InputPolicy::permissive();
        assert!(policy.is_permissive());
        assert!(policy.check(&key("1.2", '.')).is_success());
        assert!(policy.check(&key("12", '-')).is_success());
        assert!(policy.admit(&key("1.2", '.')));
    }

    #[test]
    fn single_point_rejects_second_point() {
        let policy = PolicyBuilder::new().single_decimal_point().build();

        assert!(policy.check(&key("12", '.')).is_success());

        let result = policy.check(&key("1.2", '.'));
        assert!(result.is_failure());
        if let Validation::Failure(errors) = result {
            assert!(errors
                .iter()
                .any(|e| matches!(e, PolicyViolation::DuplicatePoint { .. })));
        }
    }

    #[test]
    fn sign_only_accepted_first() {
        let policy = PolicyBuilder::new().leading_sign_only().build();

        assert!(policy.check(&key("", '-')).is_success());
        assert!(policy.check(&key("4", '-')).is_failure());
    }

    #[test]
    fn max_digits_counts_only_digits() {
        let policy = PolicyBuilder::new().max_digits(3).build();

        assert!(policy.check(&key("-1.2", '3')).is_success());
        assert!(policy.check(&key("1.23", '4')).is_failure());
        // Non-digit keys never count against the limit
        assert!(policy.check(&key("123", '.')).is_success());
    }

    #[test]
    fn policy_accumulates_all_violations() {
        let policy = PolicyBuilder::new()
            .single_decimal_point()
            .leading_sign_only()
            .max_digits(1)
            .require_pred(|_ctx| false, "Custom check always fails".to_string())
            .build();

        match policy.check(&key("1.", '.')) {
            Validation::Failure(errors) => {
                // The point rule and the custom rule fire; the sign and digit
                // rules do not apply to a point key
                assert_eq!(errors.len(), 2);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, PolicyViolation::DuplicatePoint { .. })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, PolicyViolation::CustomCheckFailed { .. })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn reject_strategy_refuses_key() {
        let policy = PolicyBuilder::new()
            .single_decimal_point()
            .on_violation(ViolationStrategy::Reject)
            .build();

        assert!(!policy.admit(&key("0.5", '.')));
    }

    #[test]
    fn ignore_and_log_strategy_accepts_key() {
        let policy = PolicyBuilder::new()
            .single_decimal_point()
            .on_violation(ViolationStrategy::IgnoreAndLog)
            .build();

        assert!(policy.admit(&key("0.5", '.')));
        assert_eq!(policy.violation_strategy(), ViolationStrategy::IgnoreAndLog);
    }

    #[test]
    fn custom_validation_check_sees_state() {
        let policy = PolicyBuilder::new()
            .require(|ctx: &KeyContext| {
                if ctx.state.expects_right_operand() && ctx.key == '-' {
                    Validation::fail(PolicyViolation::CustomCheckFailed {
                        message: "no negative divisors".to_string(),
                    })
                } else {
                    Validation::success(())
                }
            })
            .build();

        assert!(policy.check(&key("", '-')).is_success());
        let right = KeyContext::new(CalcState::Operator, "", '-');
        assert!(policy.check(&right).is_failure());
    }
}
