//! Validation of number keys before they reach the accumulator.
//!
//! The calculator accepts any number key by default, including a second
//! decimal point. An [`InputPolicy`] opts into stricter entry. Checks use
//! Stillwater's `Validation` so a refused key reports every rule it broke,
//! not just the first.
//!
//! # Example
//!
//! ```rust
//! use reckon::policy::{KeyContext, PolicyBuilder, ViolationStrategy};
//! use reckon::core::CalcState;
//!
//! let policy = PolicyBuilder::new()
//!     .single_decimal_point()
//!     .max_digits(12)
//!     .on_violation(ViolationStrategy::Reject)
//!     .build();
//!
//! let key = KeyContext::new(CalcState::LeftOperand, "3.1", '.');
//! assert!(!policy.admit(&key));
//! ```

pub mod builder;
pub mod context;
pub mod rules;
pub mod violations;

pub use builder::PolicyBuilder;
pub use context::KeyContext;
pub use rules::{InputPolicy, PolicyCheck, PolicyCheckResult};
pub use violations::{PolicyViolation, ViolationStrategy};
