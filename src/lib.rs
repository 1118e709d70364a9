//! Reckon: a four-function calculator core driven by a state machine
//!
//! A keypad reports presses as `(kind, value)` pairs. Reckon interprets that
//! stream the way a pocket calculator does and keeps the text to display.
//! Rendering and key binding stay with the caller.
//!
//! # Core Concepts
//!
//! - **Accumulator**: the keys typed so far, shown verbatim until resolved
//! - **States**: `LeftOperand`, `Operator`, `RightOperand`, `Result`
//! - **Strategies**: one per state, deciding what each key does
//! - **Chaining**: repeated `=` re-applies the last operation to the result
//!
//! Arithmetic never fails: dividing by zero shows `Infinity` (or `NaN`),
//! and keys that mean nothing in the current state are ignored.
//!
//! # Example
//!
//! ```rust
//! use reckon::{Calculator, InputKind};
//!
//! let mut calc = Calculator::new();
//! let keys = [
//!     (InputKind::Number, "5"),
//!     (InputKind::Operator, "-"),
//!     (InputKind::Number, "3"),
//!     (InputKind::Action, "="),
//! ];
//! for (kind, value) in keys {
//!     calc.input(kind, value);
//! }
//! assert_eq!(calc.output(), "2");
//!
//! // Repeating `=` subtracts 3 again
//! calc.input(InputKind::Action, "=");
//! assert_eq!(calc.output(), "-1");
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod machine;
pub mod policy;

// Re-export commonly used types
pub use builder::{BuildError, CalculatorBuilder};
pub use checkpoint::{Checkpoint, CheckpointError};
pub use crate::core::{Accumulator, Action, CalcState, Input, InputError, InputKind, Operator};
pub use machine::{Calculator, Snapshot};
pub use policy::{InputPolicy, PolicyBuilder, ViolationStrategy};
