//! Core calculator types and logic.
//!
//! This module contains the pure pieces the machine is assembled from:
//! - The pending display buffer (`Accumulator`)
//! - Operators and the total arithmetic function `apply`
//! - Key presses (`Input`) and machine states (`CalcState`)
//! - Transition history
//!
//! Nothing in here performs I/O or logging.

mod accumulator;
mod history;
mod input;
mod number;
mod operator;
mod state;

pub use accumulator::Accumulator;
pub use history::{StateHistory, StateTransition};
pub use input::{Action, Input, InputError, InputKind, NUMBER_KEYS};
pub use number::{format_number, parse_leading};
pub use operator::{apply, Operator, UnknownOperator};
pub use state::CalcState;

pub(crate) use number::float_text;
