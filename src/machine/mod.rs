//! The calculator state machine.
//!
//! [`Calculator`] owns the accumulator and operand registers and hands each
//! key to the strategy of its current state.

mod snapshot;
mod strategy;

pub use snapshot::Snapshot;

use crate::builder::{CalculatorBuilder, DEFAULT_HISTORY_LIMIT};
use crate::checkpoint::{Checkpoint, CheckpointError};
use crate::core::{
    apply, Accumulator, Action, CalcState, Input, InputKind, Operator, StateHistory,
    StateTransition,
};
use crate::policy::{InputPolicy, KeyContext};
use chrono::Utc;
use tracing::{debug, trace};

/// A four-function calculator driven one key at a time.
///
/// Every method runs to completion; there is no background work. Mutation
/// goes through `&mut self`, so sharing an instance between threads needs
/// external synchronization such as a `Mutex`.
///
/// # Example
///
/// ```rust
/// use reckon::{Calculator, InputKind};
///
/// let mut calc = Calculator::new();
/// for (kind, value) in [
///     (InputKind::Number, "1"),
///     (InputKind::Number, "2"),
///     (InputKind::Operator, "+"),
///     (InputKind::Number, "3"),
///     (InputKind::Action, "="),
/// ] {
///     calc.input(kind, value);
/// }
/// assert_eq!(calc.output(), "15");
/// ```
#[derive(Debug)]
pub struct Calculator {
    accumulator: Accumulator,
    operator: Option<Operator>,
    left_operand: f64,
    right_operand: f64,
    state: CalcState,
    history: StateHistory,
    policy: InputPolicy,
    history_limit: usize,
}

impl Calculator {
    /// Create a calculator with the permissive input policy.
    pub fn new() -> Self {
        Self::with_config(InputPolicy::permissive(), DEFAULT_HISTORY_LIMIT)
    }

    pub fn builder() -> CalculatorBuilder {
        CalculatorBuilder::new()
    }

    pub(crate) fn with_config(policy: InputPolicy, history_limit: usize) -> Self {
        Self {
            accumulator: Accumulator::new(),
            operator: None,
            left_operand: 0.0,
            right_operand: 0.0,
            state: CalcState::LeftOperand,
            history: StateHistory::new(),
            policy,
            history_limit,
        }
    }

    /// Feed one key reported as a `(kind, value)` pair.
    ///
    /// Values that do not name a key of that kind are ignored.
    pub fn input(&mut self, kind: InputKind, value: &str) {
        match Input::parse(kind, value) {
            Ok(input) => self.press(input),
            Err(err) => trace!(%kind, value, "ignoring input: {err}"),
        }
    }

    /// Feed one typed key.
    pub fn press(&mut self, input: Input) {
        let from = self.state;
        let strategy = strategy::for_state(from);

        let next = match input {
            Input::Number(key) => strategy.on_number(self, key),
            Input::Operator(operator) => strategy.on_operator(self, operator),
            Input::Action(Action::Clear) => strategy.on_clear(self),
            Input::Action(Action::Result) => strategy.on_result(self),
        };

        if let Some(to) = next {
            self.transition(from, to, input);
        }

        debug!(
            input = %input,
            acc = %self.accumulator.joined(),
            operator = ?self.operator,
            left = self.left_operand,
            right = self.right_operand,
            state = self.state.name(),
            "calculator updated"
        );
    }

    /// Feed a sequence of typed keys.
    pub fn press_all<I>(&mut self, inputs: I)
    where
        I: IntoIterator<Item = Input>,
    {
        for input in inputs {
            self.press(input);
        }
    }

    /// Current display text.
    pub fn output(&self) -> String {
        self.accumulator.display()
    }

    /// Return to the initial state. The input policy and history limit are
    /// kept; the transition history is cleared.
    pub fn reset(&mut self) {
        self.accumulator.clear();
        self.operator = None;
        self.left_operand = 0.0;
        self.right_operand = 0.0;
        self.state = CalcState::LeftOperand;
        self.history = StateHistory::new();
    }

    pub fn state(&self) -> CalcState {
        self.state
    }

    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    pub fn left_operand(&self) -> f64 {
        self.left_operand
    }

    pub fn right_operand(&self) -> f64 {
        self.right_operand
    }

    pub fn accumulator(&self) -> &Accumulator {
        &self.accumulator
    }

    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    pub fn policy(&self) -> &InputPolicy {
        &self.policy
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    /// Copy of the registers.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            accumulator: self.accumulator.clone(),
            operator: self.operator,
            left_operand: self.left_operand,
            right_operand: self.right_operand,
            state: self.state,
        }
    }

    /// Serializable checkpoint of registers and history.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint::new(self.snapshot(), self.history.clone())
    }

    /// Replace registers and history with those of a checkpoint.
    ///
    /// The checkpoint is validated first; on error the calculator is left
    /// untouched.
    pub fn restore(&mut self, checkpoint: Checkpoint) -> Result<(), CheckpointError> {
        checkpoint.validate()?;

        let Checkpoint {
            snapshot, history, ..
        } = checkpoint;
        self.accumulator = snapshot.accumulator;
        self.operator = snapshot.operator;
        self.left_operand = snapshot.left_operand;
        self.right_operand = snapshot.right_operand;
        self.state = snapshot.state;
        self.history = history.retain_last(self.history_limit);

        debug!(state = self.state.name(), "calculator restored from checkpoint");
        Ok(())
    }

    fn transition(&mut self, from: CalcState, to: CalcState, input: Input) {
        trace!(from = from.name(), to = to.name(), %input, "transition");
        self.state = to;
        let record = StateTransition {
            from,
            to,
            input,
            timestamp: Utc::now(),
        };
        self.history = std::mem::take(&mut self.history)
            .record(record)
            .retain_last(self.history_limit);
    }

    /// Whether the policy lets `key` be appended to `pending`.
    fn admits(&self, key: char, pending: &str) -> bool {
        if self.policy.is_permissive() {
            return true;
        }
        self.policy.admit(&KeyContext::new(self.state, pending, key))
    }

    /// Append a key to the accumulator, subject to the input policy.
    fn append(&mut self, key: char) {
        if self.admits(key, &self.accumulator.joined()) {
            self.accumulator.push(key);
        }
    }

    /// `left op right` with the current registers.
    fn evaluate(&self) -> f64 {
        apply(self.operator, self.left_operand, self.right_operand)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
