//! State transition history tracking.
//!
//! Every change of [`CalcState`] is recorded together with the key that
//! caused it, so a diagnostic observer can replay how the display got to
//! its current value.

use super::input::Input;
use super::state::CalcState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// The state being transitioned from
    pub from: CalcState,
    /// The state being transitioned to
    pub to: CalcState,
    /// The key press that triggered the transition
    pub input: Input,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state transitions.
///
/// `record` and `retain_last` consume the history and hand back the
/// updated one.
///
/// # Example
///
/// ```rust
/// use reckon::core::{CalcState, Input, Operator, StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: CalcState::LeftOperand,
///         to: CalcState::Operator,
///         input: Input::Operator(Operator::Add),
///         timestamp: Utc::now(),
///     })
///     .record(StateTransition {
///         from: CalcState::Operator,
///         to: CalcState::RightOperand,
///         input: Input::Number('3'),
///         timestamp: Utc::now(),
///     });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // LeftOperand -> Operator -> RightOperand
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateHistory {
    transitions: Vec<StateTransition>,
}

impl StateHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transition.
    pub fn record(mut self, transition: StateTransition) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Keep only the newest `limit` transitions.
    pub fn retain_last(mut self, limit: usize) -> Self {
        if self.transitions.len() > limit {
            let excess = self.transitions.len() - limit;
            self.transitions.drain(..excess);
        }
        self
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest transition, then the `to`
    /// state of each transition.
    pub fn get_path(&self) -> Vec<CalcState> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(first.from);
        }
        path.extend(self.transitions.iter().map(|t| t.to));
        path
    }

    /// Time between the oldest and newest recorded transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn transitions(&self) -> &[StateTransition] {
        &self.transitions
    }

    pub fn last(&self) -> Option<&StateTransition> {
        self.transitions.last()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, Operator};

    fn transition(from: CalcState, to: CalcState, input: Input) -> StateTransition {
        StateTransition {
            from,
            to,
            input,
            timestamp: Utc::now(),
        }
    }

    fn sample() -> StateHistory {
        StateHistory::new()
            .record(transition(
                CalcState::LeftOperand,
                CalcState::Operator,
                Input::Operator(Operator::Add),
            ))
            .record(transition(
                CalcState::Operator,
                CalcState::RightOperand,
                Input::Number('3'),
            ))
            .record(transition(
                CalcState::RightOperand,
                CalcState::Result,
                Input::Action(Action::Result),
            ))
    }

    #[test]
    fn new_history_is_empty() {
        let history = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let path = sample().get_path();
        assert_eq!(
            path,
            vec![
                CalcState::LeftOperand,
                CalcState::Operator,
                CalcState::RightOperand,
                CalcState::Result,
            ]
        );
    }

    #[test]
    fn retain_last_drops_oldest_entries() {
        let history = sample().retain_last(2);
        assert_eq!(history.len(), 2);
        assert_eq!(history.transitions()[0].from, CalcState::Operator);
        assert_eq!(
            history.last().map(|t| t.input),
            Some(Input::Action(Action::Result))
        );
    }

    #[test]
    fn retain_last_is_noop_under_limit() {
        assert_eq!(sample().retain_last(10).len(), 3);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let start = Utc::now();
        let history = StateHistory::new()
            .record(StateTransition {
                timestamp: start,
                ..transition(
                    CalcState::LeftOperand,
                    CalcState::Operator,
                    Input::Operator(Operator::Divide),
                )
            })
            .record(StateTransition {
                timestamp: start + chrono::Duration::milliseconds(250),
                ..transition(
                    CalcState::Operator,
                    CalcState::RightOperand,
                    Input::Number('2'),
                )
            });

        assert_eq!(history.duration(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = sample();
        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(history, deserialized);
    }
}
