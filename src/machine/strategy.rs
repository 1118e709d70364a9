//! Per-state interpretation of key presses.
//!
//! Each state has one zero-sized strategy. Handlers mutate the calculator
//! and return the state to move to, if any.

use super::Calculator;
use crate::core::{CalcState, Operator};

/// How one state reacts to each kind of key.
///
/// The provided methods are the shared behavior; states override only what
/// differs.
pub(crate) trait Strategy {
    fn on_number(&self, calc: &mut Calculator, key: char) -> Option<CalcState> {
        calc.append(key);
        None
    }

    fn on_operator(&self, _calc: &mut Calculator, _operator: Operator) -> Option<CalcState> {
        None
    }

    fn on_result(&self, _calc: &mut Calculator) -> Option<CalcState> {
        None
    }

    fn on_clear(&self, calc: &mut Calculator) -> Option<CalcState> {
        calc.reset();
        None
    }
}

/// Strategy for the given state.
pub(crate) fn for_state(state: CalcState) -> &'static dyn Strategy {
    match state {
        CalcState::LeftOperand => &LeftOperandStrategy,
        CalcState::Operator => &OperatorStrategy,
        CalcState::RightOperand => &RightOperandStrategy,
        CalcState::Result => &ResultStrategy,
    }
}

struct LeftOperandStrategy;
struct OperatorStrategy;
struct RightOperandStrategy;
struct ResultStrategy;

impl Strategy for LeftOperandStrategy {
    fn on_operator(&self, calc: &mut Calculator, operator: Operator) -> Option<CalcState> {
        take_accumulator_as_left(calc, operator)
    }
}

impl Strategy for OperatorStrategy {
    /// The first digit of the right operand replaces the left operand's
    /// digits still on display.
    fn on_number(&self, calc: &mut Calculator, key: char) -> Option<CalcState> {
        if !calc.admits(key, "") {
            return None;
        }
        calc.accumulator.clear();
        calc.accumulator.push(key);
        Some(CalcState::RightOperand)
    }

    fn on_operator(&self, calc: &mut Calculator, operator: Operator) -> Option<CalcState> {
        calc.operator = Some(operator);
        None
    }

    fn on_result(&self, calc: &mut Calculator) -> Option<CalcState> {
        evaluate_against_accumulator(calc);
        None
    }
}

impl Strategy for RightOperandStrategy {
    fn on_operator(&self, calc: &mut Calculator, operator: Operator) -> Option<CalcState> {
        let result = evaluate_against_accumulator(calc);
        calc.left_operand = result;
        calc.operator = Some(operator);
        Some(CalcState::Operator)
    }

    /// Evaluates, then folds the right operand into the left so repeated
    /// `=` re-applies it: `a - b` continues as `+ (-b)`, `a / b` as
    /// `* (1/b)`.
    fn on_result(&self, calc: &mut Calculator) -> Option<CalcState> {
        evaluate_against_accumulator(calc);

        let mut chained = calc.right_operand;
        match calc.operator {
            Some(Operator::Subtract) => {
                chained = -chained;
                calc.operator = Some(Operator::Add);
            }
            Some(Operator::Divide) => {
                chained = 1.0 / chained;
                calc.operator = Some(Operator::Multiply);
            }
            _ => {}
        }
        calc.left_operand = chained;

        Some(CalcState::Result)
    }
}

impl Strategy for ResultStrategy {
    fn on_operator(&self, calc: &mut Calculator, operator: Operator) -> Option<CalcState> {
        take_accumulator_as_left(calc, operator)
    }

    fn on_result(&self, calc: &mut Calculator) -> Option<CalcState> {
        evaluate_against_accumulator(calc);
        None
    }
}

fn take_accumulator_as_left(calc: &mut Calculator, operator: Operator) -> Option<CalcState> {
    calc.operator = Some(operator);
    calc.left_operand = calc.accumulator.as_number();
    Some(CalcState::Operator)
}

/// right = accumulator; accumulator = left op right. Returns the result.
fn evaluate_against_accumulator(calc: &mut Calculator) -> f64 {
    calc.right_operand = calc.accumulator.as_number();
    let result = calc.evaluate();
    calc.accumulator.set_from_number(result);
    result
}
