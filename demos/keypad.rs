//! Keypad
//!
//! This demo plays a key sequence into a calculator and prints the display
//! after every key, the way a keypad front end would refresh it.
//!
//! Key concepts:
//! - Keys arrive as `(kind, value)` pairs
//! - The display is whatever `output()` returns after each key
//! - Unknown keys are ignored, never reported as errors
//!
//! Run with: cargo run --example keypad -- "12+3=="
//!
//! Keys: digits and `.`, operators `+ - * /`, `n` for the sign key, `C`
//! to clear, `=` to evaluate. Set `RUST_LOG=reckon=debug` to see the
//! register dump after each key.

use reckon::{Calculator, InputKind};
use tracing_subscriber::EnvFilter;

fn keypad_pair(key: char) -> (InputKind, String) {
    match key {
        '0'..='9' | '.' => (InputKind::Number, key.to_string()),
        'n' => (InputKind::Number, "-".to_string()),
        '+' | '-' | '*' | '/' => (InputKind::Operator, key.to_string()),
        'c' => (InputKind::Action, "C".to_string()),
        _ => (InputKind::Action, key.to_string()),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let keys = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "12+3=".to_string());

    println!("=== Keypad ===\n");

    let mut calc = Calculator::new();
    for key in keys.chars().filter(|c| !c.is_whitespace()) {
        let (kind, value) = keypad_pair(key);
        calc.input(kind, &value);
        let marker = if calc.state().shows_result() { "=" } else { " " };
        println!(
            "  [{key}]  {:>24} {marker}  ({})",
            calc.output(),
            calc.state()
        );
    }

    println!("\nStates visited: {:?}", calc.history().get_path());
}
