//! `reqform calc` – drive the calculator engine with a key sequence.

use anyhow::Result;
use reqform_core::calculator::{Calculator, Compute, Key};

/// Feeds each key to one engine instance, echoing the display after every
/// press the way the widget UI would. Unrecognized characters are skipped.
pub fn run_calc(keys: &str) -> Result<()> {
    let mut calc = Calculator::new();

    for c in keys.chars() {
        let key = match Key::from_char(c) {
            Some(k) => k,
            None => {
                if !c.is_whitespace() {
                    tracing::debug!("ignoring key {:?}", c);
                }
                continue;
            }
        };
        let outcome = calc.press(key);
        if outcome == Compute::DivisionByZero {
            println!("Cannot divide by zero");
        }
        print_display(c, &calc);
    }

    Ok(())
}

fn print_display(key: char, calc: &Calculator) {
    let pending = calc.pending_display();
    if pending.is_empty() {
        println!("[{}] {}", key, calc.current_display());
    } else {
        println!("[{}] {} | {}", key, pending, calc.current_display());
    }
}
