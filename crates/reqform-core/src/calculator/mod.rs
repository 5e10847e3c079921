//! Calculator widget state machine.
//!
//! Holds two operand strings, a pending operator, and a reset-on-next-digit
//! flag. Every transition runs to completion on the calling thread; one UI
//! owns one instance, so no shared state. Malformed or out-of-sequence input
//! is absorbed as a silent no-op; the only hard failure is division by zero,
//! which resets the engine and is reported to the caller for display.

mod format;

pub use format::format_operand;

/// Pending arithmetic operation between the previous and current operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// IEEE-754 truncated remainder (Rust `%` on f64).
    Remainder,
}

impl Operator {
    /// Parses an operator key (`+ - * / %`).
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            '%' => Some(Operator::Remainder),
            _ => None,
        }
    }

    /// Display symbol shown next to the pending operand.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "\u{2212}",
            Operator::Multiply => "\u{00d7}",
            Operator::Divide => "\u{00f7}",
            Operator::Remainder => "%",
        }
    }
}

/// Outcome of [`Calculator::compute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compute {
    /// Result stored in the current operand.
    Evaluated,
    /// Nothing to do (no pending operation or operands not both numeric).
    Noop,
    /// Divisor was zero; the engine has been reset to its initial state and
    /// the caller should surface a notification.
    DivisionByZero,
}

/// Keyboard/event input accepted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(char),
    Operator(Operator),
    Equals,
    Delete,
    Clear,
}

impl Key {
    /// Maps a key character to an engine event: `0-9` and `.` append, `+ - * / %`
    /// choose an operator, `=` computes, `<` deletes, `c` clears.
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_digit() || c == '.' {
            return Some(Key::Digit(c));
        }
        if let Some(op) = Operator::from_char(c) {
            return Some(Key::Operator(op));
        }
        match c {
            '=' => Some(Key::Equals),
            '<' => Some(Key::Delete),
            'c' | 'C' => Some(Key::Clear),
            _ => None,
        }
    }
}

/// Four-field calculator state. Created once per UI, lives for its lifetime;
/// `clear` resets fields without destroying the instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculator {
    current_operand: String,
    previous_operand: String,
    operation: Option<Operator>,
    should_reset_screen: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            current_operand: "0".to_string(),
            previous_operand: String::new(),
            operation: None,
            should_reset_screen: false,
        }
    }

    /// Resets all state to initial values.
    pub fn clear(&mut self) {
        self.current_operand = "0".to_string();
        self.previous_operand.clear();
        self.operation = None;
        self.should_reset_screen = false;
    }

    /// Appends a digit or decimal point to the current operand.
    ///
    /// After a compute or operator choice the next digit overwrites the
    /// screen. A second decimal point, or any character outside `0-9` and
    /// `.`, is a silent no-op.
    pub fn append_digit(&mut self, c: char) {
        if !c.is_ascii_digit() && c != '.' {
            return;
        }
        if self.should_reset_screen {
            self.current_operand = "0".to_string();
            self.should_reset_screen = false;
        }
        if c == '.' && self.current_operand.contains('.') {
            return;
        }
        if self.current_operand == "0" && c != '.' {
            self.current_operand = c.to_string();
        } else {
            self.current_operand.push(c);
        }
    }

    /// Selects the pending operation, evaluating any already-pending one
    /// first (strict left-to-right chaining, no precedence).
    pub fn choose_operation(&mut self, op: Operator) -> Compute {
        if self.current_operand.is_empty() {
            return Compute::Noop;
        }
        let chained = if !self.previous_operand.is_empty() {
            let outcome = self.compute();
            if outcome == Compute::DivisionByZero {
                return outcome;
            }
            outcome
        } else {
            Compute::Noop
        };
        self.operation = Some(op);
        self.previous_operand = std::mem::take(&mut self.current_operand);
        self.should_reset_screen = true;
        chained
    }

    /// Applies the pending operation to `(previous, current)` in that order.
    ///
    /// No-op unless both operands parse as finite numbers and an operation is
    /// set, so repeated `=` presses are harmless. Division by zero resets the
    /// engine instead of producing a result.
    pub fn compute(&mut self) -> Compute {
        let op = match self.operation {
            Some(op) => op,
            None => return Compute::Noop,
        };
        let prev: f64 = match self.previous_operand.parse() {
            Ok(v) => v,
            Err(_) => return Compute::Noop,
        };
        let current: f64 = match self.current_operand.parse() {
            Ok(v) => v,
            Err(_) => return Compute::Noop,
        };

        let result = match op {
            Operator::Add => prev + current,
            Operator::Subtract => prev - current,
            Operator::Multiply => prev * current,
            Operator::Divide => {
                if current == 0.0 {
                    self.clear();
                    return Compute::DivisionByZero;
                }
                prev / current
            }
            Operator::Remainder => prev % current,
        };

        self.current_operand = format::stringify(result);
        self.operation = None;
        self.previous_operand.clear();
        self.should_reset_screen = true;
        Compute::Evaluated
    }

    /// Drops the last character of the current operand. `"0"` stays `"0"`;
    /// a single remaining character resets to `"0"`.
    pub fn delete_last(&mut self) {
        if self.current_operand == "0" {
            return;
        }
        if self.current_operand.len() == 1 {
            self.current_operand = "0".to_string();
        } else {
            self.current_operand.pop();
        }
    }

    /// Dispatches a key event to the matching transition.
    pub fn press(&mut self, key: Key) -> Compute {
        match key {
            Key::Digit(c) => {
                self.append_digit(c);
                Compute::Noop
            }
            Key::Operator(op) => self.choose_operation(op),
            Key::Equals => self.compute(),
            Key::Delete => {
                self.delete_last();
                Compute::Noop
            }
            Key::Clear => {
                self.clear();
                Compute::Noop
            }
        }
    }

    /// Raw current operand string (unformatted).
    pub fn current_operand(&self) -> &str {
        &self.current_operand
    }

    /// Formatted current operand for the main display line.
    pub fn current_display(&self) -> String {
        format::format_operand(&self.current_operand)
    }

    /// Formatted previous operand plus operator symbol for the upper display
    /// line; empty when no operation is pending.
    pub fn pending_display(&self) -> String {
        match self.operation {
            Some(op) => format!(
                "{} {}",
                format::format_operand(&self.previous_operand),
                op.symbol()
            ),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_all(calc: &mut Calculator, keys: &str) -> Vec<Compute> {
        keys.chars()
            .filter_map(Key::from_char)
            .map(|k| calc.press(k))
            .collect()
    }

    #[test]
    fn append_collapses_leading_zero() {
        let mut calc = Calculator::new();
        calc.append_digit('0');
        assert_eq!(calc.current_operand(), "0");
        calc.append_digit('7');
        assert_eq!(calc.current_operand(), "7");
        calc.append_digit('2');
        assert_eq!(calc.current_operand(), "72");
    }

    #[test]
    fn append_rejects_second_decimal_point() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "1.5");
        calc.append_digit('.');
        assert_eq!(calc.current_operand(), "1.5");
        calc.append_digit('2');
        assert_eq!(calc.current_operand(), "1.52");
    }

    #[test]
    fn append_dot_onto_zero_keeps_zero() {
        let mut calc = Calculator::new();
        calc.append_digit('.');
        assert_eq!(calc.current_operand(), "0.");
        calc.append_digit('5');
        assert_eq!(calc.current_operand(), "0.5");
    }

    #[test]
    fn append_ignores_invalid_characters() {
        let mut calc = Calculator::new();
        calc.append_digit('x');
        calc.append_digit(' ');
        assert_eq!(calc.current_operand(), "0");
    }

    #[test]
    fn digit_after_compute_overwrites_screen() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "2+3=");
        assert_eq!(calc.current_operand(), "5");
        calc.append_digit('9');
        assert_eq!(calc.current_operand(), "9");
    }

    #[test]
    fn compute_without_operation_is_noop() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "42");
        assert_eq!(calc.compute(), Compute::Noop);
        assert_eq!(calc.compute(), Compute::Noop);
        assert_eq!(calc.current_operand(), "42");
    }

    #[test]
    fn compute_is_idempotent_after_evaluation() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "6*7=");
        assert_eq!(calc.current_operand(), "42");
        assert_eq!(calc.compute(), Compute::Noop);
        assert_eq!(calc.current_operand(), "42");
    }

    #[test]
    fn operator_chaining_evaluates_left_to_right() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "5+3*2=");
        // (5 + 3) * 2, not 5 + (3 * 2).
        assert_eq!(calc.current_operand(), "16");
    }

    #[test]
    fn chaining_shows_intermediate_result() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "5+3*");
        assert_eq!(calc.pending_display(), "8 \u{00d7}");
        // The intermediate result moved into the previous operand; the
        // current operand is empty until the next digit.
        assert_eq!(calc.current_operand(), "");
    }

    #[test]
    fn division_by_zero_resets_state() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "8/0");
        assert_eq!(calc.compute(), Compute::DivisionByZero);
        assert_eq!(calc, Calculator::new());
        assert_eq!(calc.current_operand(), "0");
        assert_eq!(calc.pending_display(), "");
    }

    #[test]
    fn division_produces_fractional_result() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "7/2=");
        assert_eq!(calc.current_operand(), "3.5");
    }

    #[test]
    fn remainder_is_truncated() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "7%4=");
        assert_eq!(calc.current_operand(), "3");

        let mut calc = Calculator::new();
        press_all(&mut calc, "7.5%2=");
        assert_eq!(calc.current_operand(), "1.5");
    }

    #[test]
    fn subtraction_can_go_negative() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "3-10=");
        assert_eq!(calc.current_operand(), "-7");
    }

    #[test]
    fn delete_last_edge_cases() {
        let mut calc = Calculator::new();
        calc.delete_last();
        assert_eq!(calc.current_operand(), "0");

        calc.append_digit('7');
        calc.delete_last();
        assert_eq!(calc.current_operand(), "0");

        press_all(&mut calc, "12");
        calc.delete_last();
        assert_eq!(calc.current_operand(), "1");
    }

    #[test]
    fn choose_operation_sets_pending_display() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "1234+");
        assert_eq!(calc.pending_display(), "1,234 +");
        assert_eq!(calc.current_display(), "");
    }

    #[test]
    fn operator_symbols() {
        assert_eq!(Operator::Add.symbol(), "+");
        assert_eq!(Operator::Subtract.symbol(), "−");
        assert_eq!(Operator::Multiply.symbol(), "×");
        assert_eq!(Operator::Divide.symbol(), "÷");
        assert_eq!(Operator::Remainder.symbol(), "%");
    }

    #[test]
    fn clear_resets_everything() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "12+34");
        calc.clear();
        assert_eq!(calc, Calculator::new());
    }
}
