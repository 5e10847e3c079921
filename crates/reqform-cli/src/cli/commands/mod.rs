//! CLI command handlers. Each command is in its own file for clarity.

mod calc;
mod check;
mod completions;
mod rules;
mod validate;

pub use calc::run_calc;
pub use check::run_check;
pub use completions::run_completions;
pub use rules::run_rules;
pub use validate::run_validate;
