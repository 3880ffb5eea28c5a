// Output formatting: terminal display of signatures and guesses.

pub mod terminal;

/// Format a feature value for tables: fixed width, four decimals.
pub fn format_value(value: f64) -> String {
    format!("{value:>8.4}")
}
