//! Console formatting helpers: fixed-point numbers, aligned columns and
//! thousands grouping.

/// Width of every table column.
pub const COLUMN_WIDTH: usize = 20;

/// Renders `value` with exactly `precision` decimal places.
///
/// ```
/// use wallet_basics::format::fixed;
/// assert_eq!(fixed(0.01, 2), "0.01");
/// assert_eq!(fixed(0.01, 8), "0.01000000");
/// ```
pub fn fixed(value: f64, precision: usize) -> String {
    format!("{:.*}", precision, value)
}

/// Right-aligns `cell` in a column of `COLUMN_WIDTH`.
///
/// Wider cells are printed in full and push the rest of the row right.
pub fn column(cell: &str) -> String {
    format!("{:>width$}", cell, width = COLUMN_WIDTH)
}

/// Concatenates cells into one row of right-aligned columns.
pub fn table_row<S: AsRef<str>>(cells: &[S]) -> String {
    cells.iter().map(|cell| column(cell.as_ref())).collect()
}

/// Groups digits in threes with commas, e.g. `1000000` -> `1,000,000`.
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if n < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}
