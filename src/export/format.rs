use nalgebra::DMatrix;

/// Format `value` with `digits` significant digits, `%g` style.
///
/// Trailing zeros are dropped and scientific notation is used when the
/// exponent is below -4 or at least `digits`.
///
/// ```
/// use eigenrank::export::format_significant;
///
/// assert_eq!("0.25", format_significant(0.25, 2));
/// assert_eq!("0.12", format_significant(0.123, 2));
/// assert_eq!("1.2e+02", format_significant(123.0, 2));
/// ```
pub fn format_significant(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }

    let digits = digits.max(1);
    let sci = format!("{:.*e}", digits - 1, value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= digits as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    } else {
        let decimals = (digits as i32 - 1 - exp).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Lay out a matrix as an aligned block with bracket glyphs down the sides.
///
/// The first line starts with `prefix` and the following lines are indented
/// to match, e.g.
///
/// ```text
/// tournmat = ⎡0  1⎤
///            ⎣2  0⎦
/// ```
pub fn format_matrix<F>(prefix: &str, matrix: &DMatrix<f64>, cell: F) -> String
where
    F: Fn(f64) -> String,
{
    let (rows, cols) = matrix.shape();
    if rows == 0 || cols == 0 {
        return format!("{prefix}[]");
    }

    let cells: Vec<Vec<String>> = (0..rows)
        .map(|i| (0..cols).map(|j| cell(matrix[(i, j)])).collect())
        .collect();
    let widths: Vec<usize> = (0..cols)
        .map(|j| cells.iter().map(|row| row[j].chars().count()).max().unwrap_or(0))
        .collect();
    let indent = " ".repeat(prefix.chars().count());

    let mut lines = Vec::with_capacity(rows);
    for (i, row) in cells.iter().enumerate() {
        let (open, close) = match i {
            _ if rows == 1 => ('[', ']'),
            0 => ('⎡', '⎤'),
            _ if i == rows - 1 => ('⎣', '⎦'),
            _ => ('⎢', '⎥'),
        };
        let body = row
            .iter()
            .zip(&widths)
            .map(|(c, &w)| format!("{c:>w$}"))
            .collect::<Vec<_>>()
            .join("  ");
        let lead = if i == 0 { prefix } else { indent.as_str() };
        lines.push(format!("{lead}{open}{body}{close}"));
    }
    lines.join("\n")
}
