//! Helpers for parsing user-entered board dimensions and squares.
//!
//! Prompts use the chess-adjacent convention: squares are entered as
//! "column row" pairs, 1-based, counted from the bottom-left corner,
//! while the core works in 0-based (row, column) coordinates. The
//! conversion happens here so the core never sees a 1-based value.

/// Parses board dimensions entered as "columns rows".
///
/// Both values must be positive integers separated by whitespace.
///
/// # Returns
/// `(height, width)` on success, or an error message describing the first
/// problem found.
///
/// # Examples
/// ```
/// use knights_tour::utils::parse_dimensions;
///
/// assert_eq!(parse_dimensions("8 6"), Ok((6, 8)));
/// assert!(parse_dimensions("8").is_err());
/// assert!(parse_dimensions("0 5").is_err());
/// assert!(parse_dimensions("eight six").is_err());
/// ```
pub fn parse_dimensions(input: &str) -> Result<(usize, usize), String> {
    let (columns, rows) = parse_pair(input)?;
    if columns == 0 || rows == 0 {
        return Err("dimensions must be positive".to_string());
    }
    Ok((rows, columns))
}

/// Parses a board square entered as "column row", 1-based.
///
/// The square is checked against the board bounds.
///
/// # Returns
/// The 0-based `(row, column)` pair the core expects, or an error message.
///
/// # Examples
/// ```
/// use knights_tour::utils::parse_square;
///
/// assert_eq!(parse_square("1 1", 5, 5), Ok((0, 0)));
/// assert_eq!(parse_square("3 2", 5, 5), Ok((1, 2)));
/// assert!(parse_square("6 1", 5, 5).is_err());
/// assert!(parse_square("0 1", 5, 5).is_err());
/// ```
pub fn parse_square(input: &str, height: usize, width: usize) -> Result<(usize, usize), String> {
    let (column, row) = parse_pair(input)?;
    if column == 0 || column > width || row == 0 || row > height {
        return Err(format!(
            "square ({} {}) is outside the {}x{} board",
            column, row, height, width
        ));
    }
    Ok((row - 1, column - 1))
}

fn parse_pair(input: &str) -> Result<(usize, usize), String> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.len() != 2 {
        return Err(format!("expected two numbers, found {}", parts.len()));
    }
    let first = parts[0]
        .parse::<usize>()
        .map_err(|_| format!("'{}' is not a valid number", parts[0]))?;
    let second = parts[1]
        .parse::<usize>()
        .map_err(|_| format!("'{}' is not a valid number", parts[1]))?;
    Ok((first, second))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dimensions_flips_to_height_width() {
        // Input is "columns rows"; the result is (height, width).
        assert_eq!(parse_dimensions("4 3"), Ok((3, 4)));
        assert_eq!(parse_dimensions("  10   2 "), Ok((2, 10)));
    }

    #[test]
    fn test_parse_dimensions_rejects_zero() {
        assert!(parse_dimensions("0 3").is_err());
        assert!(parse_dimensions("3 0").is_err());
    }

    #[test]
    fn test_parse_dimensions_rejects_malformed_input() {
        assert!(parse_dimensions("").is_err());
        assert!(parse_dimensions("5").is_err());
        assert!(parse_dimensions("5 5 5").is_err());
        assert!(parse_dimensions("five 5").is_err());
        assert!(parse_dimensions("-3 5").is_err());
    }

    #[test]
    fn test_parse_square_converts_to_zero_based_row_column() {
        // "column row" 1-based becomes (row, column) 0-based.
        assert_eq!(parse_square("1 1", 5, 5), Ok((0, 0)));
        assert_eq!(parse_square("5 5", 5, 5), Ok((4, 4)));
        assert_eq!(parse_square("3 1", 5, 5), Ok((0, 2)));
        assert_eq!(parse_square("1 3", 5, 5), Ok((2, 0)));
    }

    #[test]
    fn test_parse_square_rejects_out_of_range() {
        assert!(parse_square("6 1", 5, 5).is_err());
        assert!(parse_square("1 6", 5, 5).is_err());
        assert!(parse_square("0 1", 5, 5).is_err());
        assert!(parse_square("1 0", 5, 5).is_err());
        // Rectangular bounds apply per axis: 4 columns, 3 rows.
        assert_eq!(parse_square("4 3", 3, 4), Ok((2, 3)));
        assert!(parse_square("3 4", 3, 4).is_err());
    }

    #[test]
    fn test_parse_square_rejects_malformed_input() {
        assert!(parse_square("", 5, 5).is_err());
        assert!(parse_square("1", 5, 5).is_err());
        assert!(parse_square("a b", 5, 5).is_err());
        assert!(parse_square("1 2 3", 5, 5).is_err());
    }
}
