use crate::math::rational::{clean_token, format_rational, parse_rational, Rational};
use crate::prelude::{EntryError, EntryResult};
use ndarray::Array2;

/// Immutable matrix value derived from one grid's tokens, used only to
/// format the solver request.
#[derive(Debug, Clone)]
pub struct Matrix {
    rows: usize,
    columns: usize,
    entries: Array2<Rational>,
}

impl Matrix {
    /// Eagerly converts every raw token, failing on the first malformed one.
    pub fn from_tokens(rows: usize, columns: usize, tokens: &[Vec<String>]) -> EntryResult<Self> {
        let mut entries = Array2::from_elem((rows, columns), Rational::from_integer(0));
        for row in 0..rows {
            for column in 0..columns {
                let token = tokens
                    .get(row)
                    .and_then(|cells| cells.get(column))
                    .ok_or(EntryError::OutOfRange {
                        row,
                        column,
                        rows,
                        columns,
                    })?;
                entries[[row, column]] = parse_rational(&clean_token(token))?;
            }
        }
        Ok(Self {
            rows,
            columns,
            entries,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Canonical display strings, row-major.
    pub fn render(&self) -> Vec<Vec<String>> {
        (0..self.rows)
            .map(|row| {
                (0..self.columns)
                    .map(|column| format_rational(&self.entries[[row, column]]))
                    .collect()
            })
            .collect()
    }

    /// Nested-array literal for the solver query string, e.g. `[[1,2],[3,4]]`.
    pub fn request_literal(&self) -> String {
        let rows: Vec<String> = self
            .render()
            .into_iter()
            .map(|row| format!("[{}]", row.join(",")))
            .collect();
        format!("[{}]", rows.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }

    #[test]
    fn from_tokens_canonicalizes_entries() {
        let matrix = Matrix::from_tokens(2, 2, &tokens(&[&["1", "0.5"], &["2/4", "-3"]])).unwrap();
        assert_eq!(
            matrix.render(),
            vec![
                vec!["1".to_string(), "1/2".to_string()],
                vec!["1/2".to_string(), "-3".to_string()],
            ]
        );
    }

    #[test]
    fn request_literal_nests_rows() {
        let matrix = Matrix::from_tokens(2, 2, &tokens(&[&["1", "2"], &["3", "4"]])).unwrap();
        assert_eq!(matrix.request_literal(), "[[1,2],[3,4]]");

        let rhs = Matrix::from_tokens(2, 1, &tokens(&[&["5"], &["6"]])).unwrap();
        assert_eq!(rhs.request_literal(), "[[5],[6]]");
    }

    #[test]
    fn request_literal_keeps_canonical_fractions() {
        let matrix = Matrix::from_tokens(1, 2, &tokens(&[&["0.5", "1,5"]])).unwrap();
        assert_eq!(matrix.request_literal(), "[[1/2,3/2]]");
    }

    #[test]
    fn malformed_tokens_propagate() {
        assert!(Matrix::from_tokens(1, 1, &tokens(&[&["abc"]])).is_err());
    }

    #[test]
    fn missing_tokens_are_out_of_range() {
        let result = Matrix::from_tokens(2, 1, &tokens(&[&["1"]]));
        assert!(matches!(result, Err(EntryError::OutOfRange { row: 1, .. })));
    }
}
