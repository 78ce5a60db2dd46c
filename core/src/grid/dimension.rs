use std::fmt;

/// Axis of a matrix-entry grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl Axis {
    pub fn as_str(self) -> &'static str {
        match self {
            Axis::Row => "row",
            Axis::Column => "column",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of one dimension stepper: the displayed text plus the last value
/// that passed validation.
#[derive(Debug, Clone)]
pub struct DimensionModel {
    axis: Axis,
    text: String,
    last_valid: usize,
    max: usize,
}

impl DimensionModel {
    pub fn new(axis: Axis, max: usize) -> Self {
        // a max below 1 would make the clamp range empty
        let mut model = Self {
            axis,
            text: "1".to_string(),
            last_valid: 1,
            max: max.max(1),
        };
        model.validate();
        model
    }

    /// Parses the displayed text, falls back to 1 when unparseable, clamps
    /// inclusively to `[1, max]`, and writes the result back. Idempotent.
    pub fn validate(&mut self) -> usize {
        let value = match self.text.trim().parse::<i64>() {
            Ok(parsed) => parsed.clamp(1, self.max as i64) as usize,
            Err(_) => 1,
        };
        self.text = value.to_string();
        self.last_valid = value;
        value
    }

    /// Trusted overwrite used by the saved-snapshot path; skips the clamp.
    pub fn restore(&mut self, value: usize) {
        self.text = value.to_string();
        self.last_valid = value;
    }

    pub fn set_text(&mut self, text: String) {
        self.text = text;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn last_valid(&self) -> usize {
        self.last_valid
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dimension(max: usize) -> DimensionModel {
        DimensionModel::new(Axis::Row, max)
    }

    #[test]
    fn validate_clamps_into_declared_range() {
        let cases = [("0", 1), ("-3", 1), ("5", 5), ("17", 10), ("10", 10)];
        for (typed, expected) in cases {
            let mut dim = dimension(10);
            dim.set_text(typed.to_string());
            assert_eq!(dim.validate(), expected, "typed {:?}", typed);
            assert_eq!(dim.text(), expected.to_string());
            assert_eq!(dim.last_valid(), expected);
        }
    }

    #[test]
    fn unparseable_text_resets_to_one() {
        for typed in ["abc", "", "3.5", "2x"] {
            let mut dim = dimension(10);
            dim.set_text(typed.to_string());
            assert_eq!(dim.validate(), 1, "typed {:?}", typed);
            assert_eq!(dim.text(), "1");
        }
    }

    #[test]
    fn validate_is_idempotent() {
        let mut dim = dimension(4);
        dim.set_text("9".to_string());
        let first = dim.validate();
        let second = dim.validate();
        assert_eq!(first, second);
        assert_eq!(dim.text(), "4");
    }

    #[test]
    fn restore_bypasses_the_clamp() {
        let mut dim = dimension(10);
        dim.restore(12);
        assert_eq!(dim.last_valid(), 12);
        assert_eq!(dim.text(), "12");
        // the next ordinary read re-clamps
        assert_eq!(dim.validate(), 10);
    }
}
