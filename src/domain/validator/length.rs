//! Length bound validators

use super::{ValidationError, Validator};

/// How the length of a value is measured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    /// Size of the UTF-8 encoding, so a CJK character counts as 3
    Bytes,
    /// Number of Unicode scalar values
    Chars,
}

impl Measure {
    fn measure(&self, value: &str) -> usize {
        match self {
            Self::Bytes => value.len(),
            Self::Chars => value.chars().count(),
        }
    }
}

/// Which side of the limit is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// Rejects `actual < limit`
    Min,
    /// Rejects `actual > limit`
    Max,
}

impl Comparison {
    fn violates(&self, actual: usize, limit: usize) -> bool {
        match self {
            Self::Min => actual < limit,
            Self::Max => actual > limit,
        }
    }

    fn error(&self, limit: usize, actual: usize) -> ValidationError {
        match self {
            Self::Min => ValidationError::too_short(limit, actual),
            Self::Max => ValidationError::too_long(limit, actual),
        }
    }
}

/// Bounds the length of a string value.
///
/// `LengthBound::min_bytes(n)` is the MinByteLength rule and
/// `LengthBound::max_bytes(n)` the MaxByteLength rule; both measure the
/// UTF-8 encoded size. `max_chars` covers columns bounded by character count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBound {
    limit: usize,
    measure: Measure,
    comparison: Comparison,
}

impl LengthBound {
    pub const fn new(limit: usize, measure: Measure, comparison: Comparison) -> Self {
        Self {
            limit,
            measure,
            comparison,
        }
    }

    /// Reject values whose UTF-8 encoding is shorter than `limit` bytes
    pub const fn min_bytes(limit: usize) -> Self {
        Self::new(limit, Measure::Bytes, Comparison::Min)
    }

    /// Reject values whose UTF-8 encoding is longer than `limit` bytes
    pub const fn max_bytes(limit: usize) -> Self {
        Self::new(limit, Measure::Bytes, Comparison::Max)
    }

    /// Reject values with more than `limit` characters
    pub const fn max_chars(limit: usize) -> Self {
        Self::new(limit, Measure::Chars, Comparison::Max)
    }
}

impl Validator<str> for LengthBound {
    fn check(&self, value: &str) -> Result<(), ValidationError> {
        let actual = self.measure.measure(value);

        if self.comparison.violates(actual, self.limit) {
            return Err(self.comparison.error(self.limit, actual));
        }

        Ok(())
    }
}
