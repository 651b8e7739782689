//! Parsing and generating tracer input.
//!
//! Arrays are typed as comma-separated integers, e.g. `"7, 3, 2, 16"`.
//! Whitespace around tokens and empty tokens (`"1,,2,"`) are ignored.

use rand::Rng;
use thiserror::Error;

/// Smallest value `random_array` draws.
pub const RANDOM_MIN: i64 = 1;
/// Largest value `random_array` draws.
pub const RANDOM_MAX: i64 = 25;

/// Error returned when textual input cannot be turned into an array.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// A token was not an integer. `position` counts tokens from 0.
    #[error("invalid number {token:?} at position {position}")]
    InvalidNumber { position: usize, token: String },

    /// A non-empty array was required but the input held no numbers.
    #[error("array must not be empty")]
    Empty,
}

/// Parse a comma-separated list of integers. Empty text yields an empty array.
pub fn parse_array(text: &str) -> Result<Vec<i64>, InputError> {
    let mut values = Vec::new();
    for (position, raw) in text.split(',').enumerate() {
        let token = raw.trim();
        if token.is_empty() {
            continue;
        }
        let value = token.parse::<i64>().map_err(|_| InputError::InvalidNumber {
            position,
            token: token.to_string(),
        })?;
        values.push(value);
    }
    return Ok(values);
}

/// Like [`parse_array`], but rejects input without any numbers.
pub fn parse_nonempty_array(text: &str) -> Result<Vec<i64>, InputError> {
    let values = parse_array(text)?;
    if values.is_empty() {
        return Err(InputError::Empty);
    }
    return Ok(values);
}

/// Draw `size` values uniformly from `RANDOM_MIN..=RANDOM_MAX`.
pub fn random_array<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Vec<i64> {
    return (0..size).map(|_| rng.gen_range(RANDOM_MIN..=RANDOM_MAX)).collect();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn parses_with_whitespace_and_gaps() {
        assert_eq!(parse_array(" 7, 3 ,2,, 16, "), Ok(vec![7, 3, 2, 16]));
        assert_eq!(parse_array("-4,0"), Ok(vec![-4, 0]));
    }

    #[test]
    fn empty_text_is_an_empty_array() {
        assert_eq!(parse_array(""), Ok(vec![]));
        assert_eq!(parse_array("  ,  "), Ok(vec![]));
    }

    #[test]
    fn rejects_non_numeric_token() {
        let err = parse_array("1, two, 3").unwrap_err();
        assert_eq!(
            err,
            InputError::InvalidNumber { position: 1, token: "two".to_string() }
        );
        assert_eq!(err.to_string(), "invalid number \"two\" at position 1");
    }

    #[test]
    fn rejects_floats() {
        assert!(matches!(parse_array("1.5"), Err(InputError::InvalidNumber { .. })));
    }

    #[test]
    fn nonempty_rejects_blank() {
        assert_eq!(parse_nonempty_array(" "), Err(InputError::Empty));
        assert_eq!(parse_nonempty_array("4"), Ok(vec![4]));
    }

    #[test]
    fn random_array_is_seeded_and_bounded() {
        let a = random_array(&mut StdRng::seed_from_u64(7), 64);
        let b = random_array(&mut StdRng::seed_from_u64(7), 64);
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.iter().all(|v| (RANDOM_MIN..=RANDOM_MAX).contains(v)));
    }
}
