//! Hidden answer representation
//!
//! A Secret stores the 4 hidden digits along with a digit-to-position index
//! for O(1) lookup during scoring.

use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashMap;
use std::fmt;

/// The hidden answer: 4 distinct digits from 1-9 in a fixed order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secret {
    digits: [u8; 4],
    positions: FxHashMap<u8, usize>,
}

/// Error type for invalid secrets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretError {
    InvalidDigit(u8),
    RepeatedDigit(u8),
}

impl fmt::Display for SecretError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDigit(digit) => {
                write!(f, "Secret digits must be in 1-9, got {digit}")
            }
            Self::RepeatedDigit(digit) => write!(f, "Digit {digit} appears more than once"),
        }
    }
}

impl std::error::Error for SecretError {}

impl Secret {
    /// Draw a fresh uniform secret
    ///
    /// Shuffles the pool {1..9} and takes the first four digits in order,
    /// so all 9*8*7*6 = 3024 ordered secrets are equally likely.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut pool: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        pool.shuffle(rng);

        Self::from_parts([pool[0], pool[1], pool[2], pool[3]])
    }

    /// Create a secret from explicit digits
    ///
    /// # Errors
    /// Returns `SecretError` if any digit is outside 1-9 or repeats.
    ///
    /// # Examples
    /// ```
    /// use guess_number::core::Secret;
    ///
    /// let secret = Secret::from_digits([7, 3, 9, 1]).unwrap();
    /// assert_eq!(secret.position_of(9), Some(2));
    ///
    /// assert!(Secret::from_digits([0, 3, 9, 1]).is_err());
    /// assert!(Secret::from_digits([7, 7, 9, 1]).is_err());
    /// ```
    pub fn from_digits(digits: [u8; 4]) -> Result<Self, SecretError> {
        for &digit in &digits {
            if !(1..=9).contains(&digit) {
                return Err(SecretError::InvalidDigit(digit));
            }
        }

        for i in 0..4 {
            for j in (i + 1)..4 {
                if digits[i] == digits[j] {
                    return Err(SecretError::RepeatedDigit(digits[i]));
                }
            }
        }

        Ok(Self::from_parts(digits))
    }

    /// Build a secret from digits already known to be 4 distinct values in 1-9
    pub(crate) fn from_parts(digits: [u8; 4]) -> Self {
        let mut positions = FxHashMap::default();
        for (i, &digit) in digits.iter().enumerate() {
            positions.insert(digit, i);
        }

        Self { digits, positions }
    }

    /// Get the hidden digits in order
    #[inline]
    #[must_use]
    pub const fn digits(&self) -> &[u8; 4] {
        &self.digits
    }

    /// Get the position (0-3) of a digit, if present
    #[inline]
    #[must_use]
    pub fn position_of(&self, digit: u8) -> Option<usize> {
        self.positions.get(&digit).copied()
    }

    /// Check whether the secret contains a digit
    #[inline]
    #[must_use]
    pub fn contains(&self, digit: u8) -> bool {
        self.positions.contains_key(&digit)
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.digits {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn random_secret_is_four_distinct_digits() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let secret = Secret::random(&mut rng);
            let digits = secret.digits();

            assert!(digits.iter().all(|d| (1..=9).contains(d)));

            let mut unique = digits.to_vec();
            unique.sort_unstable();
            unique.dedup();
            assert_eq!(unique.len(), 4);
        }
    }

    #[test]
    fn random_secret_is_deterministic_per_seed() {
        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);

        assert_eq!(Secret::random(&mut rng1), Secret::random(&mut rng2));
    }

    #[test]
    fn from_digits_valid() {
        let secret = Secret::from_digits([7, 3, 9, 1]).unwrap();
        assert_eq!(secret.digits(), &[7, 3, 9, 1]);
    }

    #[test]
    fn from_digits_rejects_out_of_range() {
        assert!(matches!(
            Secret::from_digits([0, 3, 9, 1]),
            Err(SecretError::InvalidDigit(0))
        ));
        assert!(matches!(
            Secret::from_digits([7, 3, 10, 1]),
            Err(SecretError::InvalidDigit(10))
        ));
    }

    #[test]
    fn from_digits_rejects_repeats() {
        assert!(matches!(
            Secret::from_digits([7, 3, 7, 1]),
            Err(SecretError::RepeatedDigit(7))
        ));
    }

    #[test]
    fn position_lookup() {
        let secret = Secret::from_digits([7, 3, 9, 1]).unwrap();

        assert_eq!(secret.position_of(7), Some(0));
        assert_eq!(secret.position_of(3), Some(1));
        assert_eq!(secret.position_of(9), Some(2));
        assert_eq!(secret.position_of(1), Some(3));
        assert_eq!(secret.position_of(5), None);

        assert!(secret.contains(9));
        assert!(!secret.contains(2));
    }

    #[test]
    fn display_concatenates_digits() {
        let secret = Secret::from_digits([7, 3, 9, 1]).unwrap();
        assert_eq!(format!("{secret}"), "7391");
    }
}
