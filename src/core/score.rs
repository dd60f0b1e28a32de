//! Guess scoring
//!
//! A score reports a guess as `xA yB`:
//! - A = digit correct in both value and position
//! - B = digit present in the secret but at a different position
//!
//! Digits absent from the secret count for neither.

use super::{Guess, Secret};
use std::fmt;

/// Feedback for one scored guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score {
    bulls: u8,
    cows: u8,
}

impl Score {
    /// A winning score (all four digits placed)
    pub const PERFECT: Self = Self { bulls: 4, cows: 0 };

    /// Score a guess against a secret
    ///
    /// For each position i holding digit d: if the secret holds d at
    /// position j, then i == j counts toward A, otherwise toward B.
    /// The digits of both sides are distinct, so no pool bookkeeping
    /// is needed.
    ///
    /// # Examples
    /// ```
    /// use guess_number::core::{Guess, Score, Secret};
    ///
    /// let secret = Secret::from_digits([7, 3, 9, 1]).unwrap();
    /// let guess = Guess::parse("3719").unwrap();
    ///
    /// let score = Score::calculate(&guess, &secret);
    /// assert_eq!((score.bulls(), score.cows()), (0, 4));
    /// ```
    #[must_use]
    pub fn calculate(guess: &Guess, secret: &Secret) -> Self {
        let mut bulls = 0;
        let mut cows = 0;

        for (i, &digit) in guess.digits().iter().enumerate() {
            if let Some(j) = secret.position_of(digit) {
                if i == j {
                    bulls += 1;
                } else {
                    cows += 1;
                }
            }
        }

        Self { bulls, cows }
    }

    /// Count of digits correct in value and position
    #[inline]
    #[must_use]
    pub const fn bulls(self) -> u8 {
        self.bulls
    }

    /// Count of digits correct in value only
    #[inline]
    #[must_use]
    pub const fn cows(self) -> u8 {
        self.cows
    }

    /// Whether the guess matched the secret exactly
    #[inline]
    #[must_use]
    pub const fn is_correct(self) -> bool {
        self.bulls == 4
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}A {}B", self.bulls, self.cows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret() -> Secret {
        Secret::from_digits([7, 3, 9, 1]).unwrap()
    }

    #[test]
    fn three_placed_one_absent() {
        // 7@0 and 3@1 and 1@3 are placed; 2 is not in the secret
        let score = Score::calculate(&Guess::parse("7321").unwrap(), &secret());
        assert_eq!(score.bulls(), 3);
        assert_eq!(score.cows(), 0);
        assert!(!score.is_correct());
    }

    #[test]
    fn all_present_none_placed() {
        let score = Score::calculate(&Guess::parse("3719").unwrap(), &secret());
        assert_eq!(score.bulls(), 0);
        assert_eq!(score.cows(), 4);
        assert!(!score.is_correct());
    }

    #[test]
    fn exact_match_is_perfect() {
        let score = Score::calculate(&Guess::parse("7391").unwrap(), &secret());
        assert_eq!(score, Score::PERFECT);
        assert_eq!(score.bulls(), 4);
        assert_eq!(score.cows(), 0);
        assert!(score.is_correct());
    }

    #[test]
    fn absent_digits_count_nothing() {
        // None of 2, 4, 5, 6 appear in 7391
        let score = Score::calculate(&Guess::parse("2456").unwrap(), &secret());
        assert_eq!(score.bulls(), 0);
        assert_eq!(score.cows(), 0);
    }

    #[test]
    fn mixed_placed_and_misplaced() {
        // 7@0 placed; 9@1 misplaced; 3@2 misplaced; 1@3 placed
        let score = Score::calculate(&Guess::parse("7931").unwrap(), &secret());
        assert_eq!(score.bulls(), 2);
        assert_eq!(score.cows(), 2);
    }

    #[test]
    fn perfect_constant() {
        assert!(Score::PERFECT.is_correct());
        assert_eq!(Score::PERFECT.bulls(), 4);
        assert_eq!(Score::PERFECT.cows(), 0);
    }

    #[test]
    fn display_format() {
        let score = Score::calculate(&Guess::parse("7931").unwrap(), &secret());
        assert_eq!(format!("{score}"), "2A 2B");
    }
}
