use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatingError {
    #[error("rating must be between 0 and {max}, got {value}")]
    OutOfRange { value: u8, max: u8 },
}

/// Personal star rating, 0 (unrated) through 5.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[serde(try_from = "u8", into = "u8")]
pub struct StarRating(u8);

impl StarRating {
    pub const MAX: u8 = 5;
    pub const UNRATED: StarRating = StarRating(0);

    pub fn new(value: u8) -> Result<Self, RatingError> {
        if value > Self::MAX {
            return Err(RatingError::OutOfRange { value, max: Self::MAX });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_rated(self) -> bool {
        self.0 > 0
    }

    /// Filled and empty stars, e.g. "★★★☆☆".
    pub fn stars(self) -> String {
        let filled = self.0 as usize;
        let empty = (Self::MAX as usize).saturating_sub(filled);
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }
}

impl TryFrom<u8> for StarRating {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StarRating> for u8 {
    fn from(rating: StarRating) -> Self {
        rating.0
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_full_range() {
        for value in 0..=5 {
            assert_eq!(StarRating::new(value).unwrap().value(), value);
        }
    }

    #[test]
    fn test_rejects_out_of_range() {
        let err = StarRating::new(6).unwrap_err();
        assert_eq!(err, RatingError::OutOfRange { value: 6, max: 5 });
        assert!(serde_json::from_str::<StarRating>("9").is_err());
    }

    #[test]
    fn test_unrated_is_default() {
        assert_eq!(StarRating::default(), StarRating::UNRATED);
        assert!(!StarRating::UNRATED.is_rated());
    }

    #[test]
    fn test_stars_and_display() {
        let rating = StarRating::new(3).unwrap();
        assert_eq!(rating.stars(), "★★★☆☆");
        assert_eq!(rating.to_string(), "3/5");
    }
}
