//! Customer rating on a zero to five star scale.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Rating`].
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RatingError {
    /// The value is NaN or infinite.
    #[error("rating must be a finite number")]
    NotFinite,
    /// The value lies outside `0.0..=5.0`.
    #[error("rating must be between {min} and {max} (got {value})")]
    OutOfRange {
        value: f32,
        min: f32,
        max: f32,
    },
}

/// A product rating in `[0, 5]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct Rating(f32);

impl Rating {
    /// Lowest possible rating.
    pub const MIN: f32 = 0.0;
    /// Highest possible rating.
    pub const MAX: f32 = 5.0;

    /// Create a rating, rejecting values outside `[0, 5]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not finite or out of range.
    pub fn new(value: f32) -> Result<Self, RatingError> {
        if !value.is_finite() {
            return Err(RatingError::NotFinite);
        }
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(RatingError::OutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    /// Get the underlying value.
    #[must_use]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Number of filled stars to draw (the rating rounded down).
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // range checked in `new`
    pub fn full_stars(self) -> u8 {
        self.0.floor() as u8
    }
}

impl TryFrom<f32> for Rating {
    type Error = RatingError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for f32 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
