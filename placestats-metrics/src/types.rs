//! Public configuration types for the metrics engine.
#![forbid(unsafe_code)]

use crate::EngineConfigError;

/// Number of places kept in the popularity ranking by default.
pub const DEFAULT_TOP_N: usize = 10;

/// Tunable weights of the place popularity score.
///
/// The score is
/// `favourites * nb / max_nb + rating * avg_note / rating_scale + recency * week / max_nb`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Weight of the favourite count relative to the most favourited place.
    pub favourites: f64,
    /// Weight of the average rating.
    pub rating: f64,
    /// Weight of the current-week favourite count.
    pub recency: f64,
    /// Upper bound of the rating scale.
    pub rating_scale: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            favourites: 0.55,
            rating: 0.30,
            recency: 0.15,
            rating_scale: 5.0,
        }
    }
}

impl ScoreWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`EngineConfigError::InvalidWeights`] when a weight is negative
    /// or not finite, or when every weight is zero, and
    /// [`EngineConfigError::InvalidRatingScale`] when the rating scale is not
    /// a positive finite number.
    #[expect(
        clippy::float_arithmetic,
        reason = "validation sums weights to ensure a non-zero total"
    )]
    pub fn validate(self) -> Result<Self, EngineConfigError> {
        let weights = [self.favourites, self.rating, self.recency];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(EngineConfigError::InvalidWeights);
        }
        if weights.iter().sum::<f64>() <= 0.0 {
            return Err(EngineConfigError::InvalidWeights);
        }
        if !self.rating_scale.is_finite() || self.rating_scale <= 0.0 {
            return Err(EngineConfigError::InvalidRatingScale);
        }
        Ok(self)
    }
}

/// Settings of a [`MetricsEngine`](crate::MetricsEngine).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Popularity score weights.
    pub weights: ScoreWeights,
    /// Maximum number of places kept in the ranking.
    pub top_n: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl EngineConfig {
    /// Replace the ranking size.
    #[must_use]
    pub const fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Validate the configuration and return a copy.
    ///
    /// # Errors
    /// Propagates [`ScoreWeights::validate`] failures and returns
    /// [`EngineConfigError::ZeroTopN`] when `top_n` is zero.
    pub fn validate(self) -> Result<Self, EngineConfigError> {
        self.weights.validate()?;
        if self.top_n == 0 {
            return Err(EngineConfigError::ZeroTopN);
        }
        Ok(self)
    }
}
