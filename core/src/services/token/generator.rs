//! Random token generator

use async_trait::async_trait;
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng};

use ot_shared::config::token::TokenRange;

use crate::domain::entities::token::Token;
use crate::errors::GenerationError;

use super::traits::TokenGenerator;

const FULL_MIN: u32 = 100_000;
const FULL_MAX: u32 = 999_999;
const LEGACY_MIN: u32 = 111_111;
const LEGACY_CEILING: u32 = 999_999;

/// Lower bound and width of the band for `range`
///
/// `Full` covers 100000..=999999. `Legacy` covers 111111..=999998, because the
/// historical formula scaled by `999999 - 111111` and never reached its ceiling.
pub fn token_band(range: TokenRange) -> (u32, u32) {
    match range {
        TokenRange::Full => (FULL_MIN, FULL_MAX - FULL_MIN + 1),
        TokenRange::Legacy => (LEGACY_MIN, LEGACY_CEILING - LEGACY_MIN),
    }
}

/// Map a uniform draw in `[0, 1)` onto the band for `range`
pub fn scale_unit(unit: f64, range: TokenRange) -> u32 {
    let (low, span) = token_band(range);
    let offset = (unit.clamp(0.0, 1.0) * f64::from(span)).floor() as u32;
    low + offset.min(span - 1)
}

/// Token generator backed by a per-call RNG seeded from the operating system
///
/// Not suitable where tokens must resist prediction; it only guarantees
/// six-digit numeric output within the configured band.
#[derive(Debug, Clone, Default)]
pub struct RandomTokenGenerator {
    range: TokenRange,
}

impl RandomTokenGenerator {
    /// Create a generator drawing from `range`
    pub fn new(range: TokenRange) -> Self {
        Self { range }
    }

    /// The band this generator draws from
    pub fn range(&self) -> TokenRange {
        self.range
    }
}

#[async_trait]
impl TokenGenerator for RandomTokenGenerator {
    async fn generate(&self) -> Result<Token, GenerationError> {
        let mut rng = StdRng::from_rng(OsRng).map_err(|e| {
            tracing::error!(
                error = %e,
                event = "random_source_failed",
                "Failed to seed token RNG from the operating system"
            );
            GenerationError::RandomSource {
                message: e.to_string(),
            }
        })?;

        let unit: f64 = rng.gen();
        let token = Token::from_number(scale_unit(unit, self.range))?;

        tracing::debug!(range = %self.range, event = "token_generated", "Generated one-time token");

        Ok(token)
    }
}
