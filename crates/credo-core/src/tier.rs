//! Static score-to-tier mapping. Tier is always recomputed from the current
//! score, never stored.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::profile::Score;

/// A named credibility band with its base conversion multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub name: String,
    /// Inclusive lower bound.
    pub min: u8,
    /// Inclusive upper bound.
    pub max: u8,
    /// Base XP-to-minutes multiplier for scores in this band.
    pub multiplier: f64,
}

impl Tier {
    pub fn contains(&self, score: Score) -> bool {
        (self.min..=self.max).contains(&score.value())
    }
}

/// Ordered, non-overlapping tier bands covering the full [0, 100] range.
///
/// Construction validates coverage, so `resolve` is total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Tier>", into = "Vec<Tier>")]
pub struct TierTable {
    bands: Vec<Tier>,
}

impl TierTable {
    /// Build a table from bands, validating that they cover [0, 100]
    /// contiguously in ascending order with positive multipliers.
    pub fn new(bands: Vec<Tier>) -> Result<Self, ConfigError> {
        if bands.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "tiers".to_string(),
                message: "at least one tier band is required".to_string(),
            });
        }

        let mut expected_min = Score::MIN;
        for (i, band) in bands.iter().enumerate() {
            if band.min != expected_min {
                return Err(ConfigError::ValidationFailed {
                    field: format!("tiers.{}", band.name),
                    message: format!(
                        "band starts at {} but {} is uncovered",
                        band.min, expected_min
                    ),
                });
            }
            if band.max < band.min {
                return Err(ConfigError::ValidationFailed {
                    field: format!("tiers.{}", band.name),
                    message: "band upper bound is below its lower bound".to_string(),
                });
            }
            if band.multiplier <= 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: format!("tiers.{}", band.name),
                    message: "multiplier must be positive".to_string(),
                });
            }
            if band.max == Score::MAX {
                if i + 1 != bands.len() {
                    return Err(ConfigError::ValidationFailed {
                        field: format!("tiers.{}", band.name),
                        message: "band reaches the maximum score but is not last".to_string(),
                    });
                }
                break;
            }
            expected_min = band.max + 1;
        }

        let last = bands.last().map(|b| b.max).unwrap_or(0);
        if last != Score::MAX {
            return Err(ConfigError::ValidationFailed {
                field: "tiers".to_string(),
                message: format!("bands end at {} instead of {}", last, Score::MAX),
            });
        }

        Ok(Self { bands })
    }

    /// Resolve the tier for a score. Total over [0, 100] by construction.
    pub fn resolve(&self, score: Score) -> &Tier {
        self.bands
            .iter()
            .find(|b| b.contains(score))
            .unwrap_or_else(|| self.bands.last().expect("validated table is non-empty"))
    }

    /// The bands in ascending score order.
    pub fn bands(&self) -> &[Tier] {
        &self.bands
    }
}

impl Default for TierTable {
    /// The stock four-band table.
    fn default() -> Self {
        let band = |name: &str, min: u8, max: u8, multiplier: f64| Tier {
            name: name.to_string(),
            min,
            max,
            multiplier,
        };
        Self {
            bands: vec![
                band("Critical", 0, 59, 0.5),
                band("Fair", 60, 79, 1.0),
                band("Good", 80, 94, 1.15),
                band("Excellent", 95, 100, 1.3),
            ],
        }
    }
}

impl TryFrom<Vec<Tier>> for TierTable {
    type Error = ConfigError;

    fn try_from(bands: Vec<Tier>) -> Result<Self, Self::Error> {
        Self::new(bands)
    }
}

impl From<TierTable> for Vec<Tier> {
    fn from(table: TierTable) -> Self {
        table.bands
    }
}
