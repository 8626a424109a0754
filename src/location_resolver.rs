//! Location Resolution Module
//!
//! Resolves a regency/province pair into current weather conditions by
//! walking a fixed, three-tier attempt list: the regency itself, then its
//! province, then the country-level default. Network and decode failures
//! both move to the next tier; anything else stops the walk. Either way the
//! only failure a caller sees is `Exhausted`, carrying the last error.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::models::{CurrentConditions, LocationQuery};
use crate::normalize::{normalize_province, normalize_regency};
use crate::weather::WeatherProvider;
use crate::CuacaError;

/// Which tier of the fallback chain produced the result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionTier {
    Regency,
    Province,
    Country,
}

impl Display for ResolutionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Regency => "regency",
            Self::Province => "province",
            Self::Country => "country",
        };
        f.write_str(label)
    }
}

/// One planned provider query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub tier: ResolutionTier,
    /// Name sent to the provider, already normalized
    pub query_name: String,
}

/// Successful resolution
#[derive(Debug, Clone)]
pub struct Resolution {
    pub conditions: CurrentConditions,
    pub tier: ResolutionTier,
    pub query_name: String,
    /// Number of provider calls made, including the successful one
    pub attempts: usize,
}

/// Service for resolving location queries
#[derive(Debug, Clone)]
pub struct LocationResolver {
    country_fallback: String,
}

impl Default for LocationResolver {
    fn default() -> Self {
        Self::new("Indonesia")
    }
}

impl LocationResolver {
    /// `country_fallback` is used both as the province default and as the last tier.
    pub fn new(country_fallback: impl Into<String>) -> Self {
        Self {
            country_fallback: country_fallback.into(),
        }
    }

    /// The ordered attempt list for a query. Always three entries.
    #[must_use]
    pub fn plan(&self, query: &LocationQuery) -> [Attempt; 3] {
        let province = query
            .province_name
            .as_deref()
            .unwrap_or(&self.country_fallback);

        [
            Attempt {
                tier: ResolutionTier::Regency,
                query_name: normalize_regency(&query.regency_name),
            },
            Attempt {
                tier: ResolutionTier::Province,
                query_name: normalize_province(province),
            },
            Attempt {
                tier: ResolutionTier::Country,
                query_name: normalize_province(&self.country_fallback),
            },
        ]
    }

    /// Resolve a query into current conditions, consuming the attempt list in order
    pub async fn resolve<P>(&self, provider: &P, query: &LocationQuery) -> crate::Result<Resolution>
    where
        P: WeatherProvider + ?Sized,
    {
        debug!("Resolving location query: {:?}", query);

        let plan = self.plan(query);
        let total = plan.len();
        let mut last_error = None;

        for (index, attempt) in plan.into_iter().enumerate() {
            debug!(
                "Attempt {}/{} ({} tier): '{}'",
                index + 1,
                total,
                attempt.tier,
                attempt.query_name
            );

            match provider.current_by_city(&attempt.query_name).await {
                Ok(conditions) => {
                    info!(
                        "Resolved '{}' via {} tier as {} ({})",
                        query.regency_name,
                        attempt.tier,
                        conditions.city_name,
                        conditions.coordinates.format_coordinates()
                    );
                    return Ok(Resolution {
                        conditions,
                        tier: attempt.tier,
                        query_name: attempt.query_name,
                        attempts: index + 1,
                    });
                }
                Err(e) if e.is_fallback_eligible() => {
                    warn!(
                        "{} tier lookup for '{}' failed: {}",
                        attempt.tier, attempt.query_name, e
                    );
                    last_error = Some(e);
                }
                // a failure no later tier can fix ends the chain early
                Err(e) => {
                    warn!(
                        "{} tier lookup for '{}' failed, not retrying: {}",
                        attempt.tier, attempt.query_name, e
                    );
                    return Err(CuacaError::Exhausted {
                        attempts: index + 1,
                        last: Box::new(e),
                    });
                }
            }
        }

        Err(CuacaError::Exhausted {
            attempts: total,
            last: Box::new(
                last_error.unwrap_or_else(|| CuacaError::network("no lookup attempted")),
            ),
        })
    }
}
