//! Weather facade
//!
//! Runs one logical lookup: resolve current conditions through the fallback
//! chain, publish them, then fetch and publish the daily forecast for the
//! coordinates that were actually resolved. Every lookup gets a generation
//! number; only the newest generation may publish events or move the state.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, instrument, warn};

use crate::config::CuacaConfig;
use crate::greeting::Greeting;
use crate::location_resolver::{LocationResolver, ResolutionTier};
use crate::models::{CurrentConditions, ForecastEntry, LocationQuery};
use crate::weather::{WeatherProvider, fetch_forecast};
use crate::CuacaError;

/// Current conditions plus what the caller needs to present them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentReport {
    pub conditions: CurrentConditions,
    pub greeting: Greeting,
    pub tier: ResolutionTier,
    /// Normalized name that the provider matched
    pub query_name: String,
}

/// Everything a completed lookup produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub current: CurrentReport,
    pub forecast: Vec<ForecastEntry>,
}

#[derive(Debug, Clone)]
pub enum WeatherUpdate {
    CurrentConditions(CurrentReport),
    ForecastUpdated(Vec<ForecastEntry>),
    Failed(String),
}

/// An update tagged with the lookup that produced it
#[derive(Debug, Clone)]
pub struct WeatherEvent {
    pub generation: u64,
    pub update: WeatherUpdate,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LookupState {
    #[default]
    Idle,
    Loading {
        generation: u64,
    },
    Success {
        generation: u64,
    },
    Error {
        generation: u64,
        message: String,
    },
}

pub struct WeatherService<P> {
    provider: Arc<P>,
    resolver: LocationResolver,
    generation: AtomicU64,
    events: mpsc::UnboundedSender<WeatherEvent>,
    state: watch::Sender<LookupState>,
}

impl<P> WeatherService<P>
where
    P: WeatherProvider,
{
    /// Create the service and the receiving end of its event stream.
    pub fn new(
        provider: Arc<P>,
        config: &CuacaConfig,
    ) -> (Self, mpsc::UnboundedReceiver<WeatherEvent>) {
        Self::with_resolver(provider, LocationResolver::new(&config.lookup.country_fallback))
    }

    pub fn with_resolver(
        provider: Arc<P>,
        resolver: LocationResolver,
    ) -> (Self, mpsc::UnboundedReceiver<WeatherEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        let (state, _) = watch::channel(LookupState::Idle);

        let service = Self {
            provider,
            resolver,
            generation: AtomicU64::new(0),
            events,
            state,
        };
        (service, receiver)
    }

    /// Observe the lookup state machine.
    pub fn state(&self) -> watch::Receiver<LookupState> {
        self.state.subscribe()
    }

    /// Generation of the most recently started lookup (0 before the first one).
    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Resolve weather for a query.
    ///
    /// Publishes `CurrentConditions` as soon as the fallback chain succeeds
    /// and `ForecastUpdated` once the forecast arrives; a failure at either
    /// step publishes `Failed`. If a newer lookup starts meanwhile, this one
    /// publishes nothing further and returns `Superseded`.
    #[instrument(skip(self), fields(regency = %query.regency_name))]
    pub async fn resolve_weather(&self, query: &LocationQuery) -> crate::Result<WeatherReport> {
        let generation = self.begin();
        debug!("Starting lookup generation {}", generation);

        let resolution = match self.resolver.resolve(self.provider.as_ref(), query).await {
            Ok(resolution) => resolution,
            Err(e) => return Err(self.fail(generation, e)),
        };

        let current = CurrentReport {
            greeting: Greeting::now(),
            tier: resolution.tier,
            query_name: resolution.query_name,
            conditions: resolution.conditions,
        };
        self.publish(generation, WeatherUpdate::CurrentConditions(current.clone()))?;

        let coordinates = current.conditions.coordinates;
        let forecast = match fetch_forecast(self.provider.as_ref(), coordinates).await {
            Ok(forecast) => forecast,
            Err(e) => return Err(self.fail(generation, e)),
        };
        self.publish(generation, WeatherUpdate::ForecastUpdated(forecast.clone()))?;
        if !self.set_state(generation, LookupState::Success { generation }) {
            return Err(CuacaError::Superseded { generation });
        }

        info!(
            "Lookup {} complete: {} with {} forecast days",
            generation,
            current.conditions.city_name,
            forecast.len()
        );

        Ok(WeatherReport { current, forecast })
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    // Generation allocation, publication and state writes all run under the
    // watch channel's write lock, so a check against the latest generation
    // cannot be invalidated before the matching send.

    /// Allocate the next generation and move the state to `Loading`.
    fn begin(&self) -> u64 {
        let mut generation = 0;
        self.state.send_modify(|state| {
            generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *state = LookupState::Loading { generation };
        });
        generation
    }

    fn publish(&self, generation: u64, update: WeatherUpdate) -> crate::Result<()> {
        let mut published = false;
        self.state.send_if_modified(|_| {
            if self.is_current(generation) {
                if self.events.send(WeatherEvent { generation, update }).is_err() {
                    debug!("No event receiver for lookup {}", generation);
                }
                published = true;
            }
            false
        });

        if published {
            Ok(())
        } else {
            debug!("Dropping update from superseded lookup {}", generation);
            Err(CuacaError::Superseded { generation })
        }
    }

    fn set_state(&self, generation: u64, next: LookupState) -> bool {
        self.state.send_if_modified(|state| {
            if !self.is_current(generation) {
                return false;
            }
            *state = next;
            true
        })
    }

    /// Publish a failure for `generation` and hand back the error to return.
    fn fail(&self, generation: u64, error: CuacaError) -> CuacaError {
        if !self.is_current(generation) {
            debug!("Superseded lookup {} failed: {}", generation, error);
            return CuacaError::Superseded { generation };
        }

        warn!("Lookup {} failed: {}", generation, error);
        let message = error.to_string();
        if self
            .publish(generation, WeatherUpdate::Failed(message.clone()))
            .is_err()
            || !self.set_state(generation, LookupState::Error { generation, message })
        {
            return CuacaError::Superseded { generation };
        }
        error
    }
}
