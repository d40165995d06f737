//! The MealFinder form component
//!
//! Owns the form state and composes the collaborator ports: acquires
//! the device position once at mount, holds the user-adjustable search
//! parameters, runs the submission flow (places fetch, optional AI
//! notification, random pick, directions), and exposes a rendering
//! snapshot for the presentation layer.
//!
//! All state lives behind a single mutex owned by this one instance;
//! the only concurrency safety mechanism is the [`LivenessToken`],
//! checked before every state write that follows a suspension point.

use std::fmt;
use std::sync::Arc;

use domain::{Coordinates, Place, PriceTier, SearchDistance, SearchParameters, SessionIdentity};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument, warn};

use crate::error::ApplicationError;
use crate::liveness::LivenessToken;
use crate::ports::{AiSearchPort, GeolocationPort, NavigatorPort, NearbyQuery, PlacesPort, SessionPort};
use crate::services::directions::{DEFAULT_MAPS_BASE_URL, directions_url};
use crate::services::form_view::{FILTER_PLACEHOLDER, FilterField, FormView, LOCATION_PROMPT};

/// Fixed origin and maps prefix for a component instance
#[derive(Debug, Clone)]
pub struct MealFinderConfig {
    /// Search center and directions start point
    pub origin: Coordinates,
    /// Maps service prefix for directions URLs
    pub maps_base_url: String,
}

impl MealFinderConfig {
    /// Configuration with the default maps service
    #[must_use]
    pub fn new(origin: Coordinates) -> Self {
        Self {
            origin,
            maps_base_url: DEFAULT_MAPS_BASE_URL.to_string(),
        }
    }

    /// Override the maps service prefix
    #[must_use]
    pub fn with_maps_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.maps_base_url = base_url.into();
        self
    }
}

/// Everything the form holds between interactions. The places
/// collection is replaced wholesale by each search.
#[derive(Debug, Default)]
struct FormState {
    location: Option<Coordinates>,
    parameters: SearchParameters,
    places: Vec<Place>,
    loading: bool,
    error: Option<String>,
}

/// Outcome of one submission, for callers that render the result.
///
/// Errors never cross the component boundary as `Err`; they are folded
/// into the form's error state and reported here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Directions were opened for the named destination
    Opened {
        /// Name of the randomly selected place
        destination: String,
        /// The directions URL that was opened
        url: String,
    },
    /// The search returned nothing; no navigation, no error
    NoResults,
    /// The submission failed with the given user-visible message
    Failed(String),
    /// Refused: no location yet, a submission already pending, or the
    /// component was torn down mid-flight
    NotReady,
}

/// The single form component
pub struct MealFinder {
    config: MealFinderConfig,
    geolocation: Arc<dyn GeolocationPort>,
    places: Arc<dyn PlacesPort>,
    ai_search: Arc<dyn AiSearchPort>,
    navigator: Arc<dyn NavigatorPort>,
    session: Arc<dyn SessionPort>,
    state: Mutex<FormState>,
    liveness: LivenessToken,
    rng: Mutex<StdRng>,
}

impl fmt::Debug for MealFinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MealFinder")
            .field("config", &self.config)
            .field("live", &self.liveness.is_live())
            .finish_non_exhaustive()
    }
}

impl MealFinder {
    /// Create the component with all collaborator ports injected
    #[must_use]
    pub fn new(
        config: MealFinderConfig,
        geolocation: Arc<dyn GeolocationPort>,
        places: Arc<dyn PlacesPort>,
        ai_search: Arc<dyn AiSearchPort>,
        navigator: Arc<dyn NavigatorPort>,
        session: Arc<dyn SessionPort>,
    ) -> Self {
        Self {
            config,
            geolocation,
            places,
            ai_search,
            navigator,
            session,
            state: Mutex::new(FormState::default()),
            liveness: LivenessToken::new(),
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Fix the selection RNG seed (deterministic tests)
    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    /// Request the device position, exactly once, fire-and-forget.
    ///
    /// Success stores the coordinates; failure or an unsupported
    /// platform sets the standing error and leaves them absent. No
    /// automatic retry. State writes are dropped after [`Self::unmount`].
    #[instrument(skip(self))]
    pub async fn mount(&self) {
        match self.geolocation.current_position().await {
            Ok(position) => {
                if self.liveness.is_live() {
                    self.state.lock().location = Some(position);
                    debug!(position = %position, "Acquired device position");
                }
            },
            Err(err) => {
                if self.liveness.is_live() {
                    self.state.lock().error = Some(err.to_string());
                    warn!(error = %err, "Geolocation unavailable");
                }
            },
        }
    }

    /// Tear the component down: any still-pending async completion is
    /// dropped without touching state
    pub fn unmount(&self) {
        self.liveness.revoke();
    }

    /// The component's cancellation token
    #[must_use]
    pub fn liveness(&self) -> LivenessToken {
        self.liveness.clone()
    }

    /// Move the distance slider; out-of-range input is clamped
    pub fn set_distance(&self, km: u8) {
        self.state.lock().parameters.distance = SearchDistance::clamped(km);
    }

    /// Select a price tier in the button group
    pub fn set_price(&self, price: PriceTier) {
        self.state.lock().parameters.price = price;
    }

    /// Update the AI filter text. Input from non-premium sessions is
    /// ignored; the control stays locked on its placeholder.
    pub fn set_mystery_filter(&self, text: &str) {
        if !self.session.current_identity().is_premium() {
            return;
        }
        self.state.lock().parameters.mystery_filter = text.to_string();
    }

    /// The identity supplied by the session collaborator
    #[must_use]
    pub fn session_identity(&self) -> SessionIdentity {
        self.session.current_identity()
    }

    /// The result collection of the current search
    #[must_use]
    pub fn places(&self) -> Vec<Place> {
        self.state.lock().places.clone()
    }

    /// Run one submission: fetch places for the current parameters,
    /// notify the AI collaborator for premium sessions, pick one result
    /// uniformly at random and open directions to it.
    ///
    /// Not reentrant: while a submission is pending, further calls
    /// return [`SubmitOutcome::NotReady`]. Submission is also refused
    /// until coordinates exist.
    #[instrument(skip(self))]
    pub async fn submit(&self) -> SubmitOutcome {
        let (origin, parameters) = {
            let mut state = self.state.lock();
            if state.loading {
                debug!("Submission already pending, ignoring");
                return SubmitOutcome::NotReady;
            }
            if state.location.is_none() {
                debug!("No device position yet, submission blocked");
                return SubmitOutcome::NotReady;
            }
            state.loading = true;
            state.error = None;
            (self.config.origin, state.parameters.clone())
        };

        let outcome = match self.run_submission(origin, &parameters).await {
            Ok(outcome) => outcome,
            Err(err) => {
                let message = err.user_message();
                warn!(error = %err, "Submission failed");
                if self.liveness.is_live() {
                    self.state.lock().error = Some(message.clone());
                }
                SubmitOutcome::Failed(message)
            },
        };

        if self.liveness.is_live() {
            self.state.lock().loading = false;
        }
        outcome
    }

    async fn run_submission(
        &self,
        origin: Coordinates,
        parameters: &SearchParameters,
    ) -> Result<SubmitOutcome, ApplicationError> {
        let query = NearbyQuery::from_parameters(origin, parameters);
        let places = self.places.search_nearby(&query).await?;
        debug!(results = places.len(), "Nearby search resolved");

        if self.session.current_identity().is_premium() {
            self.dispatch_ai_filter(&places, parameters.mystery_filter.clone());
        }

        if !self.liveness.is_live() {
            return Ok(SubmitOutcome::NotReady);
        }

        let selected = {
            let mut state = self.state.lock();
            state.places = places;
            if state.places.is_empty() {
                None
            } else {
                let index = self.rng.lock().random_range(0..state.places.len());
                Some(state.places[index].clone())
            }
        };

        let Some(place) = selected else {
            debug!("Empty result set, nothing to open");
            return Ok(SubmitOutcome::NoResults);
        };

        let url = directions_url(&self.config.maps_base_url, &origin, &place.compound_code);
        self.navigator.open_external(&url).await?;
        info!(destination = %place.name, "Opened directions");

        Ok(SubmitOutcome::Opened {
            destination: place.name,
            url,
        })
    }

    /// Dispatch the AI notification as a detached task. Navigation does
    /// not wait for it; its failure is logged and never surfaced.
    fn dispatch_ai_filter(&self, places: &[Place], filter: String) {
        let summaries: Vec<_> = places.iter().map(Place::summary).collect();
        let ai_search = Arc::clone(&self.ai_search);
        tokio::spawn(async move {
            if let Err(err) = ai_search.submit_filter(summaries, filter).await {
                warn!(error = %err, "AI filter notification failed");
            }
        });
    }

    /// Snapshot the rendering contract
    #[must_use]
    pub fn view(&self) -> FormView {
        let premium = self.session.current_identity().is_premium();
        let state = self.state.lock();
        FormView {
            location_text: state
                .location
                .map_or_else(|| LOCATION_PROMPT.to_string(), |loc| loc.to_string()),
            missing_location: state.location.is_none(),
            distance_km: state.parameters.distance.kilometers(),
            price: state.parameters.price,
            filter_field: if premium {
                FilterField::Editable(state.parameters.mystery_filter.clone())
            } else {
                FilterField::Locked(FILTER_PLACEHOLDER)
            },
            submit_enabled: state.location.is_some() && !state.loading,
            controls_enabled: !state.loading,
            loading: state.loading,
            error: state.error.clone(),
        }
    }
}
