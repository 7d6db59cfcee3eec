//! Search flow state: an explicit reducer over the events of one lookup
//! cycle, plus the session driver that talks to a [`WeatherProvider`].

use crate::cities;
use crate::model::CurrentConditions;
use crate::provider::WeatherProvider;

/// The one user-visible failure text. Every provider failure mode collapses
/// into this message; detail goes to the logs only.
pub const LOOKUP_FAILED_MESSAGE: &str = "Город не найден. Пожалуйста, проверьте название.";

/// Display state of the search flow. All mutation goes through
/// [`SearchState::apply`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    query: String,
    suggestions: Vec<&'static str>,
    panel_visible: bool,
    weather: Option<CurrentConditions>,
    error: Option<&'static str>,
    loading: bool,
}

/// A single state transition trigger.
#[derive(Debug, Clone)]
pub enum SearchEvent {
    /// The input text changed; suggestions are recomputed.
    QueryChanged(String),
    /// A lookup request is about to go out.
    LookupStarted,
    /// The provider answered.
    LookupSucceeded(CurrentConditions),
    /// The provider failed, in whatever way.
    LookupFailed,
}

impl SearchState {
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Cities currently offered by the suggestion panel, in list order.
    pub fn suggestions(&self) -> &[&'static str] {
        &self.suggestions
    }

    /// True while the panel has something to show. Hidden for a blank or
    /// unmatched query and after a successful lookup.
    pub fn panel_visible(&self) -> bool {
        self.panel_visible
    }

    pub fn weather(&self) -> Option<&CurrentConditions> {
        self.weather.as_ref()
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True if a new lookup may start; false while one is in flight.
    pub fn can_submit(&self) -> bool {
        !self.loading
    }

    pub fn apply(&mut self, event: SearchEvent) {
        match event {
            SearchEvent::QueryChanged(query) => {
                self.suggestions = cities::matching(&query);
                self.panel_visible = !self.suggestions.is_empty();
                self.query = query;
            }
            SearchEvent::LookupStarted => {
                self.loading = true;
                self.error = None;
            }
            SearchEvent::LookupSucceeded(conditions) => {
                self.weather = Some(conditions);
                self.loading = false;
                self.panel_visible = false;
            }
            SearchEvent::LookupFailed => {
                // The previous result stays on display next to the error.
                self.error = Some(LOOKUP_FAILED_MESSAGE);
                self.loading = false;
            }
        }
    }
}

/// Owns the display state and a provider; turns user actions into events.
///
/// At most one request is in flight: lookups are rejected while
/// [`SearchState::can_submit`] is false, and a city that trims to nothing is
/// a complete no-op.
#[derive(Debug)]
pub struct SearchSession<P> {
    state: SearchState,
    provider: P,
}

impl<P: WeatherProvider> SearchSession<P> {
    pub fn new(provider: P) -> Self {
        Self {
            state: SearchState::default(),
            provider,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Keystroke-level update of the query text.
    pub fn input(&mut self, text: &str) {
        self.state.apply(SearchEvent::QueryChanged(text.to_string()));
    }

    /// Look up the current query.
    pub async fn submit(&mut self) {
        let city = self.state.query.clone();
        self.lookup(&city).await;
    }

    /// Pick a suggestion by its position in the visible list; the pick also
    /// becomes the query text. Out-of-range picks do nothing.
    pub async fn choose_suggestion(&mut self, index: usize) {
        let Some(city) = self.state.suggestions.get(index).copied() else {
            return;
        };

        self.state.apply(SearchEvent::QueryChanged(city.to_string()));
        self.lookup(city).await;
    }

    async fn lookup(&mut self, city: &str) {
        if city.trim().is_empty() {
            return;
        }
        if !self.state.can_submit() {
            return;
        }

        self.state.apply(SearchEvent::LookupStarted);

        match self.provider.current_weather(city).await {
            Ok(conditions) => self.state.apply(SearchEvent::LookupSucceeded(conditions)),
            Err(err) => {
                tracing::debug!("weather lookup for {city:?} failed: {err}");
                self.state.apply(SearchEvent::LookupFailed);
            }
        }
    }
}
