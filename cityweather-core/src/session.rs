//! Lifecycle of the single user-visible query.

use std::sync::{
    Arc, Mutex, MutexGuard,
    atomic::{AtomicU64, Ordering},
};

use tokio::{sync::watch, task::JoinHandle};
use tracing::{debug, warn};

use crate::{client::WeatherClient, error::FetchError, model::WeatherReport};

/// What the presentation layer reads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryState {
    pub city_input: String,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub is_online: bool,
    pub report: Option<WeatherReport>,
}

/// How a call to [`QuerySession::submit`] ended.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Blank input; state untouched.
    Ignored,
    /// The report was stored.
    Loaded,
    /// The error message was stored.
    Failed(FetchError),
    /// A newer submission started meanwhile; this result was dropped.
    Stale,
}

#[derive(Debug)]
pub struct QuerySession {
    client: WeatherClient,
    state: Mutex<QueryState>,
    generation: AtomicU64,
}

impl QuerySession {
    pub fn new(client: WeatherClient, initial_loading: bool) -> Self {
        let state = QueryState {
            is_loading: initial_loading,
            is_online: client.is_online(),
            ..QueryState::default()
        };

        Self {
            client,
            state: Mutex::new(state),
            generation: AtomicU64::new(0),
        }
    }

    fn lock(&self) -> MutexGuard<'_, QueryState> {
        // State is replaced wholesale, so a poisoned value is still coherent.
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn snapshot(&self) -> QueryState {
        self.lock().clone()
    }

    pub fn set_online(&self, online: bool) {
        self.lock().is_online = online;
    }

    /// Runs one query and applies its result unless a newer one superseded it.
    ///
    /// Connectivity is sampled once; the offline and blank-input decisions
    /// both come from that single reading.
    pub async fn submit(&self, city: &str) -> SubmitOutcome {
        let online = self.client.is_online();

        if !online {
            let mut state = self.lock();
            self.generation.fetch_add(1, Ordering::SeqCst);
            state.is_online = false;
            state.city_input = city.to_string();
            state.is_loading = false;
            state.report = None;
            state.error_message = FetchError::Offline.user_message().map(str::to_owned);
            return SubmitOutcome::Failed(FetchError::Offline);
        }

        if city.trim().is_empty() {
            return SubmitOutcome::Ignored;
        }

        let token = {
            let mut state = self.lock();
            let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            state.is_online = true;
            state.city_input = city.to_string();
            state.error_message = None;
            state.report = None;
            state.is_loading = true;
            token
        };

        let result = self.client.fetch_weather(city).await;

        let mut state = self.lock();
        if self.generation.load(Ordering::SeqCst) != token {
            debug!(token, city, "discarding stale weather response");
            return SubmitOutcome::Stale;
        }

        state.is_loading = false;
        match result {
            Ok(report) => {
                state.report = Some(report);
                SubmitOutcome::Loaded
            }
            Err(FetchError::EmptyInput) => SubmitOutcome::Ignored,
            Err(err) => {
                warn!(error = %err, "weather query failed");
                state.report = None;
                state.error_message = err.user_message().map(str::to_owned);
                SubmitOutcome::Failed(err)
            }
        }
    }

    /// Follows connectivity changes until the sender goes away.
    pub fn watch_connectivity(self: &Arc<Self>, mut rx: watch::Receiver<bool>) -> JoinHandle<()> {
        let session = Arc::clone(self);
        tokio::spawn(async move {
            session.set_online(*rx.borrow_and_update());
            while rx.changed().await.is_ok() {
                let online = *rx.borrow_and_update();
                debug!(online, "connectivity changed");
                session.set_online(online);
            }
        })
    }
}
