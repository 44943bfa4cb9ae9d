use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::core::search::filter_services;
use crate::models::ServiceItem;

/// Quiet period between the last keystroke and the outbound match request
pub const DEBOUNCE: Duration = Duration::from_millis(400);

pub type BackendError = Box<dyn std::error::Error + Send + Sync>;

/// Seam over the match endpoint so the submitter can be driven by a stub
/// in tests. The real implementation is `services::MatchApiClient`.
pub trait MatchBackend: Send + Sync {
    fn match_ids<'a>(
        &'a self,
        query: &'a str,
        services: &'a [ServiceItem],
    ) -> Pin<Box<dyn Future<Output = Result<Vec<u64>, BackendError>> + Send + 'a>>;
}

#[derive(Default)]
struct SubmitterState {
    query: String,
    ai_ids: Option<Vec<u64>>,
    selected_id: Option<u64>,
}

/// Debounced query submitter with supersede protection.
///
/// Every keystroke calls `submit`, which bumps a generation counter, waits
/// out the debounce window and issues at most one backend request. The
/// generation is re-checked after the debounce sleep and again after the
/// request returns, so a call superseded by a newer keystroke never applies
/// its result: Idle -> Debouncing -> InFlight -> Resolved/Failed/Superseded.
/// Failed, Superseded and an empty id list all leave "no AI ids", which
/// routes `results` through the local substring fallback.
pub struct QuerySubmitter<B: MatchBackend> {
    backend: Arc<B>,
    catalog: Vec<ServiceItem>,
    ai_enabled: bool,
    debounce: Duration,
    generation: AtomicU64,
    state: Mutex<SubmitterState>,
}

impl<B: MatchBackend> QuerySubmitter<B> {
    pub fn new(backend: Arc<B>, catalog: Vec<ServiceItem>) -> Self {
        Self {
            backend,
            catalog,
            ai_enabled: true,
            debounce: DEBOUNCE,
            generation: AtomicU64::new(0),
            state: Mutex::new(SubmitterState::default()),
        }
    }

    /// Disable the AI path; `results` then always uses the local fallback.
    pub fn ai_enabled(mut self, enabled: bool) -> Self {
        self.ai_enabled = enabled;
        self
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Record a keystroke and (after the quiet period) refresh the AI ids.
    pub async fn submit(&self, query: &str) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut state = self.state.lock().expect("submitter state poisoned");
            state.query = query.to_string();
        }

        let trimmed = query.trim().to_string();
        if trimmed.is_empty() || !self.ai_enabled {
            // No request for empty queries or a disabled AI path; any
            // previous AI result is stale for the new query.
            let mut state = self.state.lock().expect("submitter state poisoned");
            if self.generation.load(Ordering::SeqCst) == generation {
                state.ai_ids = None;
                Self::clear_stale_selection(&self.catalog, &mut state);
            }
            return;
        }

        tokio::time::sleep(self.debounce).await;
        if self.generation.load(Ordering::SeqCst) != generation {
            return; // superseded while debouncing
        }

        let outcome = self.backend.match_ids(&trimmed, &self.catalog).await;
        if self.generation.load(Ordering::SeqCst) != generation {
            return; // superseded while in flight
        }

        let mut state = self.state.lock().expect("submitter state poisoned");
        state.ai_ids = match outcome {
            Ok(ids) if !ids.is_empty() => Some(ids),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!("Match request failed, using local fallback: {}", e);
                None
            }
        };
        Self::clear_stale_selection(&self.catalog, &mut state);
    }

    /// Mark a service as selected/highlighted
    pub fn select(&self, id: u64) {
        let mut state = self.state.lock().expect("submitter state poisoned");
        state.selected_id = Some(id);
    }

    pub fn selected_id(&self) -> Option<u64> {
        self.state
            .lock()
            .expect("submitter state poisoned")
            .selected_id
    }

    /// Current filtered view of the catalog (AI ranking when available,
    /// substring fallback otherwise)
    pub fn results(&self) -> Vec<ServiceItem> {
        let state = self.state.lock().expect("submitter state poisoned");
        filter_services(&self.catalog, &state.query, state.ai_ids.as_deref())
            .into_iter()
            .cloned()
            .collect()
    }

    fn clear_stale_selection(catalog: &[ServiceItem], state: &mut SubmitterState) {
        let Some(selected) = state.selected_id else {
            return;
        };
        let visible = filter_services(catalog, &state.query, state.ai_ids.as_deref());
        if !visible.iter().any(|s| s.id == selected) {
            state.selected_id = None;
        }
    }
}
