use crate::ports::{KeyValueStore, SCAN_START};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Limits for one bounded SCAN walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanBudget {
    /// COUNT hint sent with every SCAN call
    pub count_hint: usize,
    /// Stop once this many keys have been collected
    pub max_keys: usize,
    /// Stop after this many SCAN calls, if set
    pub max_round_trips: Option<usize>,
}

impl ScanBudget {
    pub fn keys(count_hint: usize, max_keys: usize) -> Self {
        Self {
            count_hint,
            max_keys,
            max_round_trips: None,
        }
    }

    pub fn with_max_round_trips(mut self, round_trips: usize) -> Self {
        self.max_round_trips = Some(round_trips);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutcome {
    /// At most `max_keys` keys, in the order the store returned them
    pub keys: Vec<String>,
    pub round_trips: usize,
    /// True only when the cursor came back to the start sentinel
    pub complete: bool,
}

/// Best-effort cursor walk over the key namespace.
///
/// Stops at the first of: cursor exhausted, key cap reached, round-trip cap
/// reached, or a failed SCAN call. A capped walk yields a prefix of the
/// matching keys, not a sample.
pub struct NamespaceScanner {
    store: Arc<dyn KeyValueStore>,
}

impl NamespaceScanner {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self), name = "namespace_scan")]
    pub async fn scan(&self, pattern: &str, budget: ScanBudget) -> ScanOutcome {
        let mut outcome = ScanOutcome::default();
        let mut cursor = SCAN_START;

        loop {
            if budget
                .max_round_trips
                .is_some_and(|max| outcome.round_trips >= max)
            {
                debug!(round_trips = outcome.round_trips, "Scan round-trip cap reached");
                break;
            }

            let batch = match self.store.scan(cursor, pattern, budget.count_hint).await {
                Ok(batch) => batch,
                Err(e) => {
                    warn!(error = %e, collected = outcome.keys.len(), "Scan aborted");
                    break;
                }
            };
            outcome.round_trips += 1;
            outcome.keys.extend(batch.keys);

            if outcome.keys.len() >= budget.max_keys {
                outcome.keys.truncate(budget.max_keys);
                debug!(max_keys = budget.max_keys, "Scan key cap reached");
                break;
            }

            cursor = batch.cursor;
            if cursor == SCAN_START {
                outcome.complete = true;
                break;
            }
        }

        debug!(
            keys = outcome.keys.len(),
            round_trips = outcome.round_trips,
            complete = outcome.complete,
            "Scan finished"
        );
        outcome
    }
}
