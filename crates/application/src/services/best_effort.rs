use keyscope_domain::DomainError;
use tracing::debug;

/// Collapses a per-key fetch into "value or absent". Failures are expected on
/// restricted stores (e.g. MEMORY disabled) and only logged at debug.
pub fn best_effort<T>(what: &'static str, key: &str, result: Result<T, DomainError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            debug!(key = %key, field = what, error = %e, "Per-key fetch failed");
            None
        }
    }
}
