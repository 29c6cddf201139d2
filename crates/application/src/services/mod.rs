mod best_effort;
mod latest_sample;
mod namespace_scanner;

pub use best_effort::best_effort;
pub use latest_sample::LatestSample;
pub use namespace_scanner::{NamespaceScanner, ScanBudget, ScanOutcome};
