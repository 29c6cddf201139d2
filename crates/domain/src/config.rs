pub mod drupal;
pub mod errors;
pub mod logging;
pub mod root;
pub mod sampler;
pub mod server;
pub mod store;

pub use drupal::DrupalConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use sampler::SamplerConfig;
pub use server::ServerConfig;
pub use store::StoreConfig;
