pub mod info_sampler;
pub mod runner;

pub use info_sampler::InfoSamplerJob;
pub use runner::JobRunner;
