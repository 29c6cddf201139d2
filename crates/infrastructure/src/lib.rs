//! Keyscope Infrastructure Layer
pub mod store;

pub use store::RedisStore;
