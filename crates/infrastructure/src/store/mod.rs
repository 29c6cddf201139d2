mod redis_store;
mod reply;

pub use redis_store::RedisStore;
