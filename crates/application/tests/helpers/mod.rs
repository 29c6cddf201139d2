#![allow(dead_code)]

mod fake_store;

pub use fake_store::{FakeStore, FakeValue};
