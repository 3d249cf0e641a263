//! Core data models for dictionary entries.

mod record;

pub use record::{BilingualEntry, DictionaryRecord, ExamplePair, MonolingualEntry};
