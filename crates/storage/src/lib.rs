#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod cached;
pub mod json;
pub mod memory;

pub use cached::CachedDirectory;
pub use memory::{InMemoryDirectory, InMemorySink};
