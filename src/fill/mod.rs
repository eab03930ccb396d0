// src/fill/mod.rs
mod fill;

pub use fill::{fill, Outcome, PageSpec, RunResult};
