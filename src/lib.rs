// src/lib.rs

#[macro_use]
pub mod macros;

pub mod core;
pub mod dom;
pub mod specs;

pub mod cli;
pub mod error;
pub mod fill;
pub mod log;
pub mod mapping;
pub mod params;
pub mod report;
pub mod runner;
