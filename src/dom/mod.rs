// src/dom/mod.rs
//! In-memory document model for saved dataset pages.
//!
//! `tree` holds the arena element tree plus the [`Document`] capability
//! contract the filler runs against; `parse` builds a [`PageDoc`] from a
//! saved HTML snapshot. The filler never touches markup directly — it only
//! sees the trait.

pub mod parse;
pub mod tree;

pub use parse::parse_snapshot;
pub use tree::{Dispatch, Document, NodeId, Notice, PageDoc, WriteError};
