//! Integration tests for the lexicon facade.
//!
//! These tests drive the full stack (vocabulary file, action log, replay,
//! dictionary, segmentation, line index) through a real data directory,
//! including restarts. Unit tests inside each crate cover the pieces in
//! isolation.

#[path = "../common/mod.rs"]
mod common;

mod edit_pipeline;
mod properties;
mod restart;
