//! # depin Support
//!
//! Shared utilities for the depin crates.
//!
//! This crate provides:
//! - Type-name rendering for diagnostics and `Debug` output
//! - Helpers for writing test doubles that fail loudly

pub mod mock;
pub mod rendering;
