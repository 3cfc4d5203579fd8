//! # tonal-core
//!
//! Core types and error types for Tonal.
//!
//! This crate provides the types shared across all Tonal crates:
//! - Validated account handles
//! - Directory entities (accounts and their posts)
//! - Sentiment samples and per-account averages
//! - The whole-run report returned by the `tonal` binary
//! - Cross-cutting error types

pub mod entities;
pub mod errors;
pub mod handle;
pub mod responses;
