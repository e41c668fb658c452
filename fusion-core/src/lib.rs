//! Fusion Core
//!
//! Core types and pure logic for the face/voice fusion job smoke test.
//!
//! This crate contains:
//! - Domain types: job requests, status snapshots, artifacts and outcomes
//! - DTOs: wire bodies exchanged with the fusion provider
//! - Classification: artifact extraction and outcome classification
//!
//! Nothing in here performs I/O. The HTTP client and the polling loop live in
//! `fusion-client` and `fusion-runner`.

pub mod domain;
pub mod dto;
pub mod error;

pub use error::ValidationError;
