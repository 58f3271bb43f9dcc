//! Campus Chat - message persistence core.
//!
//! This crate owns the data model and storage operations for conversation
//! messages: creation, retrieval with relationship resolution, soft deletion,
//! tag replacement, and tag-based search. Transport, identity resolution, and
//! conversation lifecycle belong to the calling layers.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
