//! Core library for the `region-metrics` service.
//!
//! Telemetry records are loaded once into a read-only table
//! ([`dataset`]), aggregated per region on demand ([`metrics`]) and served
//! over a small HTTP endpoint ([`server`]). The binary wires these together
//! with CLI/config handling; the library APIs are what the tests and fuzz
//! targets drive.
pub mod args;
pub mod config;
pub mod dataset;
pub mod error;
pub mod logger;
pub mod metrics;
pub mod server;
pub mod shutdown;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;
