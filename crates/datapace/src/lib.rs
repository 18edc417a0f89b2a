//! Core library for the Datapace consultancy site backend.
//!
//! Everything the HTTP service exposes lives here: the pure calculators
//! (growth projection, ROI estimation, maturity scoring), the static
//! content catalog served by the listing endpoints, the lead-intake
//! service with its repository seam, the chat auto-responder, and the
//! pipeline showcase state machine. The `services/api` crate wires these
//! modules into an axum server and a CLI.

pub mod calculators;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod error;
pub mod leads;
pub mod pipeline;
pub mod telemetry;
