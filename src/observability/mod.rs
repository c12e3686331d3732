//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging through the tracing crate
//! - Rewrite decisions emit trace-level events only; the hot path stays
//!   allocation-only
//! - Subscriber setup is opt-in for embedding applications

pub mod logging;
